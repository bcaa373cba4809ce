// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! Geometry primitives, placed words, letter squares and chunks. Containers that enforce the
//! layout invariants live in [`crate::layout`].

pub mod chunk;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod geometry;
pub mod square;
pub mod word_position;

pub use chunk::{Chunk, ChunkId};
pub use geometry::{BoundingRectangle, Position};
pub use square::Square;
pub use word_position::{Orientation, WordPosition};
