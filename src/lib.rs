// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bonza: crossword-style word placement and puzzle chunk segmentation.
//!
//! A word list is packed into a connected letter grid ([`layout::placement`]), which is then cut
//! into small connected chunks of roughly equal size ([`layout::chunking`]) that serve as puzzle
//! pieces. Every random decision goes through an injected [`rng::RandomSource`].

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod rng;
pub mod store;
