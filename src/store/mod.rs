// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for layouts and chunk layouts.
//!
//! Both are stored as JSON arrays of flat records so other tools (and older Bonza front ends) can
//! read them without knowing about the engine types.

pub mod layout_file;

pub use layout_file::{
    chunks_from_json, chunks_json_schema, chunks_to_json, layout_from_json, layout_json_schema,
    layout_to_json, load_chunks, load_layout, save_chunks, save_layout, ChunkRecord, SquareRecord,
    StoreError, WordPositionRecord,
};
