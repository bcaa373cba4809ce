// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms.
//!
//! This module holds the letter grid model, the greedy word placement engine and the chunk
//! segmenter that cuts a finished grid into puzzle pieces.

pub mod chunking;
pub mod grid;
pub mod placement;

pub use chunking::{
    build_chunk_layout, ok_accumulation, ChunkLayout, ChunkLayoutError, DEFAULT_AVERAGE_COUNT,
};
pub use grid::{words_intersect, LayoutError, PlaceWordStatus, WordPositionLayout};
pub use placement::{
    add_words, adjusted_surface, check_word_list, place_words, place_words_again,
    place_words_with_retries, Placement, Stuck, WordListError, WordProblem,
};
