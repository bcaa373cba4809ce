// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::Position;
use super::word_position::{Orientation, WordPosition};
use crate::layout::WordPositionLayout;

pub(crate) fn h(word: &str, row: i32, column: i32) -> WordPosition {
    WordPosition::new(word, word, Position::new(row, column), Orientation::Horizontal)
}

pub(crate) fn v(word: &str, row: i32, column: i32) -> WordPosition {
    WordPosition::new(word, word, Position::new(row, column), Orientation::Vertical)
}

/// ```text
/// C A T
/// A   O
/// R U N
/// ```
pub(crate) fn ring_layout() -> WordPositionLayout {
    WordPositionLayout::from_word_positions([
        h("CAT", 0, 0),
        v("CAR", 0, 0),
        v("TON", 0, 2),
        h("RUN", 2, 0),
    ])
    .expect("ring layout")
}

/// A straight line of 12 letters.
pub(crate) fn single_word_layout() -> WordPositionLayout {
    WordPositionLayout::from_word_positions([h("ABCDEFGHIJKL", 0, 0)]).expect("single word layout")
}

pub(crate) fn fruits() -> Vec<&'static str> {
    vec![
        "pomme", "poire", "cerise", "banane", "kiwi", "orange", "citron", "ananas", "mandarine",
        "mangue", "prune", "abricot", "melon", "fraise", "framboise", "cassis", "figue", "datte",
        "grenade", "papaye", "raisin", "goyave",
    ]
}
