// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::geometry::Position;

/// One letter cell of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    position: Position,
    letter: char,
    in_chunk: bool,
    share_count: u32,
}

impl Square {
    pub fn new(position: Position, letter: char) -> Self {
        Self {
            position,
            letter,
            in_chunk: false,
            share_count: 1,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> i32 {
        self.position.row()
    }

    pub fn column(&self) -> i32 {
        self.position.column()
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Only meaningful during chunk segmentation.
    pub fn in_chunk(&self) -> bool {
        self.in_chunk
    }

    pub fn set_in_chunk(&mut self, in_chunk: bool) {
        self.in_chunk = in_chunk;
    }

    /// Number of word positions covering this cell (2 at a crossing).
    pub fn share_count(&self) -> u32 {
        self.share_count
    }

    pub(crate) fn share(&mut self) {
        self.share_count += 1;
    }

    /// Returns true when no word covers the square anymore.
    pub(crate) fn unshare(&mut self) -> bool {
        self.share_count = self.share_count.saturating_sub(1);
        self.share_count == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.position)
    }
}
