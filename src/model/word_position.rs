// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use super::geometry::{BoundingRectangle, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_is_vertical(is_vertical: bool) -> Self {
        if is_vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    pub fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Unit step `(d_row, d_column)` along the word axis.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }

    /// Unit step across the word axis.
    pub fn cross_step(self) -> (i32, i32) {
        self.perpendicular().step()
    }
}

/// A placed word: canonical text, start cell and orientation.
///
/// `word` is the canonical form (uppercase, spaces replaced by `·`) that occupies one cell per
/// char; `original` is the text the word was supplied with, kept so a layout can be re-placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPosition {
    word: SmolStr,
    original: SmolStr,
    start: Position,
    orientation: Orientation,
    len: usize,
}

impl WordPosition {
    pub fn new(
        word: impl Into<SmolStr>,
        original: impl Into<SmolStr>,
        start: Position,
        orientation: Orientation,
    ) -> Self {
        let word = word.into();
        let len = word.chars().count();
        Self {
            word,
            original: original.into(),
            start,
            orientation,
            len,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    /// Length in cells (chars), not bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell at `offset` along the word axis; `offset` may lie outside the word.
    pub fn position_at(&self, offset: i32) -> Position {
        let (d_row, d_column) = self.orientation.step();
        self.start.offset(d_row * offset, d_column * offset)
    }

    /// Last occupied cell.
    pub fn end(&self) -> Position {
        self.position_at(self.len as i32 - 1)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len as i32).map(move |offset| self.position_at(offset))
    }

    /// `(cell, letter)` pairs in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(offset, letter)| (self.position_at(offset as i32), letter))
    }

    pub fn letter_at(&self, offset: usize) -> Option<char> {
        self.word.chars().nth(offset)
    }

    pub fn bounds(&self) -> BoundingRectangle {
        BoundingRectangle::from_position(self.start).extend_with(self.end())
    }

    pub fn covers(&self, position: Position) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                position.row() == self.start.row()
                    && position.column() >= self.start.column()
                    && position.column() <= self.end().column()
            }
            Orientation::Vertical => {
                position.column() == self.start.column()
                    && position.row() >= self.start.row()
                    && position.row() <= self.end().row()
            }
        }
    }
}

impl fmt::Display for WordPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = if self.is_vertical() { 'V' } else { 'H' };
        write!(f, "'{}' {axis}{}", self.word, self.start)
    }
}
