// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use super::placement::MAX_REJECTED_WORD_LEN;
use crate::model::{BoundingRectangle, Orientation, Position, Square, WordPosition};

/// Result of checking a word position against a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceWordStatus {
    Valid,
    /// No conflicting letter, but the word touches another word where it should not.
    TooClose,
    /// Conflicting letter, overlap with a parallel word, or a run of 2+ shared letters.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    DuplicateWord { word: String },
    LetterConflict {
        position: Position,
        existing: char,
        found: char,
    },
    IndexOutOfRange { index: usize, len: usize },
    /// Word too short to place or to keep in a layout.
    WordTooShort { word: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateWord { word } => write!(f, "word {word:?} is already in the layout"),
            Self::LetterConflict {
                position,
                existing,
                found,
            } => write!(
                f,
                "letter conflict at {position}: layout has {existing:?}, word needs {found:?}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "word position index {index} out of range (layout has {len})")
            }
            Self::WordTooShort { word } => write!(
                f,
                "word {word:?} is too short (length <= {MAX_REJECTED_WORD_LEN})"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Placed words plus the sparse letter grid they cover.
///
/// Word order is placement order. Squares are keyed by [`Position::packed`]; every covered cell
/// has exactly one square whose `share_count` is the number of words covering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPositionLayout {
    word_positions: Vec<WordPosition>,
    squares: HashMap<u64, Square>,
}

impl WordPositionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a layout (words and squares) from a word position list, in order.
    ///
    /// Only letter consistency is enforced: a stored layout may come from an editor that accepts
    /// `TooClose` placements.
    pub fn from_word_positions(
        word_positions: impl IntoIterator<Item = WordPosition>,
    ) -> Result<Self, LayoutError> {
        let mut layout = Self::new();
        for wp in word_positions {
            layout.check_new_word(&wp)?;
            layout.check_letters(&wp)?;
            layout.add_word_position_unchecked(wp);
        }
        Ok(layout)
    }

    pub fn word_positions(&self) -> &[WordPosition] {
        &self.word_positions
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.values()
    }

    pub fn squares_count(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_positions.is_empty()
    }

    pub(crate) fn squares_snapshot(&self) -> HashMap<u64, Square> {
        self.squares.clone()
    }

    pub fn contains_word(&self, canonical_word: &str) -> bool {
        self.word_positions
            .iter()
            .any(|wp| wp.word() == canonical_word)
    }

    pub fn square(&self, position: Position) -> Option<&Square> {
        self.squares.get(&position.packed())
    }

    /// Letter at `position`, `None` for an empty cell.
    pub fn letter(&self, position: Position) -> Option<char> {
        self.square(position).map(Square::letter)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.squares.contains_key(&position.packed())
    }

    /// Adds `wp` unless it conflicts with the layout; returns how well it fits.
    ///
    /// `TooClose` positions are still added (an editor may want them), `Invalid` ones are not.
    pub fn add_word_position(&mut self, wp: WordPosition) -> Result<PlaceWordStatus, LayoutError> {
        self.check_new_word(&wp)?;

        let status = self.place_word_status(&wp);
        if status != PlaceWordStatus::Invalid {
            self.add_word_position_unchecked(wp);
        }
        Ok(status)
    }

    fn check_new_word(&self, wp: &WordPosition) -> Result<(), LayoutError> {
        if wp.len() <= MAX_REJECTED_WORD_LEN {
            return Err(LayoutError::WordTooShort {
                word: wp.word().to_owned(),
            });
        }
        if self.contains_word(wp.word()) {
            return Err(LayoutError::DuplicateWord {
                word: wp.word().to_owned(),
            });
        }
        Ok(())
    }

    /// Adds `wp` and its squares without validation. Callers must have checked letters.
    pub fn add_word_position_unchecked(&mut self, wp: WordPosition) {
        for (position, letter) in wp.cells() {
            self.squares
                .entry(position.packed())
                .and_modify(|square| {
                    debug_assert_eq!(square.letter(), letter);
                    square.share();
                })
                .or_insert_with(|| Square::new(position, letter));
        }
        self.word_positions.push(wp);
    }

    /// Removes the word at `index`; squares no other word covers disappear with it.
    pub fn remove_word_position(&mut self, index: usize) -> Result<WordPosition, LayoutError> {
        if index >= self.word_positions.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.word_positions.len(),
            });
        }

        let wp = self.word_positions.remove(index);
        for position in wp.positions() {
            let key = position.packed();
            let vacated = self.squares.get_mut(&key).is_some_and(Square::unshare);
            if vacated {
                self.squares.remove(&key);
            }
        }
        Ok(wp)
    }

    fn check_letters(&self, wp: &WordPosition) -> Result<(), LayoutError> {
        for (position, found) in wp.cells() {
            match self.letter(position) {
                Some(existing) if existing != found => {
                    return Err(LayoutError::LetterConflict {
                        position,
                        existing,
                        found,
                    })
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn can_place_word(&self, wp: &WordPosition) -> bool {
        self.place_word_status(wp) == PlaceWordStatus::Valid
    }

    pub fn place_word_status(&self, wp: &WordPosition) -> PlaceWordStatus {
        let mut status = PlaceWordStatus::Valid;

        // Free cell before the first letter and after the last one.
        if self.is_occupied(wp.position_at(-1)) || self.is_occupied(wp.position_at(wp.len() as i32))
        {
            status = PlaceWordStatus::TooClose;
        }

        let (d_row, d_column) = wp.orientation().cross_step();
        let mut previous_matched = false;
        for (position, letter) in wp.cells() {
            match self.letter(position) {
                Some(existing) if existing == letter => {
                    if previous_matched {
                        return PlaceWordStatus::Invalid;
                    }
                    if self
                        .word_positions_at(position)
                        .any(|other| other.orientation() == wp.orientation())
                    {
                        return PlaceWordStatus::Invalid;
                    }
                    previous_matched = true;
                }
                Some(_) => return PlaceWordStatus::Invalid,
                None => {
                    previous_matched = false;
                    if self.is_occupied(position.offset(d_row, d_column))
                        || self.is_occupied(position.offset(-d_row, -d_column))
                    {
                        status = PlaceWordStatus::TooClose;
                    }
                }
            }
        }

        status
    }

    /// Words whose span covers `position`.
    pub fn word_positions_at(&self, position: Position) -> impl Iterator<Item = &WordPosition> + '_ {
        self.word_positions
            .iter()
            .filter(move |wp| wp.covers(position))
    }

    /// Smallest rectangle covering every placed letter, `None` for an empty layout.
    pub fn bounds(&self) -> Option<BoundingRectangle> {
        let (first, rest) = self.word_positions.split_first()?;
        Some(rest.iter().fold(first.bounds(), Self::extend_bounds))
    }

    pub fn extend_bounds(bounds: BoundingRectangle, wp: &WordPosition) -> BoundingRectangle {
        bounds.union(wp.bounds())
    }

    /// Bounds the layout would have after adding `wp`.
    pub fn bounds_with(&self, wp: &WordPosition) -> BoundingRectangle {
        match self.bounds() {
            Some(bounds) => Self::extend_bounds(bounds, wp),
            None => wp.bounds(),
        }
    }

    /// Indices of the words reachable from the word at `index` through intersections, excluding
    /// `index` itself, in discovery order. Empty when `index` is out of range.
    pub fn connected_word_positions(&self, index: usize) -> Vec<usize> {
        let count = self.word_positions.len();
        if index >= count {
            return Vec::new();
        }

        let mut visited = vec![false; count];
        visited[index] = true;
        let mut connected = Vec::new();
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            let current_wp = &self.word_positions[current];
            for (other, other_wp) in self.word_positions.iter().enumerate() {
                if !visited[other] && words_intersect(current_wp, other_wp) {
                    visited[other] = true;
                    connected.push(other);
                    stack.push(other);
                }
            }
        }
        connected
    }

    /// Number of separate groups of intersecting words; 1 for a well-formed puzzle.
    pub fn connected_block_count(&self) -> usize {
        let mut assigned = vec![false; self.word_positions.len()];
        let mut blocks = 0;
        for index in 0..self.word_positions.len() {
            if assigned[index] {
                continue;
            }
            blocks += 1;
            assigned[index] = true;
            for other in self.connected_word_positions(index) {
                assigned[other] = true;
            }
        }
        blocks
    }

    pub fn is_connected(&self) -> bool {
        self.connected_block_count() <= 1
    }
}

/// True if the spans of `a` and `b` share at least one cell.
///
/// Parallel words on the same line count when they overlap; perpendicular words when they cross.
pub fn words_intersect(a: &WordPosition, b: &WordPosition) -> bool {
    let (a_start, a_end) = (a.start(), a.end());
    let (b_start, b_end) = (b.start(), b.end());
    match (a.orientation(), b.orientation()) {
        (Orientation::Horizontal, Orientation::Horizontal) => {
            a_start.row() == b_start.row()
                && a_start.column() <= b_end.column()
                && b_start.column() <= a_end.column()
        }
        (Orientation::Vertical, Orientation::Vertical) => {
            a_start.column() == b_start.column()
                && a_start.row() <= b_end.row()
                && b_start.row() <= a_end.row()
        }
        (Orientation::Horizontal, Orientation::Vertical) => {
            (a_start.column()..=a_end.column()).contains(&b_start.column())
                && (b_start.row()..=b_end.row()).contains(&a_start.row())
        }
        (Orientation::Vertical, Orientation::Horizontal) => words_intersect(b, a),
    }
}
