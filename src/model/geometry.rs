// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// A cell address on the unbounded letter grid.
///
/// Rows grow downwards, columns grow to the right. Coordinates may be negative: the first word
/// is placed at `(0, 0)` and the layout grows in every direction from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn offset(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Key used by the sparse square map: row in the high half, column in the low half.
    pub fn packed(self) -> u64 {
        ((self.row as u32 as u64) << 32) | (self.column as u32 as u64)
    }

    pub fn from_packed(key: u64) -> Self {
        Self {
            row: (key >> 32) as u32 as i32,
            column: key as u32 as i32,
        }
    }

    /// The 4 orthogonal neighbors, in the order row+1, row-1, column+1, column-1.
    pub fn neighbors(self) -> [Position; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    pub fn is_neighbor_of(self, other: Position) -> bool {
        (self.row == other.row && (self.column - other.column).abs() == 1)
            || (self.column == other.column && (self.row - other.row).abs() == 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Inclusive, axis-aligned bounds of a set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingRectangle {
    min_row: i32,
    max_row: i32,
    min_column: i32,
    max_column: i32,
}

impl BoundingRectangle {
    pub fn new(min_row: i32, max_row: i32, min_column: i32, max_column: i32) -> Self {
        Self {
            min_row,
            max_row,
            min_column,
            max_column,
        }
    }

    pub fn from_position(position: Position) -> Self {
        Self::new(
            position.row(),
            position.row(),
            position.column(),
            position.column(),
        )
    }

    /// Bounds of `positions`, or `None` when the iterator is empty.
    pub fn enclosing(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        let mut iter = positions.into_iter();
        let first = Self::from_position(iter.next()?);
        Some(iter.fold(first, Self::extend_with))
    }

    pub fn min_row(&self) -> i32 {
        self.min_row
    }

    pub fn max_row(&self) -> i32 {
        self.max_row
    }

    pub fn min_column(&self) -> i32 {
        self.min_column
    }

    pub fn max_column(&self) -> i32 {
        self.max_column
    }

    pub fn width(&self) -> i32 {
        self.max_column - self.min_column + 1
    }

    pub fn height(&self) -> i32 {
        self.max_row - self.min_row + 1
    }

    pub fn surface(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_row..=self.max_row).contains(&position.row())
            && (self.min_column..=self.max_column).contains(&position.column())
    }

    #[must_use]
    pub fn extend_with(self, position: Position) -> Self {
        Self {
            min_row: self.min_row.min(position.row()),
            max_row: self.max_row.max(position.row()),
            min_column: self.min_column.min(position.column()),
            max_column: self.max_column.max(position.column()),
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_row: self.min_row.min(other.min_row),
            max_row: self.max_row.max(other.max_row),
            min_column: self.min_column.min(other.min_column),
            max_column: self.max_column.max(other.max_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingRectangle, Position};

    #[test]
    fn packed_key_round_trips_negative_coordinates() {
        for (row, column) in [(0, 0), (-1, 5), (7, -3), (i32::MIN, i32::MAX), (-40, -40)] {
            let p = Position::new(row, column);
            assert_eq!(Position::from_packed(p.packed()), p);
        }
        assert_ne!(Position::new(0, 1).packed(), Position::new(1, 0).packed());
    }

    #[test]
    fn neighbors_are_orthogonal_only() {
        let p = Position::new(2, 3);
        let n = p.neighbors();
        assert_eq!(
            n,
            [
                Position::new(3, 3),
                Position::new(1, 3),
                Position::new(2, 4),
                Position::new(2, 2)
            ]
        );
        assert!(n.iter().all(|q| q.is_neighbor_of(p) && p.is_neighbor_of(*q)));
        assert!(!p.is_neighbor_of(Position::new(3, 4)));
        assert!(!p.is_neighbor_of(p));
    }

    #[test]
    fn enclosing_bounds() {
        assert_eq!(BoundingRectangle::enclosing([]), None);
        let r = BoundingRectangle::enclosing([
            Position::new(0, 0),
            Position::new(-2, 4),
            Position::new(1, -1),
        ])
        .expect("bounds");
        assert_eq!(r, BoundingRectangle::new(-2, 1, -1, 4));
        assert_eq!((r.width(), r.height(), r.surface()), (6, 4, 24));
        assert!(r.contains(Position::new(0, 3)));
        assert!(!r.contains(Position::new(2, 0)));
    }
}
