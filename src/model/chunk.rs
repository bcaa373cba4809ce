// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::geometry::BoundingRectangle;
use super::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(u32);

impl ChunkId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group of connected squares that becomes one puzzle piece.
///
/// Squares keep discovery order. Equality compares the id and the `(position, letter)` sequence
/// only, so a chunk read back from disk equals the one that was saved.
#[derive(Debug, Clone)]
pub struct Chunk {
    chunk_id: ChunkId,
    squares: Vec<Square>,
    is_deleted: bool,
}

impl Chunk {
    pub fn new(chunk_id: ChunkId) -> Self {
        Self {
            chunk_id,
            squares: Vec::new(),
            is_deleted: false,
        }
    }

    pub fn chunk_id(&self) -> ChunkId {
        self.chunk_id
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn squares_count(&self) -> usize {
        self.squares.len()
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    pub fn add_square(&mut self, square: Square) {
        self.squares.push(square);
    }

    pub fn add_squares(&mut self, squares: impl IntoIterator<Item = Square>) {
        self.squares.extend(squares);
    }

    pub(crate) fn take_squares(&mut self) -> Vec<Square> {
        std::mem::take(&mut self.squares)
    }

    pub fn bounds(&self) -> Option<BoundingRectangle> {
        BoundingRectangle::enclosing(self.squares.iter().map(Square::position))
    }

    /// True if any square of `self` is a 4-neighbor of any square of `other`.
    pub fn touches(&self, other: &Chunk) -> bool {
        self.squares.iter().any(|a| {
            other
                .squares
                .iter()
                .any(|b| a.position().is_neighbor_of(b.position()))
        })
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.chunk_id == other.chunk_id
            && self.squares.len() == other.squares.len()
            && self
                .squares
                .iter()
                .zip(&other.squares)
                .all(|(a, b)| a.position() == b.position() && a.letter() == b.letter())
    }
}

impl Eq for Chunk {}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.chunk_id, self.squares.len())?;
        if let Some(r) = self.bounds() {
            write!(f, ": {}x{}:", r.height(), r.width())?;
        }
        for square in &self.squares {
            write!(f, " {square}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Chunk, ChunkId};
    use crate::model::{BoundingRectangle, Position, Square};

    fn chunk(id: u32, cells: &[(i32, i32, char)]) -> Chunk {
        let mut chunk = Chunk::new(ChunkId::new(id));
        chunk.add_squares(
            cells
                .iter()
                .map(|&(row, column, letter)| Square::new(Position::new(row, column), letter)),
        );
        chunk
    }

    #[test]
    fn bounds_and_summary() {
        let c = chunk(3, &[(0, 0, 'C'), (0, 1, 'A'), (1, 1, 'R')]);
        assert_eq!(c.bounds(), Some(BoundingRectangle::new(0, 1, 0, 1)));
        assert_eq!(c.to_string(), "3[3]: 2x2: C(0, 0) A(0, 1) R(1, 1)");
        assert_eq!(Chunk::new(ChunkId::new(0)).bounds(), None);
    }

    #[test]
    fn touches_is_symmetric_and_ignores_diagonals() {
        let a = chunk(0, &[(0, 0, 'A')]);
        let b = chunk(1, &[(0, 1, 'B')]);
        let c = chunk(2, &[(1, 1, 'C')]);
        assert!(a.touches(&b) && b.touches(&a));
        assert!(!a.touches(&c) && !c.touches(&a));
    }

    #[test]
    fn equality_ignores_segmentation_bookkeeping() {
        let a = chunk(0, &[(0, 0, 'A')]);
        let mut b = a.clone();
        b.mark_deleted();
        assert_eq!(a, b);
        assert_ne!(a, chunk(0, &[(0, 0, 'B')]));
        assert_ne!(a, chunk(1, &[(0, 0, 'A')]));
    }
}
