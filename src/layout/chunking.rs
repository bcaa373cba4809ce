// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Segmentation of a finished layout into puzzle chunks.
//!
//! Chunks are grown from a seed square through orthogonal neighbors until a random size test
//! centered on the target average stops them. Chunks of one or two squares are then merged with
//! their smallest neighbor while the same test accepts the combined size.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use super::grid::WordPositionLayout;
use crate::model::{Chunk, ChunkId, Position, Square};
use crate::rng::RandomSource;

pub const DEFAULT_AVERAGE_COUNT: usize = 4;

/// Chunks of at most this many squares are merged with a neighbor after growth.
const SMALL_CHUNK_MAX_SQUARES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkLayoutError {
    EmptyLayout,
    InvalidAverageCount,
    DuplicateChunkId(ChunkId),
    /// A square listed in two chunks.
    SharedSquare(Position),
}

impl fmt::Display for ChunkLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => f.write_str("cannot segment an empty layout"),
            Self::InvalidAverageCount => f.write_str("average chunk size must be at least 1"),
            Self::DuplicateChunkId(chunk_id) => write!(f, "chunk id {chunk_id} is used twice"),
            Self::SharedSquare(position) => write!(f, "square {position} belongs to two chunks"),
        }
    }
}

impl std::error::Error for ChunkLayoutError {}

/// The chunks a layout was cut into.
///
/// Merged-away chunks stay stored, flagged deleted, so chunk ids keep matching creation order;
/// every query below only sees live chunks.
#[derive(Debug, Clone, Default)]
pub struct ChunkLayout {
    chunks: Vec<Chunk>,
}

impl ChunkLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_chunks(chunks: impl IntoIterator<Item = Chunk>) -> Self {
        Self {
            chunks: chunks.into_iter().collect(),
        }
    }

    /// Like [`ChunkLayout::from_chunks`], but rejects repeated chunk ids and squares claimed by
    /// more than one chunk.
    pub fn try_from_chunks(
        chunks: impl IntoIterator<Item = Chunk>,
    ) -> Result<Self, ChunkLayoutError> {
        let chunks = chunks.into_iter().collect::<Vec<_>>();
        let mut ids = HashSet::new();
        let mut positions = HashSet::new();
        for chunk in &chunks {
            if !ids.insert(chunk.chunk_id()) {
                return Err(ChunkLayoutError::DuplicateChunkId(chunk.chunk_id()));
            }
            for square in chunk.squares() {
                if !positions.insert(square.position()) {
                    return Err(ChunkLayoutError::SharedSquare(square.position()));
                }
            }
        }
        Ok(Self { chunks })
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> + '_ {
        self.chunks.iter().filter(|chunk| !chunk.is_deleted())
    }

    pub fn chunk(&self, chunk_id: ChunkId) -> Option<&Chunk> {
        self.chunks().find(|chunk| chunk.chunk_id() == chunk_id)
    }

    pub fn chunks_count(&self) -> usize {
        self.chunks().count()
    }

    pub fn squares_count(&self) -> usize {
        self.chunks().map(Chunk::squares_count).sum()
    }

    /// Ids of the live chunks touching `chunk_id` through an orthogonal neighbor, in chunk order.
    pub fn adjacent_chunks(&self, chunk_id: ChunkId) -> Vec<ChunkId> {
        let Some(it) = self.chunk(chunk_id) else {
            return Vec::new();
        };
        self.chunks()
            .filter(|chunk| chunk.chunk_id() != chunk_id && chunk.touches(it))
            .map(Chunk::chunk_id)
            .collect()
    }

    pub fn add_chunk(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Flags the chunk deleted. Returns false when no live chunk has that id.
    pub fn remove_chunk(&mut self, chunk_id: ChunkId) -> bool {
        match self.live_index(chunk_id) {
            Some(index) => {
                self.chunks[index].mark_deleted();
                true
            }
            None => false,
        }
    }

    /// Moves the squares of `from` to the end of `into` and deletes `from`.
    pub fn merge_chunks(&mut self, into: ChunkId, from: ChunkId) -> bool {
        if into == from {
            return false;
        }
        let (Some(into_index), Some(from_index)) = (self.live_index(into), self.live_index(from))
        else {
            return false;
        };
        let squares = self.chunks[from_index].take_squares();
        self.chunks[from_index].mark_deleted();
        self.chunks[into_index].add_squares(squares);
        true
    }

    fn live_index(&self, chunk_id: ChunkId) -> Option<usize> {
        self.chunks
            .iter()
            .position(|chunk| !chunk.is_deleted() && chunk.chunk_id() == chunk_id)
    }

    fn next_chunk_id(&self) -> ChunkId {
        ChunkId::new(u32::try_from(self.chunks.len()).unwrap_or(u32::MAX))
    }
}

impl PartialEq for ChunkLayout {
    fn eq(&self, other: &Self) -> bool {
        self.chunks().eq(other.chunks())
    }
}

impl Eq for ChunkLayout {}

/// Random size test used both when growing and when merging chunks.
///
/// Keyed on `accumulated - average`; the acceptance probability at `+2` is intentionally higher
/// than at `+1`.
pub fn ok_accumulation(
    accumulated: usize,
    average_count: usize,
    rng: &mut dyn RandomSource,
) -> bool {
    let delta = accumulated as i64 - average_count as i64;
    match delta {
        i64::MIN..=-4 => true,
        -3 => rng.chance(0.95),
        -2 => rng.chance(0.9),
        -1 => rng.chance(0.8),
        0 => rng.chance(0.5),
        1 => rng.chance(0.2),
        2 => rng.chance(0.9),
        3 => rng.chance(0.05),
        _ => false,
    }
}

/// Cuts `layout` into chunks of about `average_count` squares.
///
/// The layout is not modified; segmentation works on its own copy of the squares.
pub fn build_chunk_layout(
    layout: &WordPositionLayout,
    average_count: usize,
    rng: &mut dyn RandomSource,
) -> Result<ChunkLayout, ChunkLayoutError> {
    if average_count == 0 {
        return Err(ChunkLayoutError::InvalidAverageCount);
    }
    let bounds = layout.bounds().ok_or(ChunkLayoutError::EmptyLayout)?;
    let start = (bounds.min_column()..=bounds.max_column())
        .map(|column| Position::new(bounds.min_row(), column))
        .find(|&position| layout.is_occupied(position))
        .ok_or(ChunkLayoutError::EmptyLayout)?;

    let mut segmenter = Segmenter {
        squares: layout.squares_snapshot(),
        average_count,
        rng,
        chunks: ChunkLayout::new(),
    };
    segmenter.grow_all(start);
    let initial = segmenter.chunks.chunks_count();

    let Segmenter { mut chunks, rng, .. } = segmenter;
    merge_small_chunks(&mut chunks, average_count, rng);

    log::debug!(
        target: "bonza",
        "segmented {} squares into {} chunks ({initial} before merging)",
        chunks.squares_count(),
        chunks.chunks_count()
    );
    Ok(chunks)
}

struct Segmenter<'a> {
    squares: HashMap<u64, Square>,
    average_count: usize,
    rng: &'a mut dyn RandomSource,
    chunks: ChunkLayout,
}

impl Segmenter<'_> {
    fn is_unassigned(&self, position: Position) -> bool {
        self.squares
            .get(&position.packed())
            .is_some_and(|square| !square.in_chunk())
    }

    fn assign(&mut self, position: Position) -> Option<Square> {
        let square = self.squares.get_mut(&position.packed())?;
        square.set_in_chunk(true);
        Some(*square)
    }

    fn grow_all(&mut self, start: Position) {
        let mut order = self
            .squares
            .values()
            .map(Square::position)
            .collect::<Vec<_>>();
        order.sort_unstable();
        let mut cursor = 0;

        let mut stack = vec![start];
        loop {
            while let Some(seed) = stack.pop() {
                if self.is_unassigned(seed) {
                    self.grow_chunk(seed, &mut stack);
                }
            }

            while cursor < order.len() && !self.is_unassigned(order[cursor]) {
                cursor += 1;
            }
            let Some(&seed) = order.get(cursor) else {
                break;
            };
            log::debug!(target: "bonza", "reseeding segmentation at {seed}");
            stack.push(seed);
        }
    }

    fn grow_chunk(&mut self, seed: Position, stack: &mut Vec<Position>) {
        let mut chunk = Chunk::new(self.chunks.next_chunk_id());
        let Some(square) = self.assign(seed) else {
            return;
        };
        chunk.add_square(square);

        let mut queue = VecDeque::new();
        let mut last = seed;
        loop {
            queue.extend(
                last.neighbors()
                    .into_iter()
                    .filter(|&position| self.is_unassigned(position)),
            );
            while queue
                .front()
                .is_some_and(|&position| !self.is_unassigned(position))
            {
                queue.pop_front();
            }
            let Some(&next) = queue.front() else {
                break;
            };
            if !ok_accumulation(chunk.squares_count() + 1, self.average_count, self.rng) {
                break;
            }
            queue.pop_front();
            if let Some(square) = self.assign(next) {
                chunk.add_square(square);
            }
            last = next;
        }

        stack.extend(
            queue
                .into_iter()
                .filter(|&position| self.is_unassigned(position)),
        );
        log::trace!(target: "bonza", "grew chunk {chunk}");
        self.chunks.add_chunk(chunk);
    }
}

/// Merges every chunk of at most two squares with its smallest neighbors while
/// [`ok_accumulation`] accepts the combined size.
fn merge_small_chunks(chunks: &mut ChunkLayout, average_count: usize, rng: &mut dyn RandomSource) {
    let small = chunks
        .chunks()
        .filter(|chunk| chunk.squares_count() <= SMALL_CHUNK_MAX_SQUARES)
        .map(Chunk::chunk_id)
        .collect::<Vec<_>>();

    for chunk_id in small {
        loop {
            let Some(size) = chunks.chunk(chunk_id).map(Chunk::squares_count) else {
                break;
            };
            let smallest = chunks
                .adjacent_chunks(chunk_id)
                .into_iter()
                .filter_map(|id| chunks.chunk(id).map(|chunk| (id, chunk.squares_count())))
                .min_by_key(|&(_, count)| count);
            let Some((adjacent_id, adjacent_size)) = smallest else {
                break;
            };
            if !ok_accumulation(size + adjacent_size, average_count, rng) {
                break;
            }
            log::trace!(target: "bonza", "merging chunk {adjacent_id} into {chunk_id}");
            chunks.merge_chunks(chunk_id, adjacent_id);
        }
    }
}
