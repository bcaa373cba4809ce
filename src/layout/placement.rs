// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Greedy word placement.
//!
//! Words are attached one at a time to already placed words at a shared letter, perpendicular to
//! the word they cross. Among the valid spots for a word, the one keeping the layout closest to a
//! square is taken. There is no backtracking: when no pending word fits anywhere the attempt is
//! [`Placement::Stuck`] and callers retry with another shuffle.

use std::collections::HashSet;
use std::fmt;

use smallvec::SmallVec;

use super::grid::WordPositionLayout;
use crate::format::words::canonicalize;
use crate::model::{BoundingRectangle, Orientation, Position, WordPosition};
use crate::rng::{shuffle, RandomSource};

/// Words of this many chars or fewer are rejected.
pub const MAX_REJECTED_WORD_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordProblem {
    TooShort(String),
    /// Same canonical form as an earlier word of the list, or as a word already placed.
    Duplicate(String),
}

impl fmt::Display for WordProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(word) => write!(
                f,
                "word {word:?} is too short (length <= {MAX_REJECTED_WORD_LEN})"
            ),
            Self::Duplicate(word) => write!(f, "word {word:?} is a duplicate"),
        }
    }
}

/// Input rejected before any placement work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    Rejected(Vec<WordProblem>),
}

impl WordListError {
    pub fn problems(&self) -> &[WordProblem] {
        match self {
            Self::Empty => &[],
            Self::Rejected(problems) => problems,
        }
    }
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("word list is empty"),
            Self::Rejected(problems) => {
                f.write_str("word list rejected: ")?;
                for (idx, problem) in problems.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{problem}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for WordListError {}

/// Outcome of a placement attempt. `Stuck` is an expected result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<T> {
    Placed(T),
    Stuck(Stuck),
}

impl<T> Placement<T> {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub fn placed(self) -> Option<T> {
        match self {
            Self::Placed(value) => Some(value),
            Self::Stuck(_) => None,
        }
    }

    pub fn stuck(&self) -> Option<&Stuck> {
        match self {
            Self::Placed(_) => None,
            Self::Stuck(stuck) => Some(stuck),
        }
    }
}

/// What was left when no pending word could be attached anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stuck {
    /// Words placed by the failed attempt before it got stuck.
    pub placed: usize,
    /// Original text of the words still pending, in shuffled order.
    pub pending: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingWord {
    canonical: String,
    original: String,
}

impl PendingWord {
    fn at(&self, start: Position, orientation: Orientation) -> WordPosition {
        WordPosition::new(
            self.canonical.as_str(),
            self.original.as_str(),
            start,
            orientation,
        )
    }
}

/// Validates `words` for addition to `layout` and canonicalizes them.
///
/// Reports every too-short word and every duplicate (against earlier words of the list and
/// against words already in `layout`), in input order.
pub fn check_word_list<S: AsRef<str>>(
    layout: &WordPositionLayout,
    words: &[S],
) -> Result<Vec<String>, WordListError> {
    check_words(layout, words).map(|pending| pending.into_iter().map(|w| w.canonical).collect())
}

fn check_words<S: AsRef<str>>(
    layout: &WordPositionLayout,
    words: &[S],
) -> Result<Vec<PendingWord>, WordListError> {
    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    let mut seen = layout
        .word_positions()
        .iter()
        .map(|wp| wp.word().to_owned())
        .collect::<HashSet<_>>();
    let mut problems = Vec::new();
    let mut pending = Vec::with_capacity(words.len());

    for word in words {
        let original = word.as_ref();
        let canonical = canonicalize(original);
        if canonical.chars().count() <= MAX_REJECTED_WORD_LEN {
            problems.push(WordProblem::TooShort(original.to_owned()));
            continue;
        }
        if !seen.insert(canonical.clone()) {
            problems.push(WordProblem::Duplicate(original.to_owned()));
            continue;
        }
        pending.push(PendingWord {
            canonical,
            original: original.to_owned(),
        });
    }

    if problems.is_empty() {
        Ok(pending)
    } else {
        Err(WordListError::Rejected(problems))
    }
}

/// Places `words` on a fresh layout.
pub fn place_words<S: AsRef<str>>(
    words: &[S],
    rng: &mut dyn RandomSource,
) -> Result<Placement<WordPositionLayout>, WordListError> {
    let pending = check_words(&WordPositionLayout::new(), words)?;
    Ok(place_pending(pending, rng))
}

/// Runs [`place_words`] until an attempt succeeds or `max_attempts` attempts got stuck.
///
/// The word list is validated once; the last `Stuck` is returned when every attempt fails.
pub fn place_words_with_retries<S: AsRef<str>>(
    words: &[S],
    rng: &mut dyn RandomSource,
    max_attempts: usize,
) -> Result<Placement<WordPositionLayout>, WordListError> {
    let pending = check_words(&WordPositionLayout::new(), words)?;
    let max_attempts = max_attempts.max(1);

    let mut attempt = 1;
    loop {
        match place_pending(pending.clone(), rng) {
            Placement::Placed(layout) => {
                log::info!(
                    target: "bonza",
                    "placed {} words in attempt {attempt}/{max_attempts}",
                    layout.word_positions().len()
                );
                return Ok(Placement::Placed(layout));
            }
            Placement::Stuck(stuck) if attempt >= max_attempts => {
                log::warn!(
                    target: "bonza",
                    "placement failed after {max_attempts} attempts, {} words pending",
                    stuck.pending.len()
                );
                return Ok(Placement::Stuck(stuck));
            }
            Placement::Stuck(stuck) => {
                log::debug!(
                    target: "bonza",
                    "attempt {attempt} stuck after {} words, {} pending",
                    stuck.placed,
                    stuck.pending.len()
                );
                attempt += 1;
            }
        }
    }
}

fn place_pending(pending: Vec<PendingWord>, rng: &mut dyn RandomSource) -> Placement<WordPositionLayout> {
    let mut layout = WordPositionLayout::new();
    match extend_layout(&mut layout, pending, rng) {
        Placement::Placed(_) => Placement::Placed(layout),
        Placement::Stuck(stuck) => Placement::Stuck(stuck),
    }
}

/// Adds `words` to an existing layout.
///
/// The work happens on a copy: `layout` is only replaced when every word was placed. Returns the
/// new word positions in placement order.
pub fn add_words<S: AsRef<str>>(
    layout: &mut WordPositionLayout,
    words: &[S],
    rng: &mut dyn RandomSource,
) -> Result<Placement<Vec<WordPosition>>, WordListError> {
    let pending = check_words(layout, words)?;
    let mut working = layout.clone();
    let outcome = extend_layout(&mut working, pending, rng);
    if outcome.is_placed() {
        *layout = working;
    }
    Ok(outcome)
}

/// Re-places the words of `layout` from scratch with a new shuffle.
///
/// `layout` is kept as it was when the new attempt gets stuck.
pub fn place_words_again(
    layout: &mut WordPositionLayout,
    rng: &mut dyn RandomSource,
) -> Result<Placement<Vec<WordPosition>>, WordListError> {
    let originals = layout
        .word_positions()
        .iter()
        .map(|wp| wp.original().to_owned())
        .collect::<Vec<_>>();
    let mut fresh = WordPositionLayout::new();
    let outcome = add_words(&mut fresh, &originals, rng)?;
    if outcome.is_placed() {
        *layout = fresh;
    }
    Ok(outcome)
}

fn extend_layout(
    layout: &mut WordPositionLayout,
    mut pending: Vec<PendingWord>,
    rng: &mut dyn RandomSource,
) -> Placement<Vec<WordPosition>> {
    shuffle(&mut pending, rng);
    let mut placed = Vec::with_capacity(pending.len());

    if layout.is_empty() && !pending.is_empty() {
        let first = pending.remove(0);
        let orientation = Orientation::from_is_vertical(rng.next_bool());
        let wp = first.at(Position::new(0, 0), orientation);
        log::debug!(target: "bonza", "seeding layout with {wp}");
        layout.add_word_position_unchecked(wp.clone());
        placed.push(wp);
    }

    while !pending.is_empty() {
        let found = pending.iter().enumerate().find_map(|(index, word)| {
            let mut candidates = find_candidates(layout, word);
            shuffle(&mut candidates, rng);
            select_candidate(layout, candidates).map(|best| (index, best))
        });
        let Some((index, best)) = found else {
            return Placement::Stuck(Stuck {
                placed: placed.len(),
                pending: pending.into_iter().map(|w| w.original).collect(),
            });
        };

        pending.remove(index);
        log::trace!(target: "bonza", "placing {best}");
        layout.add_word_position_unchecked(best.clone());
        placed.push(best);
    }

    Placement::Placed(placed)
}

/// Every valid way to attach `word` to any placed word through a shared letter.
fn find_candidates(layout: &WordPositionLayout, word: &PendingWord) -> Vec<WordPosition> {
    let letters = word.canonical.chars().collect::<Vec<_>>();
    let mut candidates = Vec::new();

    for placed in layout.word_positions() {
        let placed_letters = placed.word().chars().collect::<Vec<_>>();
        let orientation = placed.orientation().perpendicular();

        let mut tried = SmallVec::<[char; 16]>::new();
        for &letter in &letters {
            if tried.contains(&letter) {
                continue;
            }
            tried.push(letter);
            if !placed_letters.contains(&letter) {
                continue;
            }

            for in_word in occurrences(&letters, letter) {
                for in_placed in occurrences(&placed_letters, letter) {
                    let start = crossing_start(placed, in_placed as i32, in_word as i32);
                    let candidate = word.at(start, orientation);
                    if layout.can_place_word(&candidate) {
                        candidates.push(candidate);
                    }
                }
            }
        }
    }

    candidates
}

fn occurrences(letters: &[char], letter: char) -> SmallVec<[usize; 4]> {
    letters
        .iter()
        .enumerate()
        .filter(|(_, &l)| l == letter)
        .map(|(index, _)| index)
        .collect()
}

/// Start of a word crossing `placed` so that its letter `in_word` lands on letter `in_placed`.
fn crossing_start(placed: &WordPosition, in_placed: i32, in_word: i32) -> Position {
    let start = placed.start();
    if placed.is_vertical() {
        Position::new(start.row() + in_placed, start.column() - in_word)
    } else {
        Position::new(start.row() - in_word, start.column() + in_placed)
    }
}

/// First candidate with the smallest adjusted surface.
fn select_candidate(
    layout: &WordPositionLayout,
    candidates: Vec<WordPosition>,
) -> Option<WordPosition> {
    let bounds = layout.bounds();
    let mut best: Option<(i64, WordPosition)> = None;
    for candidate in candidates {
        let with_candidate = match bounds {
            Some(bounds) => WordPositionLayout::extend_bounds(bounds, &candidate),
            None => candidate.bounds(),
        };
        let cost = adjusted_surface(&with_candidate);
        if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
            best = Some((cost, candidate));
        }
    }
    best.map(|(_, wp)| wp)
}

/// `width * height * (width - height)^2`: surface, penalized by how far from square it is.
pub fn adjusted_surface(bounds: &BoundingRectangle) -> i64 {
    let width = i64::from(bounds.width());
    let height = i64::from(bounds.height());
    width * height * (width - height) * (width - height)
}
