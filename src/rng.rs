// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Random source abstraction shared by placement and chunking.
//!
//! Every random decision of the engine goes through a [`RandomSource`] owned by the caller, so a
//! placement or segmentation session is a pure function of `(seed, input)`:
//!
//! - [`SeededRandom`]: wraps `rand::rngs::StdRng`, the default for normal use;
//! - [`FirstChoice`]: deterministic stub that always picks the first option (index `0`, value
//!   `0.0`, `false`), which keeps word order, orientation and candidate order untouched.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for one placement or segmentation session.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, upper)`. `upper` is at least 1.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Returns a value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    fn next_bool(&mut self) -> bool {
        self.next_f64() >= 0.5
    }

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Shuffles `items` in place (forward Fisher-Yates).
///
/// An index of `0` from the source leaves the current element where it is, so [`FirstChoice`]
/// keeps the original order.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let j = i + rng.next_index(len - i);
        items.swap(i, j);
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy; use [`SeededRandom::from_seed`] for reproducible output.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn next_index(&mut self, _upper: usize) -> usize {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}
