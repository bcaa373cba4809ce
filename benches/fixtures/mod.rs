// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared benchmark word lists; every random choice is seeded.

use bonza::layout::{place_words_with_retries, WordPositionLayout};
use bonza::rng::SeededRandom;

const WORDS: [&str; 48] = [
    "pomme", "poire", "cerise", "banane", "orange", "citron", "ananas", "melon", "mandarine",
    "mangue", "prune", "abricot", "fraise", "framboise", "cassis", "figue", "datte", "grenade",
    "papaye", "raisin", "goyave", "myrtille", "groseille", "noisette", "cheval", "chien", "chat",
    "lapin", "renard", "loutre", "tortue", "baleine", "dauphin", "pingouin", "girafe", "panda",
    "marmotte", "belette", "hibou", "corbeau", "mouette", "sardine", "saumon", "crevette",
    "homard", "araignee", "escargot", "papillon",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn word_count(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 24,
            Self::Large => 48,
        }
    }
}

pub fn words(case: Case) -> Vec<&'static str> {
    WORDS[..case.word_count()].to_vec()
}

/// First successfully placed layout for `case`, trying seeds in order.
pub fn layout(case: Case) -> WordPositionLayout {
    let words = words(case);
    (0..100)
        .find_map(|seed| {
            let mut rng = SeededRandom::from_seed(seed);
            place_words_with_retries(&words, &mut rng, 50).ok()?.placed()
        })
        .expect("a seed places the fixture words")
}
