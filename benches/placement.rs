// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use bonza::layout::{place_words, place_words_with_retries};
use bonza::rng::SeededRandom;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `placement.single`, `placement.retries`
// - Case IDs (`small`, `medium`, `large`) must remain stable so results stay comparable.
fn benches_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement.single");
    for case in fixtures::Case::ALL {
        let words = fixtures::words(case);
        group.bench_function(case.id(), move |b| {
            let mut seed = 0_u64;
            b.iter(|| {
                seed += 1;
                let mut rng = SeededRandom::from_seed(seed);
                let outcome = place_words(black_box(&words), &mut rng).expect("valid words");
                black_box(outcome.is_placed())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("placement.retries");
    for case in fixtures::Case::ALL {
        let words = fixtures::words(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut rng = SeededRandom::from_seed(7);
                let outcome =
                    place_words_with_retries(black_box(&words), &mut rng, 50).expect("valid words");
                black_box(outcome.is_placed())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_placement
}
criterion_main!(benches);
