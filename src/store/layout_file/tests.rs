// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{
    chunks_from_json, chunks_json_schema, chunks_to_json, layout_from_json, layout_json_schema,
    layout_to_json, load_chunks, load_layout, save_chunks, save_layout, StoreError,
    WordPositionRecord,
};
use crate::layout::{
    build_chunk_layout, ChunkLayoutError, LayoutError, WordPositionLayout, DEFAULT_AVERAGE_COUNT,
};
use crate::model::fixtures::{h, ring_layout};
use crate::model::{ChunkId, Orientation, Position, WordPosition};
use crate::rng::SeededRandom;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("bonza-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[fixture]
fn tmp() -> TempDir {
    TempDir::new("layout-file")
}

#[test]
fn layout_records_use_camel_case_and_omit_identical_original() {
    let layout = WordPositionLayout::from_word_positions([
        h("CAT", 0, 0),
        WordPosition::new("CAR", "car", Position::new(0, 0), Orientation::Vertical),
    ])
    .unwrap();

    let json = layout_to_json(&layout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "word": "CAT", "startRow": 0, "startColumn": 0, "isVertical": false },
            {
                "word": "CAR",
                "startRow": 0,
                "startColumn": 0,
                "isVertical": true,
                "originalWord": "car"
            }
        ])
    );
}

#[test]
fn layout_round_trip_rebuilds_squares() {
    let layout = ring_layout();
    let restored = layout_from_json(&layout_to_json(&layout).unwrap()).unwrap();
    assert_eq!(restored, layout);
    assert_eq!(restored.squares_count(), 8);
    assert_eq!(
        restored.square(Position::new(2, 2)).unwrap().share_count(),
        2
    );
}

#[test]
fn records_without_original_word_load() {
    let json = r#"[{"word":"NON·SEQUITUR","startRow":-1,"startColumn":3,"isVertical":true}]"#;
    let layout = layout_from_json(json).unwrap();
    let wp = &layout.word_positions()[0];
    assert_eq!(wp.original(), "NON·SEQUITUR");
    assert_eq!(wp.start(), Position::new(-1, 3));
    assert_eq!(wp.len(), 12);
}

#[test]
fn conflicting_letters_are_rejected_on_load() {
    let json = r#"[
        {"word":"CAT","startRow":0,"startColumn":0,"isVertical":false},
        {"word":"DOG","startRow":0,"startColumn":0,"isVertical":true}
    ]"#;
    let err = layout_from_json(json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Layout {
            path: None,
            source: LayoutError::LetterConflict { .. }
        }
    ));
}

#[test]
fn empty_word_record_is_rejected_on_load() {
    let json = r#"[
        {"word":"","startRow":-3,"startColumn":0,"isVertical":true},
        {"word":"CAT","startRow":0,"startColumn":0,"isVertical":false}
    ]"#;
    let err = layout_from_json(json).unwrap_err();
    assert!(matches!(
        &err,
        StoreError::Layout {
            path: None,
            source: LayoutError::WordTooShort { word }
        } if word.is_empty()
    ));
}

#[rstest]
#[case(
    r#"[{"chunkId":0,"squares":[{"row":0,"column":0,"letter":"C"}]},
        {"chunkId":0,"squares":[{"row":0,"column":1,"letter":"A"}]}]"#,
    ChunkLayoutError::DuplicateChunkId(ChunkId::new(0))
)]
#[case(
    r#"[{"chunkId":0,"squares":[{"row":0,"column":0,"letter":"C"}]},
        {"chunkId":1,"squares":[{"row":0,"column":0,"letter":"C"}]}]"#,
    ChunkLayoutError::SharedSquare(Position::new(0, 0))
)]
fn overlapping_chunks_are_rejected_on_load(
    #[case] json: &str,
    #[case] expected: ChunkLayoutError,
) {
    match chunks_from_json(json).unwrap_err() {
        StoreError::Chunks { path: None, source } => assert_eq!(source, expected),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    let err = layout_from_json(r#"[{"word":"CAT"}]"#).unwrap_err();
    assert!(matches!(err, StoreError::Json { path: None, .. }));
    assert!(err.to_string().starts_with("json error"));
}

#[test]
fn chunk_round_trip_keeps_live_chunks() {
    let layout = ring_layout();
    let chunks =
        build_chunk_layout(&layout, DEFAULT_AVERAGE_COUNT, &mut SeededRandom::from_seed(4))
            .unwrap();

    let json = chunks_to_json(&chunks).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];
    assert!(first.get("chunkId").is_some());
    assert!(first["squares"][0].get("letter").is_some());

    let restored = chunks_from_json(&json).unwrap();
    assert_eq!(restored, chunks);
    assert_eq!(restored.squares_count(), layout.squares_count());
}

#[rstest]
fn files_round_trip_through_atomic_writes(tmp: TempDir) {
    let layout = ring_layout();
    let chunks =
        build_chunk_layout(&layout, DEFAULT_AVERAGE_COUNT, &mut SeededRandom::from_seed(8))
            .unwrap();
    let layout_path = tmp.path().join("layout.json");
    let chunks_path = tmp.path().join("chunks.json");

    save_layout(&layout_path, &layout).unwrap();
    save_chunks(&chunks_path, &chunks).unwrap();
    save_layout(&layout_path, &layout).unwrap();

    assert_eq!(load_layout(&layout_path).unwrap(), layout);
    assert_eq!(load_chunks(&chunks_path).unwrap(), chunks);

    let leftovers = std::fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(".bonza.tmp."))
        .count();
    assert_eq!(leftovers, 0);
}

#[rstest]
fn load_errors_carry_the_path(tmp: TempDir) {
    let missing = tmp.path().join("missing.json");
    match load_layout(&missing).unwrap_err() {
        StoreError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }

    let broken = tmp.path().join("broken.json");
    std::fs::write(&broken, "not json").unwrap();
    match load_chunks(&broken).unwrap_err() {
        StoreError::Json { path, .. } => assert_eq!(path.as_deref(), Some(broken.as_path())),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schemas_describe_record_fields() {
    let layout_schema = serde_json::to_value(layout_json_schema()).unwrap();
    let text = layout_schema.to_string();
    assert!(text.contains("startRow"));
    assert!(text.contains("isVertical"));

    let chunks_schema = serde_json::to_value(chunks_json_schema()).unwrap().to_string();
    assert!(chunks_schema.contains("chunkId"));
    assert!(chunks_schema.contains("letter"));
}

#[test]
fn record_conversion_keeps_orientation() {
    let record = WordPositionRecord::from(&h("CAT", 4, -2));
    assert!(!record.is_vertical);
    assert_eq!(record.original_word, None);
    assert_eq!(WordPosition::from(record), h("CAT", 4, -2));
}
