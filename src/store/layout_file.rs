// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};

use crate::layout::{ChunkLayout, ChunkLayoutError, LayoutError, WordPositionLayout};
use crate::model::{Chunk, ChunkId, Orientation, Position, Square, WordPosition};

/// One placed word, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordPositionRecord {
    pub word: String,
    pub start_row: i32,
    pub start_column: i32,
    pub is_vertical: bool,
    /// Text as entered; omitted when identical to `word`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_word: Option<String>,
}

impl From<&WordPosition> for WordPositionRecord {
    fn from(wp: &WordPosition) -> Self {
        Self {
            word: wp.word().to_owned(),
            start_row: wp.start().row(),
            start_column: wp.start().column(),
            is_vertical: wp.is_vertical(),
            original_word: (wp.original() != wp.word()).then(|| wp.original().to_owned()),
        }
    }
}

impl From<WordPositionRecord> for WordPosition {
    fn from(record: WordPositionRecord) -> Self {
        let original = record.original_word.as_deref().unwrap_or(&record.word);
        WordPosition::new(
            record.word.as_str(),
            original,
            Position::new(record.start_row, record.start_column),
            Orientation::from_is_vertical(record.is_vertical),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SquareRecord {
    pub row: i32,
    pub column: i32,
    pub letter: char,
}

/// One live chunk, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChunkRecord {
    pub chunk_id: u32,
    pub squares: Vec<SquareRecord>,
}

impl From<&Chunk> for ChunkRecord {
    fn from(chunk: &Chunk) -> Self {
        Self {
            chunk_id: chunk.chunk_id().get(),
            squares: chunk
                .squares()
                .iter()
                .map(|square| SquareRecord {
                    row: square.row(),
                    column: square.column(),
                    letter: square.letter(),
                })
                .collect(),
        }
    }
}

impl From<ChunkRecord> for Chunk {
    fn from(record: ChunkRecord) -> Self {
        let mut chunk = Chunk::new(ChunkId::new(record.chunk_id));
        chunk.add_squares(
            record
                .squares
                .into_iter()
                .map(|sq| Square::new(Position::new(sq.row, sq.column), sq.letter)),
        );
        chunk
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// The stored words do not form a consistent layout.
    Layout {
        path: Option<PathBuf>,
        source: LayoutError,
    },
    /// The stored chunks overlap or reuse an id.
    Chunks {
        path: Option<PathBuf>,
        source: ChunkLayoutError,
    },
}

impl StoreError {
    fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Json { source, .. } => Self::Json {
                path: Some(path.to_path_buf()),
                source,
            },
            Self::Layout { source, .. } => Self::Layout {
                path: Some(path.to_path_buf()),
                source,
            },
            Self::Chunks { source, .. } => Self::Chunks {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "json error at {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::Layout {
                path: Some(path),
                source,
            } => write!(f, "invalid layout in {path:?}: {source}"),
            Self::Layout { path: None, source } => write!(f, "invalid layout: {source}"),
            Self::Chunks {
                path: Some(path),
                source,
            } => write!(f, "invalid chunks in {path:?}: {source}"),
            Self::Chunks { path: None, source } => write!(f, "invalid chunks: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Layout { source, .. } => Some(source),
            Self::Chunks { source, .. } => Some(source),
        }
    }
}

pub fn layout_to_json(layout: &WordPositionLayout) -> Result<String, StoreError> {
    let records = layout
        .word_positions()
        .iter()
        .map(WordPositionRecord::from)
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&records).map_err(|source| StoreError::Json { path: None, source })
}

/// Rebuilds a layout, squares included, from its JSON word list.
pub fn layout_from_json(json: &str) -> Result<WordPositionLayout, StoreError> {
    let records: Vec<WordPositionRecord> =
        serde_json::from_str(json).map_err(|source| StoreError::Json { path: None, source })?;
    WordPositionLayout::from_word_positions(records.into_iter().map(WordPosition::from))
        .map_err(|source| StoreError::Layout { path: None, source })
}

/// Serializes the live chunks only.
pub fn chunks_to_json(chunks: &ChunkLayout) -> Result<String, StoreError> {
    let records = chunks.chunks().map(ChunkRecord::from).collect::<Vec<_>>();
    serde_json::to_string_pretty(&records).map_err(|source| StoreError::Json { path: None, source })
}

/// Reads chunks back. Letters are not checked against any layout.
pub fn chunks_from_json(json: &str) -> Result<ChunkLayout, StoreError> {
    let records: Vec<ChunkRecord> =
        serde_json::from_str(json).map_err(|source| StoreError::Json { path: None, source })?;
    ChunkLayout::try_from_chunks(records.into_iter().map(Chunk::from))
        .map_err(|source| StoreError::Chunks { path: None, source })
}

pub fn save_layout(path: impl AsRef<Path>, layout: &WordPositionLayout) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = layout_to_json(layout).map_err(|err| err.with_path(path))?;
    write_atomic(path, json.as_bytes())?;
    log::debug!(target: "bonza", "saved {} word positions to {path:?}", layout.word_positions().len());
    Ok(())
}

pub fn load_layout(path: impl AsRef<Path>) -> Result<WordPositionLayout, StoreError> {
    let path = path.as_ref();
    let json = read_file(path)?;
    layout_from_json(&json).map_err(|err| err.with_path(path))
}

pub fn save_chunks(path: impl AsRef<Path>, chunks: &ChunkLayout) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = chunks_to_json(chunks).map_err(|err| err.with_path(path))?;
    write_atomic(path, json.as_bytes())?;
    log::debug!(target: "bonza", "saved {} chunks to {path:?}", chunks.chunks_count());
    Ok(())
}

pub fn load_chunks(path: impl AsRef<Path>) -> Result<ChunkLayout, StoreError> {
    let path = path.as_ref();
    let json = read_file(path)?;
    chunks_from_json(&json).map_err(|err| err.with_path(path))
}

/// JSON schema of a stored layout (an array of [`WordPositionRecord`]).
pub fn layout_json_schema() -> Schema {
    schemars::schema_for!(Vec<WordPositionRecord>)
}

/// JSON schema of stored chunks (an array of [`ChunkRecord`]).
pub fn chunks_json_schema() -> Schema {
    schemars::schema_for!(Vec<ChunkRecord>)
}

fn read_file(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".bonza.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests;
