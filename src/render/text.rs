// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use super::{Canvas, CanvasError};
use crate::layout::{ChunkLayout, WordPositionLayout};

/// Letter grid of `layout`, one text row per grid row, letters separated by a space.
///
/// Empty cells are blanks; trailing blanks are trimmed. An empty layout renders as `""`.
pub fn render_layout_text(layout: &WordPositionLayout) -> Result<String, CanvasError> {
    let Some(bounds) = layout.bounds() else {
        return Ok(String::new());
    };
    let width = usize::try_from(bounds.width()).unwrap_or_default();
    let height = usize::try_from(bounds.height()).unwrap_or_default();
    let mut canvas = Canvas::new((width * 2).saturating_sub(1), height)?;

    for square in layout.squares() {
        let x = (square.column() - bounds.min_column()) as usize * 2;
        let y = (square.row() - bounds.min_row()) as usize;
        canvas.set(x, y, square.letter())?;
    }

    Ok(canvas.to_string_trimmed())
}

/// One line per live chunk followed by its adjacent chunks as `id[count]`.
pub fn render_chunk_summary(chunks: &ChunkLayout) -> String {
    let mut out = format!(
        "{} chunks, {} squares",
        chunks.chunks_count(),
        chunks.squares_count()
    );
    for chunk in chunks.chunks() {
        let _ = write!(out, "\n  {chunk}");
        let adjacent = chunks.adjacent_chunks(chunk.chunk_id());
        if adjacent.is_empty() {
            continue;
        }
        out.push_str("  ->");
        for chunk_id in adjacent {
            if let Some(other) = chunks.chunk(chunk_id) {
                let _ = write!(out, " {chunk_id}[{}]", other.squares_count());
            }
        }
    }
    out
}
