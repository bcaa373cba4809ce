// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Glyph standing in for a space so every char of a canonical word maps to one grid cell.
pub const SPACE_PLACEHOLDER: char = '·';

/// Canonical form of a word: uppercase, spaces replaced by [`SPACE_PLACEHOLDER`].
///
/// `"Non sequitur"` becomes `"NON·SEQUITUR"`.
pub fn canonicalize(word: &str) -> String {
    word.to_uppercase().replace(' ', &SPACE_PLACEHOLDER.to_string())
}

/// One word per non-blank line, trimmed.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[derive(Debug)]
pub struct WordFileError {
    path: PathBuf,
    source: io::Error,
}

impl WordFileError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WordFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read word list {:?}: {}", self.path, self.source)
    }
}

impl std::error::Error for WordFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Reads a UTF-8 word file, one word per non-blank line.
pub fn read_word_file(path: impl AsRef<Path>) -> Result<Vec<String>, WordFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WordFileError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&text))
}
