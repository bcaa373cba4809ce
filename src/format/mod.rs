// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Word list input: canonicalization and plain-text word files.

pub mod words;

pub use words::{
    canonicalize, parse_word_list, read_word_file, WordFileError, SPACE_PLACEHOLDER,
};
