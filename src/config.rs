// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Bonza-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bonza and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generator settings.
//!
//! Settings can be read from a JSON file such as
//! `{ "seed": 42, "averageCount": 5, "maxAttempts": 100 }`; every field is optional.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::DEFAULT_AVERAGE_COUNT;
use crate::rng::SeededRandom;

pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; a fresh entropy seed when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_average_count")]
    pub average_count: usize,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_average_count() -> usize {
    DEFAULT_AVERAGE_COUNT
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            average_count: DEFAULT_AVERAGE_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Json { path: None, source })?;
        config.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.average_count == 0 {
            return Err(ConfigError::Invalid {
                field: "averageCount",
                reason: "must be at least 1",
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "maxAttempts",
                reason: "must be at least 1",
            });
        }
        Ok(self)
    }

    /// Random source for one generator run.
    pub fn random_source(&self) -> SeededRandom {
        match self.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {path:?}: {source}"),
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid config {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "invalid config: {source}"),
            Self::Invalid { field, reason } => write!(f, "invalid config: {field} {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}
