// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Import limits and tag vocabulary, loadable from TOML.
//!
//! ```toml
//! max_folder_depth = 8
//! max_name_chars = 50
//! max_segment_chars = 30
//!
//! [tags]
//! case = "tc"
//! precondition = "pc"
//! remark = "rc"
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 8;
pub const DEFAULT_MAX_NAME_CHARS: usize = 50;
pub const DEFAULT_MAX_SEGMENT_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    pub max_folder_depth: usize,
    pub max_name_chars: usize,
    pub max_segment_chars: usize,
    pub tags: TagConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
            max_segment_chars: DEFAULT_MAX_SEGMENT_CHARS,
            tags: TagConfig::default(),
        }
    }
}

/// Leading tags that mark case, precondition and remark topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    pub case: String,
    pub precondition: String,
    pub remark: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            case: "tc".to_owned(),
            precondition: "pc".to_owned(),
            remark: "rc".to_owned(),
        }
    }
}

impl ImportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded import config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Toml {
            path: PathBuf::new(),
            source: Box::new(source),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_folder_depth", self.max_folder_depth),
            ("max_name_chars", self.max_name_chars),
            ("max_segment_chars", self.max_segment_chars),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_owned(),
                });
            }
        }

        for (field, tag) in [
            ("tags.case", &self.tags.case),
            ("tags.precondition", &self.tags.precondition),
            ("tags.remark", &self.tags.remark),
        ] {
            if tag.is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_owned(),
                });
            }
            if let Some(ch) = tag.chars().find(|c| !c.is_alphanumeric() && *c != '_') {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must contain only letters, digits or '_' (found {ch:?})"),
                });
            }
        }

        let tags = [&self.tags.case, &self.tags.precondition, &self.tags.remark]
            .map(|tag| tag.to_lowercase());
        for (idx, tag) in tags.iter().enumerate() {
            if tags[idx + 1..].contains(tag) {
                return Err(ConfigError::Invalid {
                    field: "tags",
                    reason: format!("tag {tag:?} is used more than once"),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Toml {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Toml { path, source } if path.as_os_str().is_empty() => {
                write!(f, "invalid config: {source}")
            }
            Self::Toml { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Invalid { field, reason } => write!(f, "invalid config field {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml { source, .. } => Some(source.as_ref()),
            Self::Invalid { .. } => None,
        }
    }
}
