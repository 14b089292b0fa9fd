// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `/`-delimited module path such as `/Login/Password reset`.
///
/// Normalized form starts with `/` and carries no trailing `/`. The bare root
/// `/` is the single exception to the trailing rule. Segments are kept as
/// given (including empty ones between two slashes) so that validation can
/// report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderPath {
    value: String,
}

impl FolderPath {
    pub const SEPARATOR: char = '/';

    pub fn root() -> Self {
        Self {
            value: "/".to_owned(),
        }
    }

    /// Normalizes a raw, concatenated path into its canonical form.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches(Self::SEPARATOR);
        let value = if trimmed.starts_with(Self::SEPARATOR) {
            trimmed.to_owned()
        } else {
            format!("{}{trimmed}", Self::SEPARATOR)
        };
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_root(&self) -> bool {
        self.value == "/"
    }

    /// Segments after the leading `/`, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let rest = if self.is_root() { None } else { Some(&self.value[1..]) };
        rest.into_iter().flat_map(|rest| rest.split(Self::SEPARATOR))
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// `self` followed directly by `name`, the form used in diagnostic contexts.
    pub fn with_name(&self, name: &str) -> String {
        format!("{}{name}", self.value)
    }

    /// `self` and `name` joined by a separator.
    pub fn child_display(&self, name: &str) -> String {
        format!("{}{}{name}", self.value, Self::SEPARATOR)
    }
}

/// Appends `title` to a raw (not yet normalized) parent path.
pub fn join_raw(parent: &str, title: &str) -> String {
    let mut path = String::with_capacity(parent.len() + title.len() + 1);
    path.push_str(parent);
    path.push(FolderPath::SEPARATOR);
    path.push_str(title);
    path
}

impl Default for FolderPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for FolderPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for FolderPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for FolderPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
