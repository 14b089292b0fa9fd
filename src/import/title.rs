// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::tags::TagPatterns;
use crate::model::{Category, Priority};

/// Category information carried by a case title's sub-tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryTag {
    /// No sub-tag other than the marker and priority was present.
    Absent,
    Known(Category),
    /// A sub-tag outside the category table; the category ends up unset.
    Unknown(String),
}

impl CategoryTag {
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Known(category) => Some(*category),
            Self::Absent | Self::Unknown(_) => None,
        }
    }
}

/// Result of decoding `tc[-<sub-tag>...]:<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTitle {
    pub name: String,
    pub priority: Priority,
    pub category: CategoryTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    MissingName { title: String },
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName { title } => {
                write!(f, "test case name format is incorrect: {title:?}")
            }
        }
    }
}

impl std::error::Error for TitleError {}

pub fn decode_title(title: &str, patterns: &TagPatterns) -> Result<DecodedTitle, TitleError> {
    let normalized = title.replace('：', ":");
    let mut parts = normalized.split(':');
    let head = parts.next().unwrap_or_default();
    // Separator colons inside the name are dropped, matching how existing
    // case libraries were produced.
    let name = parts.collect::<String>().trim().to_owned();
    if name.is_empty() {
        return Err(TitleError::MissingName {
            title: title.to_owned(),
        });
    }

    let mut decoded = DecodedTitle {
        name,
        priority: Priority::default(),
        category: CategoryTag::Absent,
    };

    if head.contains('-') {
        for token in head.split('-').map(str::trim).filter(|t| !t.is_empty()) {
            if patterns.is_case_marker(token) {
                continue;
            }
            // Table tags first: "performance" is a category, not a priority.
            if let Some(category) = Category::from_tag(token) {
                decoded.category = CategoryTag::Known(category);
            } else if token.starts_with('P') || token.starts_with('p') {
                decoded.priority = Priority::parse(&token.to_uppercase());
            } else {
                decoded.category = CategoryTag::Unknown(token.to_owned());
            }
        }
    }

    Ok(decoded)
}
