// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::folder_path::FolderPath;
use super::ids::{CaseId, ProjectId, UserId};

/// Case priority.
///
/// Titles may carry any `P...` token; values outside `P0..=P3` are kept as
/// [`Priority::Other`] so they can be reported rather than silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    #[default]
    P0,
    P1,
    P2,
    P3,
    Other(String),
}

impl Priority {
    pub const ALLOWED: [Priority; 4] = [Priority::P0, Priority::P1, Priority::P2, Priority::P3];

    /// Parses an already uppercased token; unknown tokens become `Other`.
    pub fn parse(token: &str) -> Self {
        match token {
            "P0" => Self::P0,
            "P1" => Self::P1,
            "P2" => Self::P2,
            "P3" => Self::P3,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Case category. The tag vocabulary is closed; see [`Category::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Functional,
    Performance,
    Api,
}

impl Category {
    /// Maps a title sub-tag to a category. Each category answers to its
    /// Chinese tag and its lowercase English name; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "功能测试" | "functional" => Some(Self::Functional),
            "性能测试" | "performance" => Some(Self::Performance),
            "接口测试" | "api" => Some(Self::Api),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::Performance => "performance",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Manual,
    Auto,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numbered step. `result` is absent when the step node had no children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseStep {
    pub num: u32,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl CaseStep {
    pub fn new(num: u32, desc: impl Into<String>, result: Option<String>) -> Self {
        Self {
            num,
            desc: desc.into(),
            result,
        }
    }

    /// The single step emitted for a case without step nodes.
    pub fn placeholder() -> Self {
        Self {
            num: 1,
            desc: String::new(),
            result: Some(String::new()),
        }
    }
}

/// A fully assembled test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CaseId>,
    pub name: String,
    pub folder_path: FolderPath,
    pub priority: Priority,
    pub category: Option<Category>,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,
    #[serde(default)]
    pub remark: String,
    pub steps: Vec<CaseStep>,
    pub project_id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<UserId>,
}

impl CaseRecord {
    /// Steps encoded as an ordered JSON array (`num`, `desc`, `result`).
    pub fn steps_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.steps)
    }

    /// Content snapshot used for in-batch duplicate detection.
    pub fn projection(&self) -> CaseProjection {
        CaseProjection {
            name: self.name.clone(),
            folder_path: self.folder_path.clone(),
            priority: self.priority.clone(),
            category: self.category,
            method: self.method,
            precondition: self.precondition.clone(),
            remark: self.remark.clone(),
            steps: self.steps.clone(),
        }
    }

    /// Natural key handed to the existence lookup.
    pub fn key(&self) -> CaseKey<'_> {
        CaseKey {
            name: &self.name,
            project_id: &self.project_id,
            folder_path: &self.folder_path,
            priority: &self.priority,
            category: self.category,
            method: self.method,
        }
    }

    /// Carries every imported field onto the identity of `existing`.
    pub fn onto_existing(self, existing: &CaseRecord) -> CaseRecord {
        CaseRecord {
            id: existing.id.clone(),
            ..self
        }
    }
}

/// Value-equality view of a case's content, excluding identity and ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseProjection {
    name: String,
    folder_path: FolderPath,
    priority: Priority,
    category: Option<Category>,
    method: Method,
    precondition: Option<String>,
    remark: String,
    steps: Vec<CaseStep>,
}

/// Borrowed natural key of a case within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseKey<'a> {
    pub name: &'a str,
    pub project_id: &'a ProjectId,
    pub folder_path: &'a FolderPath,
    pub priority: &'a Priority,
    pub category: Option<Category>,
    pub method: Method,
}

impl CaseKey<'_> {
    pub fn matches(&self, record: &CaseRecord) -> bool {
        record.name == self.name
            && &record.project_id == self.project_id
            && &record.folder_path == self.folder_path
            && &record.priority == self.priority
            && record.category == self.category
            && record.method == self.method
    }
}
