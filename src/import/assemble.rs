// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::steps::extract_steps;
use super::tags::TagPatterns;
use super::title::{decode_title, CategoryTag, TitleError};
use crate::model::{CaseRecord, Category, FolderPath, Method, OutlineNode, ProjectId, UserId};

/// Ownership fields stamped onto every case of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDefaults {
    pub project_id: ProjectId,
    pub maintainer: Option<UserId>,
}

/// Builds a case from a marker title, its child topics and the enclosing
/// module path (the raw path of the parent; the case does not extend it).
pub fn assemble_case(
    title: &str,
    parent_path: &str,
    children: &[OutlineNode],
    defaults: &CaseDefaults,
    patterns: &TagPatterns,
) -> Result<CaseRecord, TitleError> {
    let decoded = decode_title(title, patterns)?;
    let extracted = extract_steps(children, patterns);

    let category = match decoded.category {
        CategoryTag::Absent => Some(Category::Functional),
        CategoryTag::Known(category) => Some(category),
        CategoryTag::Unknown(_) => None,
    };

    Ok(CaseRecord {
        id: None,
        name: decoded.name,
        folder_path: FolderPath::normalize(parent_path),
        priority: decoded.priority,
        category,
        method: Method::Manual,
        precondition: extracted.precondition,
        remark: extracted.remark,
        steps: extracted.steps,
        project_id: defaults.project_id.clone(),
        maintainer: defaults.maintainer.clone(),
    })
}
