// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naming, depth and duplicate rules for imported cases and modules.
//!
//! Every rule records a diagnostic and moves on; a record is only diverted
//! from the "new" list when it resolves to an existing stored case.

use std::collections::HashSet;

use crate::config::ImportConfig;
use crate::model::{CaseProjection, CaseRecord, Category, Diagnostics, FolderPath, Method};
use crate::store::{CaseLookup, LookupError};

/// Where a validated record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRoute {
    New,
    Update,
}

/// Batch-wide validation state of one import pass.
#[derive(Debug)]
pub struct BatchState<'k> {
    known_names: &'k mut HashSet<String>,
    projections: HashSet<CaseProjection>,
    diagnostics: Diagnostics,
    new_cases: Vec<CaseRecord>,
    update_cases: Vec<CaseRecord>,
}

impl<'k> BatchState<'k> {
    pub fn new(known_names: &'k mut HashSet<String>) -> Self {
        Self {
            known_names,
            projections: HashSet::new(),
            diagnostics: Diagnostics::new(),
            new_cases: Vec::new(),
            update_cases: Vec::new(),
        }
    }

    pub fn known_names(&self) -> &HashSet<String> {
        self.known_names
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    pub fn new_cases(&self) -> &[CaseRecord] {
        &self.new_cases
    }

    pub fn update_cases(&self) -> &[CaseRecord] {
        &self.update_cases
    }

    pub fn into_parts(self) -> (Vec<CaseRecord>, Vec<CaseRecord>, Diagnostics) {
        (self.new_cases, self.update_cases, self.diagnostics)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_folder_depth: usize,
    max_name_chars: usize,
    max_segment_chars: usize,
}

impl Validator {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            max_folder_depth: config.max_folder_depth,
            max_name_chars: config.max_name_chars,
            max_segment_chars: config.max_segment_chars,
        }
    }

    /// Checks one assembled case and routes it to the new or update list.
    ///
    /// Only a failing lookup aborts; rule violations are recorded on `state`.
    pub fn validate_case(
        &self,
        state: &mut BatchState<'_>,
        lookup: &dyn CaseLookup,
        record: CaseRecord,
    ) -> Result<CaseRoute, LookupError> {
        let path = &record.folder_path;
        let diagnostics = &mut state.diagnostics;

        if record.name.chars().count() > self.max_name_chars {
            diagnostics.push(
                format!("test case name must be at most {} characters", self.max_name_chars),
                path.with_name(&record.name),
            );
        }

        if path.depth() > self.max_folder_depth {
            diagnostics.push(self.depth_message(), path.as_str());
        }

        for segment in path.segments().map(str::trim) {
            if segment.is_empty() {
                diagnostics.push(
                    "test case module name must not be empty",
                    path.with_name(&record.name),
                );
                break;
            }
            if segment.chars().count() > self.max_segment_chars {
                diagnostics.push(self.segment_length_message(), segment);
                break;
            }
        }

        if record.category == Some(Category::Functional) && record.method == Method::Auto {
            diagnostics.push(
                "functional test cases cannot use the auto method",
                path.with_name(&record.name),
            );
        }

        if state.known_names.contains(&record.name) {
            if let Some(existing) = lookup.find_existing(&record.key())? {
                tracing::debug!(
                    name = %record.name,
                    existing_id = ?existing.id,
                    "case matches a stored case, routing to update"
                );
                state.update_cases.push(record.onto_existing(&existing));
                return Ok(CaseRoute::Update);
            }
        } else {
            state.known_names.insert(record.name.clone());
        }

        let path = &record.folder_path;
        if !record.priority.is_allowed() {
            state
                .diagnostics
                .push("test case priority is incorrect", path.with_name(&record.name));
        }
        if record.category.is_none() {
            state
                .diagnostics
                .push("test case category is incorrect", path.with_name(&record.name));
        }

        if !state.projections.insert(record.projection()) {
            state.diagnostics.push(
                "test case already exists in this import",
                path.child_display(&record.name),
            );
        }

        state.new_cases.push(record);
        Ok(CaseRoute::New)
    }

    /// Checks a module path that holds no cases.
    ///
    /// Unlike [`Self::validate_case`], every offending segment is reported.
    pub fn validate_folder(&self, path: &FolderPath, diagnostics: &mut Diagnostics) {
        if path.depth() > self.max_folder_depth {
            diagnostics.push(self.depth_message(), path.as_str());
        }

        let mut prefix = String::from(FolderPath::SEPARATOR);
        for segment in path.segments().map(str::trim) {
            if segment.is_empty() {
                diagnostics.push("module name must not be empty", prefix.as_str());
            } else if segment.chars().count() > self.max_segment_chars {
                diagnostics.push(self.segment_length_message(), format!("{prefix}{segment}"));
            } else {
                prefix.push_str(segment);
                prefix.push(FolderPath::SEPARATOR);
            }
        }
    }

    fn depth_message(&self) -> String {
        format!("module depth must not exceed {} levels", self.max_folder_depth)
    }

    fn segment_length_message(&self) -> String {
        format!("module name must be at most {} characters", self.max_segment_chars)
    }
}
