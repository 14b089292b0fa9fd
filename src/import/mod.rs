// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mind-map to test case import.
//!
//! A pass walks every sheet of an outline document, turns case-marker topics
//! into [`CaseRecord`]s, validates them against the batch and the existing case
//! library, and returns an [`ImportOutcome`]. The pass never fails outright:
//! structural rejections and unexpected errors end up as diagnostics.

pub mod assemble;
pub mod steps;
pub mod tags;
pub mod title;
pub mod validate;
mod walk;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ImportConfig};
use crate::format::{parse_outline, OutlineFormat, OutlineParseError};
use crate::model::{CaseRecord, Diagnostic, Diagnostics, FolderPath, OutlineSheet};
use crate::store::{CaseLookup, LookupError};

pub use assemble::{assemble_case, CaseDefaults};
pub use steps::{extract_steps, ExtractedSteps};
pub use tags::TagPatterns;
pub use title::{decode_title, CategoryTag, DecodedTitle, TitleError};
pub use validate::{BatchState, CaseRoute, Validator};
pub use walk::MAX_WALK_DEPTH;

use walk::{walk_folder, ImportSession};

pub const TOP_LEVEL_CASE_MESSAGE: &str =
    "test cases cannot be created at the top level; place them inside a module";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Completed,
    Aborted,
    Failed,
}

impl ImportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Aborted => "aborted",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one import pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub status: ImportStatus,
    pub new_cases: Vec<CaseRecord>,
    pub update_cases: Vec<CaseRecord>,
    pub empty_folder_paths: Vec<FolderPath>,
    pub diagnostics: Diagnostics,
}

impl ImportOutcome {
    fn aborted(diagnostic: Diagnostic) -> Self {
        Self {
            status: ImportStatus::Aborted,
            new_cases: Vec::new(),
            update_cases: Vec::new(),
            empty_folder_paths: Vec::new(),
            diagnostics: Diagnostics::single(diagnostic.message(), diagnostic.context()),
        }
    }

    fn failed(err: &ImportError) -> Self {
        Self {
            status: ImportStatus::Failed,
            new_cases: Vec::new(),
            update_cases: Vec::new(),
            empty_folder_paths: Vec::new(),
            diagnostics: Diagnostics::single(err.to_string(), ""),
        }
    }

    /// Completed without a single diagnostic; the only state worth persisting.
    pub fn is_clean(&self) -> bool {
        self.status == ImportStatus::Completed && self.diagnostics.is_empty()
    }
}

/// Unexpected failures inside a pass. Converted to a diagnostic at the
/// [`Importer`] boundary.
#[derive(Debug)]
pub enum ImportError {
    Parse(OutlineParseError),
    Pattern(regex::Error),
    Lookup(LookupError),
    TooDeep { path: FolderPath, depth: usize },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Pattern(err) => write!(f, "invalid tag pattern: {err}"),
            Self::Lookup(err) => write!(f, "{err}"),
            Self::TooDeep { path, depth } => write!(
                f,
                "outline nesting exceeds {MAX_WALK_DEPTH} levels at {path} (depth {depth})"
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::Lookup(err) => Some(err),
            Self::TooDeep { .. } => None,
        }
    }
}

enum PassEnd {
    Completed,
    Aborted(Diagnostic),
}

/// Runs import passes for one project with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Importer {
    config: ImportConfig,
    defaults: CaseDefaults,
}

impl Importer {
    /// Validates `config` up front; an empty or malformed tag would otherwise
    /// turn nearly every topic into a case.
    pub fn new(config: ImportConfig, defaults: CaseDefaults) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, defaults })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn defaults(&self) -> &CaseDefaults {
        &self.defaults
    }

    /// Parses `input` and imports it. Parse errors become a failed outcome.
    pub fn import_str(
        &self,
        format: OutlineFormat,
        input: &str,
        known_names: &mut HashSet<String>,
        lookup: &dyn CaseLookup,
    ) -> ImportOutcome {
        match parse_outline(format, input) {
            Ok(sheets) => self.import_sheets(&sheets, known_names, lookup),
            Err(err) => {
                let err = ImportError::Parse(err);
                tracing::warn!(%format, %err, "outline could not be parsed");
                ImportOutcome::failed(&err)
            }
        }
    }

    /// Imports already parsed sheets.
    ///
    /// `known_names` seeds the duplicate-name check and receives every new name
    /// seen during the pass, so consecutive passes sharing a set observe each
    /// other.
    pub fn import_sheets(
        &self,
        sheets: &[OutlineSheet],
        known_names: &mut HashSet<String>,
        lookup: &dyn CaseLookup,
    ) -> ImportOutcome {
        tracing::info!(
            project_id = %self.defaults.project_id,
            sheets = sheets.len(),
            known_names = known_names.len(),
            "starting outline import"
        );

        let patterns = match TagPatterns::new(&self.config.tags) {
            Ok(patterns) => patterns,
            Err(err) => return ImportOutcome::failed(&ImportError::Pattern(err)),
        };

        let mut session = ImportSession {
            patterns,
            validator: Validator::new(&self.config),
            defaults: &self.defaults,
            lookup,
            state: BatchState::new(known_names),
            empty_folder_paths: Vec::new(),
        };

        let end = run_pass(&mut session, sheets);
        let ImportSession {
            validator,
            state,
            empty_folder_paths,
            ..
        } = session;
        let (new_cases, update_cases, mut diagnostics) = state.into_parts();

        let outcome = match end {
            Ok(PassEnd::Completed) => {
                for path in &empty_folder_paths {
                    validator.validate_folder(path, &mut diagnostics);
                }
                ImportOutcome {
                    status: ImportStatus::Completed,
                    new_cases,
                    update_cases,
                    empty_folder_paths,
                    diagnostics,
                }
            }
            Ok(PassEnd::Aborted(diagnostic)) => {
                tracing::warn!(
                    title = diagnostic.context(),
                    "case marker at top level, aborting import"
                );
                ImportOutcome::aborted(diagnostic)
            }
            Err(err) => {
                tracing::warn!(%err, "import failed");
                ImportOutcome {
                    new_cases,
                    update_cases,
                    empty_folder_paths,
                    ..ImportOutcome::failed(&err)
                }
            }
        };

        tracing::info!(
            status = %outcome.status,
            new_cases = outcome.new_cases.len(),
            update_cases = outcome.update_cases.len(),
            empty_folders = outcome.empty_folder_paths.len(),
            diagnostics = outcome.diagnostics.len(),
            "finished outline import"
        );
        outcome
    }
}

fn run_pass(
    session: &mut ImportSession<'_, '_>,
    sheets: &[OutlineSheet],
) -> Result<PassEnd, ImportError> {
    for sheet in sheets {
        for item in sheet.top_level() {
            if session.patterns.is_case_marker(item.title()) {
                return Ok(PassEnd::Aborted(Diagnostic::new(
                    TOP_LEVEL_CASE_MESSAGE,
                    item.title(),
                )));
            }

            session.check_module_title(item, None);
            if item.has_children() {
                walk_folder(session, item.children(), item.title(), 1)?;
            } else {
                session.record_empty_folder(item.title());
            }
        }
    }
    Ok(PassEnd::Completed)
}
