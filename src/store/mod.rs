// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence collaborators of the importer.
//!
//! The importer only needs two things from storage: an existence lookup by
//! natural key ([`CaseLookup`]) and a sink for accepted records ([`CaseSink`]).
//! [`MemoryCaseStore`] implements both and [`CaseStoreFile`] persists it as JSON.

mod case_file;
mod memory;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::import::{ImportOutcome, ImportStatus};
use crate::model::{CaseId, CaseKey, CaseRecord};

pub use case_file::CaseStoreFile;
pub use memory::MemoryCaseStore;

pub trait CaseLookup {
    /// Returns the stored record matching `key`, if any.
    fn find_existing(&self, key: &CaseKey<'_>) -> Result<Option<CaseRecord>, LookupError>;
}

pub trait CaseSink {
    /// Stores a new record and returns the id assigned to it.
    fn insert_case(&mut self, record: CaseRecord) -> Result<CaseId, StoreError>;

    /// Replaces the stored record carrying `record.id`.
    fn update_case(&mut self, record: CaseRecord) -> Result<(), StoreError>;
}

/// Lookup that never finds anything; every case is treated as new.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExistingCases;

impl CaseLookup for NoExistingCases {
    fn find_existing(&self, _key: &CaseKey<'_>) -> Result<Option<CaseRecord>, LookupError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case lookup failed: {}", self.message)
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    MissingId { name: String },
    NotFound { case_id: CaseId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid case store json at {}: {source}", path.display())
            }
            Self::MissingId { name } => write!(f, "cannot update case without id: {name}"),
            Self::NotFound { case_id } => write!(f, "case not found: {case_id}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingId { .. } | Self::NotFound { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum CommitError {
    /// The outcome was not clean; nothing was written.
    Rejected {
        status: ImportStatus,
        diagnostics: usize,
    },
    Store(StoreError),
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected {
                status,
                diagnostics,
            } => write!(
                f,
                "import not committed: status {status} with {diagnostics} diagnostic(s)"
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for CommitError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitSummary {
    pub inserted: Vec<CaseId>,
    pub updated: usize,
}

/// Writes an outcome's new and update cases, all or nothing at the outcome level:
/// an outcome carrying any diagnostic is refused before the first write.
pub fn commit_outcome(
    outcome: &ImportOutcome,
    sink: &mut dyn CaseSink,
) -> Result<CommitSummary, CommitError> {
    if !outcome.is_clean() {
        return Err(CommitError::Rejected {
            status: outcome.status,
            diagnostics: outcome.diagnostics.len(),
        });
    }

    let mut summary = CommitSummary::default();
    for record in &outcome.new_cases {
        summary.inserted.push(sink.insert_case(record.clone())?);
    }
    for record in &outcome.update_cases {
        sink.update_case(record.clone())?;
        summary.updated += 1;
    }

    tracing::info!(
        inserted = summary.inserted.len(),
        updated = summary.updated,
        "committed import outcome"
    );
    Ok(summary)
}
