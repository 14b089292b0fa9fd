// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CaseLookup, CaseSink, LookupError, StoreError};
use crate::model::{CaseId, CaseKey, CaseRecord, ProjectId};

/// In-memory case table, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCaseStore {
    #[serde(default)]
    next_seq: u64,
    #[serde(default)]
    cases: Vec<CaseRecord>,
}

impl MemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, case_id: &CaseId) -> Option<&CaseRecord> {
        self.cases.iter().find(|case| case.id.as_ref() == Some(case_id))
    }

    /// Names already used in `project_id`, the seed of an import's known-names set.
    pub fn known_names(&self, project_id: &ProjectId) -> HashSet<String> {
        self.cases
            .iter()
            .filter(|case| &case.project_id == project_id)
            .map(|case| case.name.clone())
            .collect()
    }

    fn next_case_id(&mut self) -> CaseId {
        loop {
            self.next_seq += 1;
            let case_id =
                CaseId::new(format!("case-{:04}", self.next_seq)).expect("generated case id");
            if self.get(&case_id).is_none() {
                return case_id;
            }
        }
    }
}

impl CaseLookup for MemoryCaseStore {
    fn find_existing(&self, key: &CaseKey<'_>) -> Result<Option<CaseRecord>, LookupError> {
        Ok(self.cases.iter().find(|case| key.matches(case)).cloned())
    }
}

impl CaseSink for MemoryCaseStore {
    fn insert_case(&mut self, mut record: CaseRecord) -> Result<CaseId, StoreError> {
        let case_id = self.next_case_id();
        record.id = Some(case_id.clone());
        tracing::debug!(%case_id, name = %record.name, "inserted case");
        self.cases.push(record);
        Ok(case_id)
    }

    fn update_case(&mut self, record: CaseRecord) -> Result<(), StoreError> {
        let Some(case_id) = record.id.clone() else {
            return Err(StoreError::MissingId { name: record.name });
        };
        let Some(slot) = self
            .cases
            .iter_mut()
            .find(|case| case.id.as_ref() == Some(&case_id))
        else {
            return Err(StoreError::NotFound { case_id });
        };
        tracing::debug!(%case_id, name = %record.name, "updated case");
        *slot = record;
        Ok(())
    }
}
