// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of an [`ImportOutcome`] for people and for tools.

use std::fmt::Write as _;

use crate::import::ImportOutcome;
use crate::store::CommitSummary;

/// Plain-text summary: counts, then cases, empty modules and diagnostics.
pub fn render_text(outcome: &ImportOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "import {}: {} new, {} update, {} empty module(s), {} diagnostic(s)",
        outcome.status,
        outcome.new_cases.len(),
        outcome.update_cases.len(),
        outcome.empty_folder_paths.len(),
        outcome.diagnostics.len(),
    );

    for case in &outcome.new_cases {
        let _ = writeln!(out, "  new     {}", case_line(case));
    }
    for case in &outcome.update_cases {
        let id = case.id.as_ref().map(|id| id.as_str()).unwrap_or("?");
        let _ = writeln!(out, "  update  {} [{id}]", case_line(case));
    }
    for path in &outcome.empty_folder_paths {
        let _ = writeln!(out, "  empty   {path}");
    }

    if !outcome.diagnostics.is_empty() {
        out.push_str("diagnostics:\n");
        for diagnostic in &outcome.diagnostics {
            if diagnostic.context().is_empty() {
                let _ = writeln!(out, "  - {}", diagnostic.message());
            } else {
                let _ = writeln!(out, "  - {}: {}", diagnostic.context(), diagnostic.message());
            }
        }
    }

    out
}

fn case_line(case: &crate::model::CaseRecord) -> String {
    let category = case.category.map(|c| c.as_str()).unwrap_or("-");
    format!(
        "{}/{} ({}, {category}, {} step(s))",
        case.folder_path.as_str().trim_end_matches('/'),
        case.name,
        case.priority,
        case.steps.len()
    )
}

pub fn render_commit(summary: &CommitSummary) -> String {
    format!(
        "committed: {} inserted, {} updated\n",
        summary.inserted.len(),
        summary.updated
    )
}

/// Pretty JSON of the whole outcome, newline terminated.
pub fn render_json(outcome: &ImportOutcome) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(outcome)?;
    json.push('\n');
    Ok(json)
}
