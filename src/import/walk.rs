// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::assemble::{assemble_case, CaseDefaults};
use super::tags::TagPatterns;
use super::validate::{BatchState, Validator};
use super::ImportError;
use crate::model::{join_raw, FolderPath, OutlineNode};
use crate::store::CaseLookup;

pub(crate) const EMPTY_MODULE_MESSAGE: &str = "module name must not be empty";

/// Nesting limit of the recursive walk; deeper outlines fail the pass.
pub const MAX_WALK_DEPTH: usize = 256;

/// Everything one import pass owns while it walks the outline.
pub(crate) struct ImportSession<'a, 'k> {
    pub(crate) patterns: TagPatterns,
    pub(crate) validator: Validator,
    pub(crate) defaults: &'a CaseDefaults,
    pub(crate) lookup: &'a dyn CaseLookup,
    pub(crate) state: BatchState<'k>,
    pub(crate) empty_folder_paths: Vec<FolderPath>,
}

impl ImportSession<'_, '_> {
    fn import_case(&mut self, node: &OutlineNode, parent_path: &str) -> Result<(), ImportError> {
        let record = match assemble_case(
            node.title(),
            parent_path,
            node.children(),
            self.defaults,
            &self.patterns,
        ) {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(title = node.title(), %err, "skipping case with malformed title");
                self.state
                    .diagnostics_mut()
                    .push("test case name format is incorrect", node.title());
                return Ok(());
            }
        };

        let name = record.name.clone();
        let route = self
            .validator
            .validate_case(&mut self.state, self.lookup, record)
            .map_err(ImportError::Lookup)?;
        tracing::debug!(%name, ?route, "validated case");
        Ok(())
    }

    /// Flags a module whose empty title would vanish from a recorded path.
    /// `parent_path` is `None` for a top-level module.
    ///
    /// Only leaves and modules holding cases are flagged here; deeper paths
    /// keep the empty segment and are caught by path validation.
    pub(crate) fn check_module_title(&mut self, node: &OutlineNode, parent_path: Option<&str>) {
        if !node.title().trim_matches(FolderPath::SEPARATOR).is_empty() {
            return;
        }
        let ends_a_path = !node.has_children()
            || node
                .children()
                .iter()
                .any(|child| self.patterns.is_case_marker(child.title()));
        if !ends_a_path {
            return;
        }

        let context = match parent_path {
            Some(parent) => FolderPath::normalize(parent).child_display(""),
            None => FolderPath::root().to_string(),
        };
        self.state.diagnostics_mut().push(EMPTY_MODULE_MESSAGE, context);
    }

    pub(crate) fn record_empty_folder(&mut self, raw_path: &str) {
        let path = FolderPath::normalize(raw_path);
        tracing::debug!(%path, "module without cases");
        self.empty_folder_paths.push(path);
    }
}

/// Walks sibling topics below a module whose raw path is `parent_path`.
///
/// Case markers become cases in `parent_path`; every other topic is a module
/// that extends the path. Leaf modules are recorded as empty folders.
pub(crate) fn walk_folder(
    session: &mut ImportSession<'_, '_>,
    nodes: &[OutlineNode],
    parent_path: &str,
    depth: usize,
) -> Result<(), ImportError> {
    if depth > MAX_WALK_DEPTH {
        return Err(ImportError::TooDeep {
            path: FolderPath::normalize(parent_path),
            depth,
        });
    }

    for node in nodes {
        if session.patterns.is_case_marker(node.title()) {
            session.import_case(node, parent_path)?;
            continue;
        }

        session.check_module_title(node, Some(parent_path));
        let path = join_raw(parent_path, node.title());
        if node.has_children() {
            walk_folder(session, node.children(), &path, depth + 1)?;
        } else {
            session.record_empty_folder(&path);
        }
    }

    Ok(())
}
