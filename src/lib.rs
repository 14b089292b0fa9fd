// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Casemap: mind-map outlines to validated test case records.
//!
//! An outline document (XMind `content.json` or an indented text outline) is
//! walked topic by topic. Topics tagged as cases become [`model::CaseRecord`]s,
//! everything else becomes a module path. [`import::Importer`] validates the
//! result and [`store::commit_outcome`] persists a clean outcome.

pub mod config;
pub mod format;
pub mod import;
pub mod model;
pub mod report;
pub mod store;
