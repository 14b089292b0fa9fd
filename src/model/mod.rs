// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: outline input, case records, and diagnostics.

pub mod case;
pub mod diagnostic;
pub mod folder_path;
pub mod ids;
pub mod outline;

pub use case::{CaseKey, CaseProjection, CaseRecord, CaseStep, Category, Method, Priority};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use folder_path::{join_raw, FolderPath};
pub use ids::{CaseId, Id, IdError, ProjectId, UserId};
pub use outline::{OutlineNode, OutlineSheet};
