// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use casemap::config::ImportConfig;
use casemap::format::OutlineFormat;
use casemap::import::{CaseDefaults, ImportOutcome, ImportStatus, Importer};
use casemap::model::{CaseStep, Category, Priority, ProjectId};
use casemap::store::{commit_outcome, CommitError, MemoryCaseStore, NoExistingCases};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn importer(config: ImportConfig) -> Importer {
    Importer::new(
        config,
        CaseDefaults {
            project_id: ProjectId::new("shop").expect("project id"),
            maintainer: None,
        },
    )
    .expect("valid config")
}

fn import_fixture(importer: &Importer, name: &str) -> ImportOutcome {
    let format = OutlineFormat::from_path(Path::new(name))
        .unwrap_or_else(|| panic!("no outline format for {name}"));
    importer.import_str(format, &read_fixture(name), &mut HashSet::new(), &NoExistingCases)
}

fn diagnostic_pairs(outcome: &ImportOutcome) -> Vec<(String, String)> {
    outcome
        .diagnostics
        .iter()
        .map(|d| (d.message().to_owned(), d.context().to_owned()))
        .collect()
}

#[test]
fn xmind_fixture_imports_cleanly() {
    let outcome = import_fixture(&importer(ImportConfig::default()), "outlines/shop.json");

    assert!(outcome.is_clean(), "{:?}", outcome.diagnostics);
    let names: Vec<(&str, &str)> = outcome
        .new_cases
        .iter()
        .map(|case| (case.folder_path.as_str(), case.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("/Account/Login", "Valid password"),
            ("/Account/Login", "Locked account"),
            ("/Checkout", "Create order"),
        ]
    );
    let empty: Vec<&str> = outcome.empty_folder_paths.iter().map(|p| p.as_str()).collect();
    assert_eq!(empty, vec!["/Account/Profile"]);

    let valid = &outcome.new_cases[0];
    assert_eq!(valid.priority, Priority::P1);
    assert_eq!(valid.category, Some(Category::Functional));
    assert_eq!(valid.precondition.as_deref(), Some("user exists"));
    assert_eq!(valid.remark, "smoke\n");
    assert_eq!(
        valid.steps_json().expect("steps json"),
        r#"[{"num":1,"desc":"open login page","result":"form shown"},{"num":2,"desc":"submit credentials","result":"dashboard shown"}]"#
    );

    let locked = &outcome.new_cases[1];
    assert_eq!(locked.steps, vec![CaseStep::placeholder()]);
    assert_eq!(outcome.new_cases[2].category, Some(Category::Api));
}

#[test]
fn flawed_outline_reports_every_finding() {
    let outcome = import_fixture(&importer(ImportConfig::default()), "outlines/flawed.txt");

    assert_eq!(outcome.status, ImportStatus::Completed);
    assert_eq!(
        diagnostic_pairs(&outcome),
        vec![
            (
                "test case priority is incorrect".to_owned(),
                "/ReportsExport takes under a second".to_owned(),
            ),
            ("test case category is incorrect".to_owned(), "/ReportsSmoke check".to_owned()),
            ("test case name format is incorrect".to_owned(), "tc:".to_owned()),
            (
                "test case already exists in this import".to_owned(),
                "/Reports/Duplicate me".to_owned(),
            ),
            (
                "module name must be at most 30 characters".to_owned(),
                "/This module title is far too long to be accepted".to_owned(),
            ),
        ]
    );
    assert_eq!(outcome.new_cases.len(), 4);
    assert_eq!(outcome.new_cases[0].priority, Priority::Other("P7".to_owned()));
    assert_eq!(outcome.new_cases[1].category, None);
}

#[test]
fn top_level_case_fixture_aborts() {
    let outcome = import_fixture(&importer(ImportConfig::default()), "outlines/top_level_case.txt");

    assert_eq!(outcome.status, ImportStatus::Aborted);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics.as_slice()[0].context(), "tc:Misplaced");
    assert!(outcome.new_cases.is_empty());
}

#[test]
fn config_file_changes_tags_and_limits() {
    let config = ImportConfig::load(fixtures_dir().join("strict.toml")).expect("load config");
    assert_eq!(config.max_segment_chars, 30);

    let outcome = importer(config).import_str(
        OutlineFormat::Text,
        "Root\n  Area\n    Sub\n      case: Quite a long name\n      tc:Not a case\n",
        &mut HashSet::new(),
        &NoExistingCases,
    );

    assert_eq!(
        diagnostic_pairs(&outcome),
        vec![
            (
                "test case name must be at most 10 characters".to_owned(),
                "/Area/SubQuite a long name".to_owned(),
            ),
            ("module depth must not exceed 1 levels".to_owned(), "/Area/Sub".to_owned()),
            (
                "module depth must not exceed 1 levels".to_owned(),
                "/Area/Sub/tc:Not a case".to_owned(),
            ),
        ]
    );
    assert_eq!(outcome.new_cases.len(), 1);
}

#[test]
fn commit_refuses_outcome_with_diagnostics() {
    let outcome = import_fixture(&importer(ImportConfig::default()), "outlines/flawed.txt");
    let mut store = MemoryCaseStore::new();

    let err = commit_outcome(&outcome, &mut store).unwrap_err();

    assert!(matches!(
        err,
        CommitError::Rejected {
            status: ImportStatus::Completed,
            diagnostics: 5
        }
    ));
    assert!(store.is_empty());
}

#[test]
fn committed_cases_become_updates_on_reimport() {
    let importer = importer(ImportConfig::default());
    let mut store = MemoryCaseStore::new();

    let first = import_fixture(&importer, "outlines/shop.json");
    let summary = commit_outcome(&first, &mut store).expect("commit");
    assert_eq!(summary.inserted.len(), 3);

    let mut known = store.known_names(&importer.defaults().project_id);
    let second = importer.import_str(
        OutlineFormat::Xmind,
        &read_fixture("outlines/shop.json"),
        &mut known,
        &store,
    );

    assert!(second.is_clean(), "{:?}", second.diagnostics);
    assert!(second.new_cases.is_empty());
    let ids: Vec<_> = second.update_cases.iter().filter_map(|case| case.id.clone()).collect();
    assert_eq!(ids, summary.inserted);
}
