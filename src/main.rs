// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Casemap CLI entrypoint.
//!
//! Imports one outline file into a project and prints the outcome. With
//! `--commit` a clean outcome is written to the JSON case store.

use std::error::Error;
use std::path::{Path, PathBuf};

use casemap::config::ImportConfig;
use casemap::format::OutlineFormat;
use casemap::import::{CaseDefaults, ImportOutcome, Importer};
use casemap::model::{ProjectId, UserId};
use casemap::report;
use casemap::store::{commit_outcome, CaseStoreFile, MemoryCaseStore};

const DEFAULT_STORE_FILE: &str = "casemap-store.json";
const EXIT_DIAGNOSTICS: i32 = 3;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <outline-file> --project <id> [--maintainer <id>] [--store <file>] [--config <file>] [--format xmind|text] [--json] [--commit]\n\n<outline-file> is an XMind content.json (.json) or an indented text outline (.txt, .outline, .md).\n--format overrides detection by extension.\n--store selects the JSON case store (default {DEFAULT_STORE_FILE}); it seeds known names and existing cases.\n--commit writes new and updated cases to the store, only when the import has no diagnostics.\n--json prints the outcome as JSON instead of text.\n\nExit codes: 0 clean, 1 runtime error, 2 usage error, 3 import diagnostics.\nSet RUST_LOG (e.g. RUST_LOG=casemap=debug) for logs on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    outline: Option<PathBuf>,
    project: Option<String>,
    maintainer: Option<String>,
    store: Option<PathBuf>,
    config: Option<PathBuf>,
    format: Option<OutlineFormat>,
    json: bool,
    commit: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--project" => {
                if options.project.is_some() {
                    return Err(());
                }
                options.project = Some(args.next().ok_or(())?);
            }
            "--maintainer" => {
                if options.maintainer.is_some() {
                    return Err(());
                }
                options.maintainer = Some(args.next().ok_or(())?);
            }
            "--store" => {
                if options.store.is_some() {
                    return Err(());
                }
                options.store = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.format = Some(raw.parse().map_err(|_| ())?);
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--commit" => {
                if options.commit {
                    return Err(());
                }
                options.commit = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.outline.is_some() {
                    return Err(());
                }
                options.outline = Some(PathBuf::from(arg));
            }
        }
    }

    if options.outline.is_none() || options.project.is_none() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_format(options: &CliOptions, outline: &Path) -> Result<OutlineFormat, String> {
    if let Some(format) = options.format {
        return Ok(format);
    }
    OutlineFormat::from_path(outline).ok_or_else(|| {
        format!(
            "cannot detect outline format of {} (use --format xmind|text)",
            outline.display()
        )
    })
}

fn print_outcome(outcome: &ImportOutcome, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        print!("{}", report::render_json(outcome)?);
    } else {
        print!("{}", report::render_text(outcome));
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<i32, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "casemap".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let config = match &options.config {
            Some(path) => ImportConfig::load(path)?,
            None => ImportConfig::default(),
        };
        let defaults = CaseDefaults {
            project_id: ProjectId::new(options.project.clone().unwrap_or_default())?,
            maintainer: options.maintainer.clone().map(UserId::new).transpose()?,
        };

        let outline = options.outline.clone().unwrap_or_default();
        let format = resolve_format(&options, &outline)?;
        let input = std::fs::read_to_string(&outline)
            .map_err(|err| format!("cannot read {}: {err}", outline.display()))?;

        let store_file =
            CaseStoreFile::new(options.store.clone().unwrap_or_else(|| DEFAULT_STORE_FILE.into()));
        let mut store: MemoryCaseStore = store_file.load()?;
        let mut known = store.known_names(&defaults.project_id);
        tracing::debug!(
            store = %store_file.path().display(),
            cases = store.len(),
            known_names = known.len(),
            "loaded case store"
        );

        let importer = Importer::new(config, defaults)?;
        let outcome = importer.import_str(format, &input, &mut known, &store);
        print_outcome(&outcome, options.json)?;

        if !outcome.is_clean() {
            if options.commit {
                eprintln!("casemap: not committing an import with diagnostics");
            }
            return Ok(EXIT_DIAGNOSTICS);
        }

        if options.commit {
            let summary = commit_outcome(&outcome, &mut store)?;
            store_file.save(&store)?;
            if !options.json {
                print!("{}", report::render_commit(&summary));
            }
        }

        Ok(0)
    })();

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("casemap: {err}");
            std::process::exit(1);
        }
    }
}
