// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use casemap::config::ImportConfig;
use casemap::format::parse_text_outline;
use casemap::import::{CaseDefaults, Importer};
use casemap::model::ProjectId;
use casemap::store::NoExistingCases;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

mod fixtures;
mod settings;

// Group names (`import.sheets`, `format.parse_text`) and case ids are kept
// stable so results stay comparable across refactors.
fn benches_import(c: &mut Criterion) {
    let importer = Importer::new(
        ImportConfig::default(),
        CaseDefaults {
            project_id: ProjectId::new("bench").expect("project id"),
            maintainer: None,
        },
    )
    .expect("default config");
    let cases = [
        fixtures::Case::Small,
        fixtures::Case::MediumWide,
        fixtures::Case::LargeDeep,
    ];

    {
        let mut group = c.benchmark_group("import.sheets");

        for case in cases {
            let sheets = fixtures::sheets(case);
            group.throughput(Throughput::Elements(fixtures::node_count(&sheets)));
            group.bench_function(case.id(), |b| {
                b.iter(|| {
                    let mut known = HashSet::new();
                    let outcome = importer.import_sheets(
                        black_box(&sheets),
                        &mut known,
                        &NoExistingCases,
                    );
                    black_box(fixtures::checksum_cases(black_box(&outcome.new_cases)))
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("format.parse_text");

        for case in cases {
            let sheets = fixtures::sheets(case);
            let text = fixtures::text_outline(&sheets);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let parsed = parse_text_outline(black_box(&text)).expect("parse_text_outline");
                    black_box(fixtures::node_count(&parsed))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = settings::criterion();
    targets = benches_import
}
criterion_main!(benches);
