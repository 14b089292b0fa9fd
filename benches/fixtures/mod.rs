// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic outline documents for the import benchmarks (no RNG).

use casemap::model::{CaseRecord, OutlineNode, OutlineSheet};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumWide,
    LargeDeep,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumWide => "medium_wide",
            Self::LargeDeep => "large_deep",
        }
    }

    fn shape(self) -> (usize, usize, usize) {
        // (modules per level, nesting levels, cases per leaf module)
        match self {
            Self::Small => (3, 2, 4),
            Self::MediumWide => (12, 2, 10),
            Self::LargeDeep => (4, 5, 6),
        }
    }
}

fn case_node(module: &str, idx: usize) -> OutlineNode {
    let priority = idx % 4;
    let category = ["功能测试", "performance", "api"][idx % 3];
    let mut children = vec![OutlineNode::new(format!("pc: {module} seeded"))];
    for step in 0..(idx % 5 + 1) {
        children.push(OutlineNode::with_children(
            format!("step {step} of case {idx}"),
            vec![OutlineNode::new(format!("result {step}"))],
        ));
    }
    if idx % 2 == 0 {
        children.push(OutlineNode::new("rc: generated"));
    }
    OutlineNode::with_children(
        format!("tc-P{priority}-{category}:{module} case {idx}"),
        children,
    )
}

fn module(name: String, level: usize, shape: (usize, usize, usize)) -> OutlineNode {
    let (width, levels, cases) = shape;
    let children = if level + 1 >= levels {
        (0..cases).map(|idx| case_node(&name, idx)).collect()
    } else {
        (0..width)
            .map(|idx| module(format!("{name}.{idx}"), level + 1, shape))
            .collect()
    };
    OutlineNode::with_children(name, children)
}

pub fn sheets(case: Case) -> Vec<OutlineSheet> {
    let shape = case.shape();
    let top_level = (0..shape.0).map(|idx| module(format!("m{idx}"), 0, shape)).collect();
    vec![OutlineSheet::new(OutlineNode::with_children("Central Topic", top_level))]
}

/// Renders sheets as an indented text outline.
pub fn text_outline(sheets: &[OutlineSheet]) -> String {
    fn write_node(out: &mut String, node: &OutlineNode, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.title());
        out.push('\n');
        for child in node.children() {
            write_node(out, child, depth + 1);
        }
    }

    let mut out = String::new();
    for root in sheets.iter().filter_map(OutlineSheet::root) {
        write_node(&mut out, root, 0);
    }
    out
}

pub fn node_count(sheets: &[OutlineSheet]) -> u64 {
    sheets
        .iter()
        .filter_map(OutlineSheet::root)
        .map(|root| root.node_count() as u64)
        .sum()
}

pub fn checksum_cases(cases: &[CaseRecord]) -> u64 {
    cases.iter().fold(0u64, |acc, case| {
        acc.wrapping_mul(31)
            .wrapping_add(case.name.len() as u64)
            .wrapping_add(case.steps.len() as u64)
    })
}
