// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::tags::TagPatterns;
use crate::model::{CaseStep, OutlineNode};

/// Children of a case topic split into precondition, remark and steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedSteps<'a> {
    pub precondition: Option<String>,
    pub remark: String,
    pub steps: Vec<CaseStep>,
    /// The child topics that became steps, in order.
    pub step_nodes: Vec<&'a OutlineNode>,
}

pub fn extract_steps<'a>(
    children: &'a [OutlineNode],
    patterns: &TagPatterns,
) -> ExtractedSteps<'a> {
    let mut extracted = ExtractedSteps::default();

    for child in children {
        if let Some(precondition) = patterns.strip_precondition(child.title()) {
            extracted.precondition = Some(precondition.to_owned());
        } else if let Some(remark) = patterns.strip_remark(child.title()) {
            extracted.remark.push_str(remark);
            extracted.remark.push('\n');
        } else {
            extracted.step_nodes.push(child);
        }
    }

    extracted.steps = if extracted.step_nodes.is_empty() {
        vec![CaseStep::placeholder()]
    } else {
        extracted
            .step_nodes
            .iter()
            .zip(1u32..)
            .map(|(node, num)| {
                CaseStep::new(num, node.title(), node.first_child_title().map(str::to_owned))
            })
            .collect()
    };

    extracted
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::extract_steps;
    use crate::config::TagConfig;
    use crate::import::tags::TagPatterns;
    use crate::model::{CaseStep, OutlineNode};

    #[fixture]
    fn patterns() -> TagPatterns {
        TagPatterns::new(&TagConfig::default()).expect("default tags compile")
    }

    #[rstest]
    fn no_children_yield_single_placeholder_step(patterns: TagPatterns) {
        let extracted = extract_steps(&[], &patterns);
        assert_eq!(extracted.steps, vec![CaseStep::placeholder()]);
        assert_eq!(extracted.steps[0].num, 1);
        assert_eq!(extracted.steps[0].desc, "");
        assert_eq!(extracted.steps[0].result.as_deref(), Some(""));
        assert!(extracted.step_nodes.is_empty());
        assert_eq!(extracted.precondition, None);
        assert_eq!(extracted.remark, "");
    }

    #[rstest]
    fn separates_precondition_remark_and_steps(patterns: TagPatterns) {
        let children = vec![
            OutlineNode::new("pc: setup"),
            OutlineNode::with_children("step one", vec![OutlineNode::new("result A")]),
            OutlineNode::new("rc: note"),
        ];

        let extracted = extract_steps(&children, &patterns);
        assert_eq!(extracted.precondition.as_deref(), Some("setup"));
        assert_eq!(extracted.remark, "note\n");
        assert_eq!(
            extracted.steps,
            vec![CaseStep::new(1, "step one", Some("result A".to_owned()))]
        );
        assert_eq!(extracted.step_nodes, vec![&children[1]]);
    }

    #[rstest]
    fn last_precondition_wins_and_remarks_accumulate(patterns: TagPatterns) {
        let children = vec![
            OutlineNode::new("pc: first"),
            OutlineNode::new("rc: one"),
            OutlineNode::new("pc: second"),
            OutlineNode::new("rc: two"),
        ];

        let extracted = extract_steps(&children, &patterns);
        assert_eq!(extracted.precondition.as_deref(), Some("second"));
        assert_eq!(extracted.remark, "one\ntwo\n");
        assert_eq!(extracted.steps, vec![CaseStep::placeholder()]);
    }

    #[rstest]
    fn numbers_steps_in_order_and_uses_first_grandchild_only(patterns: TagPatterns) {
        let children = vec![
            OutlineNode::new("open page"),
            OutlineNode::with_children(
                "submit",
                vec![OutlineNode::new("saved"), OutlineNode::new("ignored")],
            ),
            OutlineNode::new("close"),
        ];

        let extracted = extract_steps(&children, &patterns);
        assert_eq!(
            extracted.steps,
            vec![
                CaseStep::new(1, "open page", None),
                CaseStep::new(2, "submit", Some("saved".to_owned())),
                CaseStep::new(3, "close", None),
            ]
        );
    }
}
