// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One topic of a mind-map outline.
///
/// The tree is immutable input: the importer walks it by reference and never
/// stores back-pointers on the nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineNode {
    title: String,
    children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(title: impl Into<String>, children: Vec<OutlineNode>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[OutlineNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<OutlineNode> {
        &mut self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Title of the first child, used as the expected result of a step.
    pub fn first_child_title(&self) -> Option<&str> {
        self.children.first().map(OutlineNode::title)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }
}

/// One document root (an XMind "sheet"): a central topic whose children are
/// the top-level modules of the import.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineSheet {
    title: Option<String>,
    root: Option<OutlineNode>,
}

impl OutlineSheet {
    pub fn new(root: OutlineNode) -> Self {
        Self {
            title: None,
            root: Some(root),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn root(&self) -> Option<&OutlineNode> {
        self.root.as_ref()
    }

    /// The nodes the importer treats as top-level modules.
    pub fn top_level(&self) -> &[OutlineNode] {
        self.root.as_ref().map(OutlineNode::children).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{OutlineNode, OutlineSheet};

    #[test]
    fn counts_nodes_in_subtree() {
        let tree = OutlineNode::with_children(
            "root",
            vec![
                OutlineNode::with_children("a", vec![OutlineNode::new("a1")]),
                OutlineNode::new("b"),
            ],
        );
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.first_child_title(), Some("a"));
    }

    #[test]
    fn empty_sheet_has_no_top_level_nodes() {
        assert!(OutlineSheet::empty().top_level().is_empty());
    }
}
