// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Indented plain-text outlines.
//!
//! One topic per line; nesting is expressed with leading spaces. Every line
//! without indentation starts a new sheet whose root is that line. An optional
//! list bullet (`- `, `* `, `+ `) in front of a title is dropped.
//!
//! ```text
//! Product
//!   Login
//!     tc-P1:Valid password
//!       open login page
//!         page shown
//! ```

use std::fmt;

use crate::model::{OutlineNode, OutlineSheet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutlineParseError {
    TabIndent { line_no: usize },
    UnexpectedIndent { line_no: usize },
    InconsistentDedent { line_no: usize, indent: usize },
}

impl fmt::Display for TextOutlineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TabIndent { line_no } => {
                write!(f, "tab indentation on line {line_no} (indent with spaces)")
            }
            Self::UnexpectedIndent { line_no } => write!(
                f,
                "unexpected indentation on line {line_no}: the first topic must not be indented"
            ),
            Self::InconsistentDedent { line_no, indent } => write!(
                f,
                "inconsistent dedent on line {line_no}: indent {indent} matches no enclosing level"
            ),
        }
    }
}

impl std::error::Error for TextOutlineParseError {}

struct OpenNode {
    indent: usize,
    node: OutlineNode,
}

fn close_top(stack: &mut Vec<OpenNode>, sheets: &mut Vec<OutlineSheet>) {
    let Some(open) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.node.children_mut().push(open.node),
        None => sheets.push(OutlineSheet::new(open.node)),
    }
}

fn strip_bullet(text: &str) -> &str {
    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = text.strip_prefix(bullet) {
            return rest;
        }
    }
    text
}

pub fn parse_text_outline(input: &str) -> Result<Vec<OutlineSheet>, TextOutlineParseError> {
    let mut sheets = Vec::new();
    let mut stack = Vec::<OpenNode>::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        let body = raw_line.trim_start();
        let leading = &raw_line[..raw_line.len() - body.len()];
        if leading.contains('\t') {
            return Err(TextOutlineParseError::TabIndent { line_no });
        }
        let indent = leading.chars().count();
        let title = strip_bullet(body).trim_end();

        let mut closed_deeper = false;
        loop {
            match stack.last().map(|open| open.indent) {
                Some(top) if top > indent => {
                    closed_deeper = true;
                    close_top(&mut stack, &mut sheets);
                }
                Some(top) if top == indent => {
                    close_top(&mut stack, &mut sheets);
                    break;
                }
                Some(_) if closed_deeper => {
                    return Err(TextOutlineParseError::InconsistentDedent { line_no, indent });
                }
                Some(_) => break,
                None if indent > 0 => {
                    return Err(TextOutlineParseError::UnexpectedIndent { line_no });
                }
                None => break,
            }
        }

        stack.push(OpenNode {
            indent,
            node: OutlineNode::new(title),
        });
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut sheets);
    }

    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::{parse_text_outline, TextOutlineParseError};

    #[test]
    fn builds_nested_tree() {
        let input = "Product\n  Login\n    tc:Valid\n      step\n        result\n  Search\n";
        let sheets = parse_text_outline(input).expect("parse");
        assert_eq!(sheets.len(), 1);

        let root = sheets[0].root().expect("root");
        assert_eq!(root.title(), "Product");
        let top = sheets[0].top_level();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].title(), "Login");
        assert_eq!(top[0].children()[0].title(), "tc:Valid");
        assert_eq!(top[0].children()[0].children()[0].first_child_title(), Some("result"));
        assert_eq!(top[1].title(), "Search");
    }

    #[test]
    fn unindented_lines_start_new_sheets() {
        let sheets = parse_text_outline("One\n  a\nTwo\n  b\n").expect("parse");
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[1].top_level()[0].title(), "b");
    }

    #[test]
    fn strips_bullets_and_skips_blank_lines() {
        let sheets = parse_text_outline("- Root\n\n  * Module\n    + tc:Case\n").expect("parse");
        let module = &sheets[0].top_level()[0];
        assert_eq!(module.title(), "Module");
        assert_eq!(module.children()[0].title(), "tc:Case");
    }

    #[test]
    fn rejects_tabs() {
        let err = parse_text_outline("Root\n\tchild\n").unwrap_err();
        assert_eq!(err, TextOutlineParseError::TabIndent { line_no: 2 });
    }

    #[test]
    fn rejects_indented_first_line() {
        let err = parse_text_outline("  Root\n").unwrap_err();
        assert_eq!(err, TextOutlineParseError::UnexpectedIndent { line_no: 1 });
    }

    #[test]
    fn rejects_dedent_to_unknown_level() {
        let err = parse_text_outline("Root\n    a\n  b\n").unwrap_err();
        assert_eq!(
            err,
            TextOutlineParseError::InconsistentDedent { line_no: 3, indent: 2 }
        );
    }
}
