// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::{Regex, RegexBuilder};

use crate::config::TagConfig;

/// Precompiled leading-tag matchers for one import session.
///
/// A tag matches at the start of a title (leading whitespace allowed),
/// case-insensitively, when followed by `:`, `：`, or a word boundary. So
/// `tc:Login`, `TC：Login`, `tc-P1:Login` and `tc Login` are case markers while
/// `tcp timeout` and `Fetch` are not.
#[derive(Debug, Clone)]
pub struct TagPatterns {
    case: Regex,
    precondition: Regex,
    remark: Regex,
}

fn leading_tag(tag: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"^\s*{}(?:\s*[:：]|\b)", regex::escape(tag)))
        .case_insensitive(true)
        .build()
}

fn strip<'t>(regex: &Regex, title: &'t str) -> Option<&'t str> {
    regex.find(title).map(|m| title[m.end()..].trim())
}

impl TagPatterns {
    pub fn new(tags: &TagConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            case: leading_tag(&tags.case)?,
            precondition: leading_tag(&tags.precondition)?,
            remark: leading_tag(&tags.remark)?,
        })
    }

    pub fn is_case_marker(&self, title: &str) -> bool {
        self.case.is_match(title)
    }

    pub fn strip_case<'t>(&self, title: &'t str) -> Option<&'t str> {
        strip(&self.case, title)
    }

    pub fn strip_precondition<'t>(&self, title: &'t str) -> Option<&'t str> {
        strip(&self.precondition, title)
    }

    pub fn strip_remark<'t>(&self, title: &'t str) -> Option<&'t str> {
        strip(&self.remark, title)
    }
}
