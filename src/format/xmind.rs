// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! XMind "zen" `content.json` decoding.
//!
//! An `.xmind` file is a zip archive; unpacking it is left to the caller. This
//! module only turns the JSON sheet list into [`OutlineSheet`]s:
//!
//! ```json
//! [{ "title": "Sheet 1",
//!    "rootTopic": { "title": "Product",
//!                   "children": { "attached": [ { "title": "Login" } ] } } }]
//! ```
//!
//! Detached (floating) topics, markers, notes and styling are ignored.

use std::fmt;

use serde::Deserialize;

use crate::model::{OutlineNode, OutlineSheet};

#[derive(Debug)]
pub enum XmindParseError {
    Json(serde_json::Error),
}

impl fmt::Display for XmindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid XMind content.json: {err}"),
        }
    }
}

impl std::error::Error for XmindParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    root_topic: Option<TopicJson>,
}

#[derive(Debug, Deserialize)]
struct TopicJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    children: Option<ChildrenJson>,
}

#[derive(Debug, Deserialize)]
struct ChildrenJson {
    #[serde(default)]
    attached: Vec<TopicJson>,
}

impl From<TopicJson> for OutlineNode {
    fn from(topic: TopicJson) -> Self {
        let children = topic
            .children
            .map(|children| children.attached.into_iter().map(OutlineNode::from).collect())
            .unwrap_or_default();
        OutlineNode::with_children(topic.title.unwrap_or_default(), children)
    }
}

pub fn parse_content_json(input: &str) -> Result<Vec<OutlineSheet>, XmindParseError> {
    let sheets: Vec<SheetJson> = serde_json::from_str(input).map_err(XmindParseError::Json)?;
    Ok(sheets
        .into_iter()
        .map(|sheet| {
            let outline = match sheet.root_topic {
                Some(root) => OutlineSheet::new(root.into()),
                None => OutlineSheet::empty(),
            };
            match sheet.title {
                Some(title) => outline.with_title(title),
                None => outline,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{parse_content_json, XmindParseError};

    #[test]
    fn decodes_nested_attached_topics() {
        let input = r#"[
          {
            "id": "s1",
            "class": "sheet",
            "title": "Sheet 1",
            "rootTopic": {
              "id": "root",
              "title": "Product",
              "structureClass": "org.xmind.ui.logic.right",
              "children": {
                "attached": [
                  { "title": "Login", "children": { "attached": [ { "title": "tc:Valid password" } ] } },
                  { "title": "Search" }
                ],
                "detached": [ { "title": "floating" } ]
              }
            }
          }
        ]"#;

        let sheets = parse_content_json(input).expect("parse");
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].title(), Some("Sheet 1"));
        let top = sheets[0].top_level();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].title(), "Login");
        assert_eq!(top[0].children()[0].title(), "tc:Valid password");
        assert!(top[1].children().is_empty());
    }

    #[test]
    fn tolerates_missing_root_topic_and_titles() {
        let sheets = parse_content_json(r#"[{ "title": "blank" }, { "rootTopic": {} }]"#)
            .expect("parse");
        assert_eq!(sheets.len(), 2);
        assert!(sheets[0].root().is_none());
        assert_eq!(sheets[1].root().map(|root| root.title()), Some(""));
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_content_json(r#"{"rootTopic": {}}"#).unwrap_err();
        assert!(matches!(err, XmindParseError::Json(_)));
        assert!(err.to_string().contains("content.json"));
    }
}
