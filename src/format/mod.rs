// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Casemap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casemap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Outline document decoding.
//!
//! Two inputs are understood: XMind `content.json` sheet lists and indented
//! plain-text outlines. Both produce [`OutlineSheet`]s for the importer.

pub mod outline_text;
pub mod xmind;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::model::OutlineSheet;

pub use outline_text::{parse_text_outline, TextOutlineParseError};
pub use xmind::{parse_content_json, XmindParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineFormat {
    Xmind,
    Text,
}

impl OutlineFormat {
    /// Picks a format from a file extension (`.json` is XMind content).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Xmind),
            "txt" | "outline" | "md" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xmind => "xmind",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutlineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutlineFormatError {
    value: String,
}

impl fmt::Display for ParseOutlineFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown outline format: {} (expected xmind or text)", self.value)
    }
}

impl std::error::Error for ParseOutlineFormatError {}

impl FromStr for OutlineFormat {
    type Err = ParseOutlineFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xmind" => Ok(Self::Xmind),
            "text" => Ok(Self::Text),
            other => Err(ParseOutlineFormatError {
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug)]
pub enum OutlineParseError {
    Xmind(XmindParseError),
    Text(TextOutlineParseError),
}

impl fmt::Display for OutlineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xmind(err) => write!(f, "{err}"),
            Self::Text(err) => write!(f, "invalid text outline: {err}"),
        }
    }
}

impl std::error::Error for OutlineParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xmind(err) => Some(err),
            Self::Text(err) => Some(err),
        }
    }
}

pub fn parse_outline(
    format: OutlineFormat,
    input: &str,
) -> Result<Vec<OutlineSheet>, OutlineParseError> {
    match format {
        OutlineFormat::Xmind => parse_content_json(input).map_err(OutlineParseError::Xmind),
        OutlineFormat::Text => parse_text_outline(input).map_err(OutlineParseError::Text),
    }
}
