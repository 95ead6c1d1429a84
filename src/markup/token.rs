//! Markup tokens and their classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::Range;

/// `/>` with optional whitespace before the closing bracket
static SELF_CLOSING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\s*>$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum MarkupKind {
    OpeningTag,
    ClosingTag,
    SelfClosingTag,
    Comment,
    Declaration,
    TextContent,
}

impl MarkupKind {
    /// Classify trimmed token text. First match wins.
    pub fn classify(text: &str) -> Self {
        if text.starts_with("<!--") {
            MarkupKind::Comment
        } else if text.starts_with("<?") {
            MarkupKind::Declaration
        } else if text.starts_with("</") {
            MarkupKind::ClosingTag
        } else if text.starts_with('<') {
            if SELF_CLOSING_TAG.is_match(text) {
                MarkupKind::SelfClosingTag
            } else {
                MarkupKind::OpeningTag
            }
        } else {
            MarkupKind::TextContent
        }
    }
}

/// A run of the normalized source. The kind is derived from the text when consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

impl<'a> Token<'a> {
    pub fn new(source: &'a str, span: Range<usize>) -> Self {
        Self {
            text: &source[span.clone()],
            span,
        }
    }

    pub fn kind(&self) -> MarkupKind {
        MarkupKind::classify(self.text.trim())
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("text", self.text.trim())?;
        state.serialize_field("start", &self.span.start)?;
        state.serialize_field("end", &self.span.end)?;
        state.end()
    }
}
