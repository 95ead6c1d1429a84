//! Style-sheet tokens and their classification.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StyleKind {
    /// A line with no brace or semicolon: a selector continued on the next line, or a
    /// last declaration without its `;`
    Selector,
    /// Selector text together with its `{`
    OpenBrace,
    CloseBrace,
    Declaration,
    Comment,
}

impl StyleKind {
    /// Classify trimmed token text from its leading/trailing characters. First match wins.
    pub fn classify(text: &str) -> Self {
        if text.starts_with("/*") {
            StyleKind::Comment
        } else if text == "}" {
            StyleKind::CloseBrace
        } else if text.ends_with('{') {
            StyleKind::OpenBrace
        } else if text.ends_with(';') {
            StyleKind::Declaration
        } else {
            StyleKind::Selector
        }
    }
}

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

    pub fn kind(&self) -> StyleKind {
        StyleKind::classify(self.text.trim())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(StyleKind::classify(".a {"), StyleKind::OpenBrace);
        assert_eq!(StyleKind::classify("{"), StyleKind::OpenBrace);
        assert_eq!(StyleKind::classify("}"), StyleKind::CloseBrace);
        assert_eq!(StyleKind::classify("color: red;"), StyleKind::Declaration);
        assert_eq!(StyleKind::classify("/* x */"), StyleKind::Comment);
        assert_eq!(StyleKind::classify(".a,"), StyleKind::Selector);
        assert_eq!(StyleKind::classify("color: red"), StyleKind::Selector);
    }

    #[test]
    fn test_comment_wins_over_trailing_brace() {
        assert_eq!(StyleKind::classify("/* open {"), StyleKind::Comment);
        assert_eq!(StyleKind::classify("/* x; */"), StyleKind::Comment);
    }

    #[test]
    fn test_token_serializes_kind() {
        let source = ".a{";
        let json = serde_json::to_value(Token::new(source, 0..3)).unwrap();
        assert_eq!(json["kind"], "OpenBrace");
        assert_eq!(json["start"], 0);
    }
}
