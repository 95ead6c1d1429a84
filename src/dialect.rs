//! Dialect dispatch at the host boundary.
//!
//! The two pipelines share no abstraction; [Dialect] just picks which pair of
//! functions to call.

use crate::error::FormattingFailure;
use crate::options::FormattingOptions;
use crate::{markup, style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Markup,
    Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    #[error("unknown dialect `{0}` (expected markup or style)")]
    Unknown(String),
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Markup, Dialect::Style];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Markup => "markup",
            Dialect::Style => "style",
        }
    }

    /// Built-in extension mapping, case-insensitive, without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "uxml" | "xml" => Some(Dialect::Markup),
            "uss" | "css" => Some(Dialect::Style),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn format(&self, text: &str, options: &FormattingOptions) -> String {
        match self {
            Dialect::Markup => markup::format_markup(text, options),
            Dialect::Style => style::format_style_sheet(text, options),
        }
    }

    pub fn format_range(&self, range_text: &str, options: &FormattingOptions) -> String {
        match self {
            Dialect::Markup => markup::format_markup_range(range_text, options),
            Dialect::Style => style::format_style_sheet_range(range_text, options),
        }
    }

    pub fn try_format(
        &self,
        text: &str,
        options: &FormattingOptions,
    ) -> Result<String, FormattingFailure> {
        match self {
            Dialect::Markup => markup::try_format_markup(text, options),
            Dialect::Style => style::try_format_style_sheet(text, options),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markup" | "uxml" | "xml" => Ok(Dialect::Markup),
            "style" | "uss" | "css" => Ok(Dialect::Style),
            _ => Err(DialectError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Dialect::from_path("ui/Main.uxml"), Some(Dialect::Markup));
        assert_eq!(Dialect::from_path("ui/Main.USS"), Some(Dialect::Style));
        assert_eq!(Dialect::from_path("ui/readme.md"), None);
        assert_eq!(Dialect::from_path("Makefile"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("markup".parse::<Dialect>(), Ok(Dialect::Markup));
        assert_eq!("CSS".parse::<Dialect>(), Ok(Dialect::Style));
        assert_eq!(
            "json".parse::<Dialect>(),
            Err(DialectError::Unknown("json".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>(), Ok(dialect));
        }
    }

    #[test]
    fn test_dispatch() {
        let options = FormattingOptions::spaces(2);
        assert_eq!(Dialect::Markup.format("<a><b/></a>", &options), "<a>\n  <b/>\n</a>\n");
        assert_eq!(Dialect::Style.format(".a{x:1;}", &options), ".a {\n  x:1;\n}\n");
        assert_eq!(
            Dialect::Style.try_format(".a{}", &options),
            Ok(".a {\n}\n".to_string())
        );
        assert_eq!(Dialect::Markup.format_range("  <c/>  ", &options), "<c/>\n");
    }
}
