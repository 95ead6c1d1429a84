//! Per-call formatting options.

use serde::{Deserialize, Serialize};

/// Indentation settings supplied by the host for a single formatting call.
///
/// Mirrors the editor's `insertSpaces` / `tabSize` pair: with `use_spaces` the indent
/// unit is `indent_size` spaces, otherwise a single tab and `indent_size` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingOptions {
    pub use_spaces: bool,
    pub indent_size: usize,
}

impl FormattingOptions {
    pub fn spaces(indent_size: usize) -> Self {
        Self {
            use_spaces: true,
            indent_size,
        }
    }

    pub fn tabs() -> Self {
        Self {
            use_spaces: false,
            indent_size: 4,
        }
    }

    /// The string written once per depth level.
    pub fn indent_unit(&self) -> String {
        if self.use_spaces {
            " ".repeat(self.indent_size)
        } else {
            "\t".to_string()
        }
    }
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self::spaces(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit_spaces() {
        assert_eq!(FormattingOptions::spaces(2).indent_unit(), "  ");
        assert_eq!(FormattingOptions::spaces(0).indent_unit(), "");
    }

    #[test]
    fn test_indent_unit_tabs_ignores_size() {
        let options = FormattingOptions {
            use_spaces: false,
            indent_size: 8,
        };
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn test_default_is_four_spaces() {
        assert_eq!(FormattingOptions::default().indent_unit(), "    ");
    }
}
