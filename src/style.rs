//! Style-sheet (`.uss`) formatter
//!
//!     Source is trimmed and CRLF-normalized, cut into selector lines, declarations,
//!     braces and comments by the [tokenizer], and re-emitted one token per line by the
//!     [indenter]. Block contents are indented one unit per nesting level, and a blank
//!     line follows every closing brace. Strings and comments pass through verbatim.
//!
//!     Declarations are not parsed: `color:red;` stays `color:red;`. The only rewrite
//!     inside a line is the spacing before a block's `{`.

pub mod indenter;
pub mod lexeme;
pub mod token;
pub mod tokenizer;

pub use token::{StyleKind, Token};
pub use tokenizer::tokenize;

use crate::emit::normalize_source;
use crate::error::FormattingFailure;
use crate::guard;
use crate::options::FormattingOptions;

/// Format a whole style sheet. Returns `text` unchanged on internal failure.
pub fn format_style_sheet(text: &str, options: &FormattingOptions) -> String {
    guard::recover("style", text, || try_format_style_sheet(text, options))
}

/// Format the text of a selected range.
///
/// Depth starts at 0 whatever the range's nesting in the surrounding document.
pub fn format_style_sheet_range(range_text: &str, options: &FormattingOptions) -> String {
    format_style_sheet(range_text, options)
}

/// Format without the fallback, surfacing the failure.
pub fn try_format_style_sheet(
    text: &str,
    options: &FormattingOptions,
) -> Result<String, FormattingFailure> {
    let source = normalize_source(text);
    let tokens = tokenize(&source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized style sheet");

    let formatted = indenter::indent(&tokens, options);
    guard::verify_content(&source, &formatted)?;
    Ok(formatted)
}
