//! Markup (`.uxml`) formatter
//!
//!     Source is trimmed and CRLF-normalized, cut into tags, comments, declarations and
//!     text runs by the [tokenizer], then re-emitted one token per line by the
//!     [indenter]: children of an opening tag are indented one unit, closing tags
//!     dedent before they are written, declarations (`<?...?>`) always sit at column 0.
//!
//!     Tags are not validated or matched by name. A stray closing tag dedents (never
//!     below 0) and an unclosed opening tag simply leaves its siblings indented.

pub mod indenter;
pub mod lexeme;
pub mod token;
pub mod tokenizer;

pub use token::{MarkupKind, Token};
pub use tokenizer::tokenize;

use crate::emit::normalize_source;
use crate::error::FormattingFailure;
use crate::guard;
use crate::options::FormattingOptions;

/// Format a whole markup document. Returns `text` unchanged on internal failure.
pub fn format_markup(text: &str, options: &FormattingOptions) -> String {
    guard::recover("markup", text, || try_format_markup(text, options))
}

/// Format the text of a selected range.
///
/// Depth starts at 0 whatever the range's nesting in the surrounding document.
pub fn format_markup_range(range_text: &str, options: &FormattingOptions) -> String {
    format_markup(range_text, options)
}

/// Format without the fallback, surfacing the failure.
pub fn try_format_markup(text: &str, options: &FormattingOptions) -> Result<String, FormattingFailure> {
    let source = normalize_source(text);
    let tokens = tokenize(&source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized markup");

    let formatted = indenter::indent(&tokens, options);
    guard::verify_content(&source, &formatted)?;
    Ok(formatted)
}
