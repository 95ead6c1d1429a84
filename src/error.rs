//! Internal formatting faults.
//!
//! Malformed input is never an error: unterminated tags, strings and comments are
//! formatted as trailing tokens. These variants only describe faults inside the
//! pipeline itself, and the public `format_*` functions turn every one of them into
//! "return the input unchanged".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormattingFailure {
    #[error("unrecognized input at byte {offset}")]
    UnrecognizedInput { offset: usize },
    #[error("formatted output does not preserve the source content")]
    ContentMismatch,
    #[error("formatter panicked: {0}")]
    Panicked(String),
}
