//! Fallback runner: a formatting call either succeeds or leaves the input untouched.

use crate::error::FormattingFailure;
use std::panic::{self, AssertUnwindSafe};

/// Run `stage`, returning `source` unchanged if it fails or panics.
///
/// `label` names the dialect in the log line.
pub fn recover<F>(label: &str, source: &str, stage: F) -> String
where
    F: FnOnce() -> Result<String, FormattingFailure>,
{
    match catch(stage) {
        Ok(formatted) => formatted,
        Err(failure) => {
            tracing::warn!(dialect = label, error = %failure, "formatting failed, keeping input");
            source.to_string()
        }
    }
}

/// Run `stage`, converting a panic into [`FormattingFailure::Panicked`].
pub fn catch<F>(stage: F) -> Result<String, FormattingFailure>
where
    F: FnOnce() -> Result<String, FormattingFailure>,
{
    match panic::catch_unwind(AssertUnwindSafe(stage)) {
        Ok(result) => result,
        Err(payload) => {
            let message = if let Some(text) = payload.downcast_ref::<&str>() {
                (*text).to_string()
            } else if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else {
                "unknown panic".to_string()
            };
            Err(FormattingFailure::Panicked(message))
        }
    }
}

/// Formatting only moves whitespace around: every other character of `source` must
/// appear in `formatted`, in order, and nothing else may be added.
pub fn verify_content(source: &str, formatted: &str) -> Result<(), FormattingFailure> {
    let mut expected = source.chars().filter(|c| !c.is_whitespace());
    let mut actual = formatted.chars().filter(|c| !c.is_whitespace());
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Ok(()),
            (Some(a), Some(b)) if a == b => continue,
            _ => return Err(FormattingFailure::ContentMismatch),
        }
    }
}
