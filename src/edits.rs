//! Document and range formatting expressed as byte-offset replacements.
//!
//! Hosts apply the returned spans over the original text. The whole-document variant
//! yields a single replacement covering the full source; the range variant yields a
//! replacement for the requested span only. Both yield nothing when the text is
//! already formatted.

use crate::dialect::Dialect;
use crate::options::FormattingOptions;
use std::ops::Range;

/// Text edit expressed as byte offsets over the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditSpan {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Produce formatting edits for the entire document.
pub fn format_document(
    dialect: Dialect,
    source: &str,
    options: &FormattingOptions,
) -> Vec<TextEditSpan> {
    let formatted = dialect.format(source, options);
    if formatted == source {
        return Vec::new();
    }
    vec![TextEditSpan {
        start: 0,
        end: source.len(),
        new_text: formatted,
    }]
}

/// Produce formatting edits limited to the provided byte range.
///
/// The range is clamped to the source and widened to the nearest char boundaries.
pub fn format_range(
    dialect: Dialect,
    source: &str,
    range: Range<usize>,
    options: &FormattingOptions,
) -> Vec<TextEditSpan> {
    let span = clamp(source, range);
    let text = &source[span.clone()];
    if text.is_empty() {
        return Vec::new();
    }

    let formatted = dialect.format_range(text, options);
    if formatted == text {
        return Vec::new();
    }
    vec![TextEditSpan {
        start: span.start,
        end: span.end,
        new_text: formatted,
    }]
}

/// Apply non-overlapping edits to `source`.
pub fn apply_edits(source: &str, edits: &[TextEditSpan]) -> String {
    let mut ordered: Vec<&TextEditSpan> = edits.iter().collect();
    ordered.sort_by_key(|edit| edit.start);

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in ordered {
        if edit.start < cursor {
            continue;
        }
        output.push_str(&source[cursor..edit.start]);
        output.push_str(&edit.new_text);
        cursor = edit.end;
    }
    output.push_str(&source[cursor..]);
    output
}

fn clamp(source: &str, range: Range<usize>) -> Range<usize> {
    let mut start = range.start.min(source.len());
    let mut end = range.end.min(source.len()).max(start);
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    while !source.is_char_boundary(end) {
        end += 1;
    }
    start..end
}
