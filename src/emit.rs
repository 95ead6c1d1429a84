//! Line writer and output cleanup shared by both indenters.

use crate::options::FormattingOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// Three or more newlines collapse to one blank line
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Trim the source and normalize CRLF line endings before scanning.
pub fn normalize_source(source: &str) -> String {
    source.trim().replace("\r\n", "\n")
}

/// Accumulates indented lines while tracking the nesting depth.
///
/// Depth is a plain counter: `indent` after an opening construct, `dedent` before a
/// closing one. Dedenting at depth 0 is a no-op, so excess closers never underflow.
pub struct LineWriter {
    indent_unit: String,
    depth: usize,
    output: String,
}

impl LineWriter {
    pub fn new(options: &FormattingOptions) -> Self {
        Self {
            indent_unit: options.indent_unit(),
            depth: 0,
            output: String::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Write `text` at the current depth followed by a newline.
    pub fn write_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write `text` at column 0 regardless of depth.
    pub fn write_line_unindented(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Apply the post-pass cleanup and return the formatted text.
    pub fn finish(self) -> String {
        cleanup(&self.output)
    }
}

/// At most one blank line in a row, no surrounding whitespace, exactly one final newline.
pub fn cleanup(text: &str) -> String {
    let collapsed = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let mut result = collapsed.trim().to_string();
    result.push('\n');
    result
}
