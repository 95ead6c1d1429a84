use super::token::{MarkupKind, Token};
use crate::emit::LineWriter;
use crate::options::FormattingOptions;

/// Write one line per token, indenting children of opening tags.
pub fn indent(tokens: &[Token<'_>], options: &FormattingOptions) -> String {
    let mut writer = LineWriter::new(options);

    for token in tokens {
        let text = token.text.trim();

        match MarkupKind::classify(text) {
            MarkupKind::ClosingTag => {
                writer.dedent();
                writer.write_line(text);
            }
            // Declarations always sit at column 0
            MarkupKind::Declaration => writer.write_line_unindented(text),
            MarkupKind::Comment | MarkupKind::SelfClosingTag => writer.write_line(text),
            MarkupKind::TextContent => {
                if !text.is_empty() {
                    writer.write_line(text);
                }
            }
            MarkupKind::OpeningTag => {
                writer.write_line(text);
                writer.indent();
            }
        }
    }

    writer.finish()
}
