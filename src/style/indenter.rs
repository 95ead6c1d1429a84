use super::token::{StyleKind, Token};
use crate::emit::LineWriter;
use crate::options::FormattingOptions;

/// Write one line per token, indenting the contents of each block. Every closed block
/// is followed by a blank line.
pub fn indent(tokens: &[Token<'_>], options: &FormattingOptions) -> String {
    let mut writer = LineWriter::new(options);

    for token in tokens {
        let text = token.text.trim();
        if text.is_empty() {
            continue;
        }

        match StyleKind::classify(text) {
            StyleKind::CloseBrace => {
                writer.dedent();
                writer.write_line(text);
                writer.blank_line();
            }
            StyleKind::OpenBrace => {
                writer.write_line(&open_brace_line(text));
                writer.indent();
            }
            StyleKind::Comment | StyleKind::Declaration | StyleKind::Selector => {
                writer.write_line(text)
            }
        }
    }

    writer.finish()
}

/// `.a{` and `.a   {` both become `.a {`; a lone `{` stays as is.
fn open_brace_line(text: &str) -> String {
    let selector = text.strip_suffix('{').unwrap_or(text).trim_end();
    if selector.is_empty() {
        "{".to_string()
    } else {
        format!("{selector} {{")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::tokenizer::tokenize;

    fn run(source: &str, options: FormattingOptions) -> String {
        indent(&tokenize(source).unwrap(), &options)
    }

    #[test]
    fn test_open_brace_line() {
        assert_eq!(open_brace_line(".a{"), ".a {");
        assert_eq!(open_brace_line(".a   {"), ".a {");
        assert_eq!(open_brace_line("{"), "{");
    }

    #[test]
    fn test_single_rule() {
        assert_eq!(
            run(".a{color:red;margin:0;}", FormattingOptions::spaces(2)),
            ".a {\n  color:red;\n  margin:0;\n}\n"
        );
    }

    #[test]
    fn test_blank_line_between_rules() {
        assert_eq!(
            run(".a{x:1;}.b{y:2;}", FormattingOptions::tabs()),
            ".a {\n\tx:1;\n}\n\n.b {\n\ty:2;\n}\n"
        );
    }

    #[test]
    fn test_comment_keeps_depth() {
        assert_eq!(
            run(".a{/* c */x:1;}", FormattingOptions::spaces(4)),
            ".a {\n    /* c */\n    x:1;\n}\n"
        );
    }

    #[test]
    fn test_excess_close_braces_clamp_at_zero() {
        assert_eq!(
            run("}}.a{x:1;}", FormattingOptions::spaces(2)),
            "}\n\n}\n\n.a {\n  x:1;\n}\n"
        );
    }
}
