//! Raw lexemes for the markup dialect
//!
//! The logos lexer only recognizes the markers the scanner cares about. Everything else
//! comes through as `Text` runs (or a lone `Dash` when a `-` is not part of `-->`), so
//! the lexeme stream always covers the whole input.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    #[token("<!--")]
    CommentOpen,

    #[token("-->")]
    CommentClose,

    #[token("<")]
    TagOpen,

    #[token(">")]
    TagClose,

    // Either quote; the scanner reads which one from the slice
    #[token("\"")]
    #[token("'")]
    Quote,

    #[token("-")]
    Dash,

    #[regex(r#"[^<>"'-]+"#)]
    Text,
}

/// Tokenize into lexemes with their spans. Used by tests and debugging output.
pub fn lex_with_spans(source: &str) -> Vec<(Lexeme, logos::Span)> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(lexeme) = result {
            lexemes.push((lexeme, lexer.span()));
        }
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Lexeme> {
        lex_with_spans(source).into_iter().map(|(l, _)| l).collect()
    }

    #[test]
    fn test_tag_lexemes() {
        assert_eq!(
            lex("<a>hi</a>"),
            vec![
                Lexeme::TagOpen,
                Lexeme::Text,
                Lexeme::TagClose,
                Lexeme::Text,
                Lexeme::TagOpen,
                Lexeme::Text,
                Lexeme::TagClose,
            ]
        );
    }

    #[test]
    fn test_comment_markers() {
        assert_eq!(
            lex("<!-- x -->"),
            vec![Lexeme::CommentOpen, Lexeme::Text, Lexeme::CommentClose]
        );
    }

    #[test]
    fn test_partial_markers_fall_back() {
        // "<!-" is not a comment opener, "--->" ends with a closer
        assert_eq!(
            lex("<!-"),
            vec![Lexeme::TagOpen, Lexeme::Text, Lexeme::Dash]
        );
        assert_eq!(lex("--->"), vec![Lexeme::Dash, Lexeme::CommentClose]);
    }

    #[test]
    fn test_spans_cover_input() {
        let source = "<a b=\"x>y\"/>\n<!-- c -->";
        let spans = lex_with_spans(source);
        let mut cursor = 0;
        for (_, span) in &spans {
            assert_eq!(span.start, cursor);
            cursor = span.end;
        }
        assert_eq!(cursor, source.len());
    }
}
