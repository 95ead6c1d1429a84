//! Raw lexemes for the style-sheet dialect
//!
//! Structural characters and comment markers get their own lexemes; everything else is
//! a `Text` run or a lone `/` / `*` that is not part of a comment marker.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    #[token("/*")]
    CommentOpen,

    #[token("*/")]
    CommentClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(";")]
    Semicolon,

    // Either quote; the scanner reads which one from the slice
    #[token("\"")]
    #[token("'")]
    Quote,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[token("/")]
    #[token("*")]
    Symbol,

    #[regex(r#"[^/*{};"'\r\n]+"#)]
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
    fn test_rule_lexemes() {
        assert_eq!(
            lex(".a{color:red;}"),
            vec![
                Lexeme::Text,
                Lexeme::BraceOpen,
                Lexeme::Text,
                Lexeme::Semicolon,
                Lexeme::BraceClose,
            ]
        );
    }

    #[test]
    fn test_comment_markers() {
        assert_eq!(
            lex("/* a */"),
            vec![Lexeme::CommentOpen, Lexeme::Text, Lexeme::CommentClose]
        );
        assert_eq!(lex("**/"), vec![Lexeme::Symbol, Lexeme::CommentClose]);
    }

    #[test]
    fn test_quotes() {
        // A backslash is plain text; the scanner looks back for it
        assert_eq!(
            lex(r#"'a\'"#),
            vec![Lexeme::Quote, Lexeme::Text, Lexeme::Quote]
        );
        assert_eq!(lex(r#""x""#), vec![Lexeme::Quote, Lexeme::Text, Lexeme::Quote]);
    }

    #[test]
    fn test_newlines() {
        assert_eq!(
            lex("a\r\nb\rc\n"),
            vec![
                Lexeme::Text,
                Lexeme::Newline,
                Lexeme::Text,
                Lexeme::Newline,
                Lexeme::Text,
                Lexeme::Newline,
            ]
        );
    }
}
