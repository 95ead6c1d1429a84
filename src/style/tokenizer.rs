//! Style-sheet scanner
//!
//! Walks the lexeme stream once. The pending buffer is the slice `[start, cursor)` of
//! the source; a token is emitted when the buffer ends in `{` or `;`, before a `}`, at a
//! line break, or around a comment. Inside a string or comment nothing is structural.
//! A quote closes its string unless the byte right before it is a backslash, so
//! `"a\"b"` is one string and so is everything after `"\\"`.

use super::lexeme::Lexeme;
use super::token::Token;
use crate::error::FormattingFailure;
use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    String { quote: char },
    Comment,
}

struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    start: usize,
    mode: Mode,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            mode: Mode::Normal,
        }
    }

    /// Emit `[start, end)` unless it is blank, and restart the buffer at `end`.
    fn flush(&mut self, end: usize) {
        if !self.source[self.start..end].trim().is_empty() {
            self.tokens.push(Token::new(self.source, self.start..end));
        }
        self.start = end;
    }

    fn feed(&mut self, lexeme: Lexeme, span: logos::Span, slice: &str) {
        match self.mode {
            Mode::Comment => {
                if lexeme == Lexeme::CommentClose {
                    self.flush(span.end);
                    self.mode = Mode::Normal;
                }
            }
            Mode::String { quote } => {
                if lexeme == Lexeme::Quote
                    && slice.starts_with(quote)
                    && !self.source[..span.start].ends_with('\\')
                {
                    self.mode = Mode::Normal;
                }
            }
            Mode::Normal => match lexeme {
                Lexeme::Quote => {
                    if let Some(quote) = slice.chars().next() {
                        self.mode = Mode::String { quote };
                    }
                }
                Lexeme::CommentOpen => {
                    self.flush(span.start);
                    self.mode = Mode::Comment;
                }
                Lexeme::BraceOpen | Lexeme::Semicolon => self.flush(span.end),
                Lexeme::BraceClose => {
                    self.flush(span.start);
                    self.flush(span.end);
                }
                Lexeme::Newline => {
                    self.flush(span.start);
                    self.start = span.end;
                }
                Lexeme::CommentClose | Lexeme::Symbol | Lexeme::Text => {}
            },
        }
    }

    fn finish(mut self) -> Vec<Token<'a>> {
        self.flush(self.source.len());
        self.tokens
    }
}

/// Cut normalized style-sheet source into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, FormattingFailure> {
    let mut scanner = Scanner::new(source);
    let mut lexer = Lexeme::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = result.map_err(|_| FormattingFailure::UnrecognizedInput { offset: span.start })?;
        scanner.feed(lexeme, span, lexer.slice());
    }

    Ok(scanner.finish())
}
