//! Markup scanner
//!
//! Walks the lexeme stream once, cutting the source into tags, comments and text runs.
//! The pending buffer is always a contiguous slice `[start, cursor)` of the source, so
//! tokens borrow from it instead of copying.
//!
//! Modes:
//!
//!     Text: `<` flushes pending text and opens a tag, `<!--` opens a comment.
//!     Tag: `>` closes and emits the tag. A quoted attribute value makes `<` and `>`
//!     inert until the matching quote.
//!     Comment: everything is literal until `-->`, which closes and emits the comment.
//!     The closer may reuse the opener's dashes, so `<!-->` is a whole comment.
//!
//! Whatever is still pending at end of input becomes the last token, so unterminated
//! constructs never stall the scan.

use super::lexeme::Lexeme;
use super::token::Token;
use crate::error::FormattingFailure;
use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Tag { quote: Option<char> },
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
            mode: Mode::Text,
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
                // The closer is matched on the last three bytes read, so it may share
                // dashes with the opener: `<!-->` and `<!--->` are complete.
                let closes = match lexeme {
                    Lexeme::CommentClose => true,
                    Lexeme::TagClose => self.source[..span.start].ends_with("--"),
                    _ => false,
                };
                if closes {
                    self.flush(span.end);
                    self.mode = Mode::Text;
                }
            }
            Mode::Tag { quote: Some(open) } => {
                if lexeme == Lexeme::Quote && slice.starts_with(open) {
                    self.mode = Mode::Tag { quote: None };
                }
            }
            Mode::Tag { quote: None } => match lexeme {
                Lexeme::CommentOpen => {
                    self.flush(span.start);
                    self.mode = Mode::Comment;
                }
                // `-->` outside a comment still ends with the tag's `>`
                Lexeme::TagClose | Lexeme::CommentClose => {
                    self.flush(span.end);
                    self.mode = Mode::Text;
                }
                Lexeme::Quote => {
                    self.mode = Mode::Tag {
                        quote: slice.chars().next(),
                    };
                }
                _ => {}
            },
            Mode::Text => match lexeme {
                Lexeme::CommentOpen => {
                    self.flush(span.start);
                    self.mode = Mode::Comment;
                }
                Lexeme::TagOpen => {
                    self.flush(span.start);
                    self.mode = Mode::Tag { quote: None };
                }
                _ => {}
            },
        }
    }

    fn finish(mut self) -> Vec<Token<'a>> {
        self.flush(self.source.len());
        self.tokens
    }
}

/// Cut normalized markup source into tokens.
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
