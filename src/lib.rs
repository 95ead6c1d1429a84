//! # uitk-fmt
//!
//! Formatters for the two UI Toolkit source dialects:
//!
//!     Markup (`.uxml`): XML-flavored element/attribute markup with self-closing tags,
//!     comments and `<?...?>` declarations. See [markup].
//!
//!     Style sheets (`.uss`): CSS-flavored selector blocks with declarations, nesting,
//!     comments and string literals. See [style].
//!
//! Both pipelines have the same shape: a lexeme lexer (logos) feeds a scanner that cuts
//! the source into structural tokens, and an indenter walks the tokens with a depth
//! counter and writes one line per token. They share nothing but the line writer
//! ([emit]) and the fallback runner ([guard]).
//!
//! Formatting never fails from the caller's point of view: the `format_*` entry points
//! return the input unchanged if anything goes wrong internally. Use the `try_format_*`
//! variants to observe the [FormattingFailure] instead.
//!
//! Host-facing pieces live on top of the core: [Dialect] dispatch, byte-offset
//! [edits], and the layered [config] used by the `uitk-fmt` binary.

pub mod config;
pub mod dialect;
pub mod edits;
pub mod emit;
pub mod error;
pub mod guard;
pub mod markup;
pub mod options;
pub mod style;

pub use dialect::Dialect;
pub use error::FormattingFailure;
pub use markup::{format_markup, format_markup_range};
pub use options::FormattingOptions;
pub use style::{format_style_sheet, format_style_sheet_range};
