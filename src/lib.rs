//! Tokenizer for live-typed ticket search queries.
//!
//! A query is split into whitespace-delimited terms. Each term may carry a
//! leading `-` (negation), a `field:` prefix and a value; values matching a
//! configured alias are marked as such. [`parse`] reports the result as
//! contiguous spans for syntax highlighting, [`parser::parse`] turns the same
//! terms into a filter expression.
//!
//! ```
//! use ticket_query::{parse, AliasSet, Kind, Span};
//!
//! let aliases: AliasSet = "mine, urgent".parse().unwrap();
//! assert_eq!(
//!     parse(&aliases, "-status:done Mine"),
//!     vec![
//!         Span::new(Kind::Negate, 1),
//!         Span::new(Kind::Field, 8),
//!         Span::new(Kind::Negate, 13),
//!         Span::new(Kind::Alias, 17),
//!     ]
//! );
//! ```

pub mod alias;
pub mod highlight;
pub mod lexer;
pub mod parser;

pub use alias::{AliasError, AliasSet};
pub use lexer::{Kind, Lexer, Span, Terms};

/// Classifies `text` into spans that cover it from offset 0 to its length
/// in code points. Empty and whitespace-only input yields no spans.
///
/// Words are classified and merged one at a time; only the returned list is
/// allocated.
pub fn parse(aliases: &AliasSet, text: &str) -> Vec<Span> {
    lexer::spans(text, aliases)
}
