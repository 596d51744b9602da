use tracing::trace;

mod merge;
pub use self::merge::merge;

mod regex;
use self::regex::*;

mod token;
pub use token::*;

use crate::alias::AliasSet;

/// Classifies `source` and merges the result into spans, one word at a time.
pub fn spans(source: &str, aliases: &AliasSet) -> Vec<Span> {
    let spans = merge(Terms::new(source, aliases), source.chars().count());
    trace!(spans = spans.len(), "highlighted search query");

    spans
}

/// Lazily classifies the words of a source in order.
///
/// Offsets on every produced element count code points of the source.
pub struct Terms<'a, 'b> {
    source: &'a str,
    words: ::regex::Matches<'static, 'a>,
    aliases: &'b AliasSet,
    offset: usize,
    consumed: usize,
}

impl<'a, 'b> Terms<'a, 'b> {
    pub fn new(source: &'a str, aliases: &'b AliasSet) -> Self {
        Self {
            source,
            words: REGEX_WORD.find_iter(source),
            aliases,
            offset: 0,
            consumed: 0,
        }
    }
}

impl<'a> Iterator for Terms<'a, '_> {
    type Item = Term<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        self.offset += self.source[self.consumed..word.start()].chars().count();

        let term = classify(word.as_str(), self.offset, self.aliases);
        self.offset = term.end();
        self.consumed = word.end();

        Some(term)
    }
}

/// Classified terms of a source, available for lookahead.
pub struct Lexer<'a> {
    terms: Vec<Term<'a>>,
    length: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, aliases: &AliasSet) -> Self {
        let mut terms: Vec<Term<'a>> = Terms::new(source, aliases).collect();
        let length = source.chars().count();
        trace!(terms = terms.len(), length, "analyzed search query");

        terms.reverse();
        Self { terms, length }
    }

    /// Length of the source in code points.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn peek(&self) -> Option<&Term<'a>> {
        self.terms.last()
    }

    /// Merges the remaining terms into spans covering the source up to its end.
    pub fn spans(&self) -> Vec<Span> {
        merge(self.terms.iter().rev().copied(), self.length)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Term<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.terms.pop()
    }
}

/// Returns the `name:` prefix of `body` if it scopes the rest to a field.
pub(crate) fn field_prefix(body: &str) -> Option<&str> {
    REGEX_FIELD.find(body).map(|m| m.as_str())
}

fn classify<'a>(word: &'a str, start: usize, aliases: &AliasSet) -> Term<'a> {
    let (negation, body) = match word.strip_prefix('-') {
        Some(body) => (Some(Element::new(Kind::Negate, "-", start)), body),
        None => (None, word),
    };

    let offset = negation.as_ref().map_or(start, |negation| negation.end);
    let (field, value) = match field_prefix(body) {
        Some(prefix) => (
            Some(Element::new(Kind::Field, prefix, offset)),
            &body[prefix.len()..],
        ),
        None => (None, body),
    };

    let kind = if value.starts_with('-') || negation.is_some() {
        Kind::Negate
    } else if field.is_some() {
        Kind::Text
    } else if aliases.contains(value) {
        Kind::Alias
    } else {
        Kind::Text
    };

    let offset = field.as_ref().map_or(offset, |field| field.end);
    Term {
        negation,
        field,
        value: Element::new(kind, value, offset),
    }
}
