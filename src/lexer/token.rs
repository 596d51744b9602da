use std::ops::Deref;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Kind {
    Text,
    Field,
    Negate,
    Alias,
}

/// A classified run of the query. Only the end is stored: a span starts
/// where the previous one ended, or at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: Kind,
    /// Exclusive, in code points.
    pub end: usize,
}

impl Span {
    pub fn new(kind: Kind, end: usize) -> Self {
        Self { kind, end }
    }
}

/// One classified piece of a term, without surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub kind: Kind,
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Element<'a> {
    pub fn new(kind: Kind, value: &'a str, start: usize) -> Self {
        Self {
            kind,
            value,

            start,
            end: start + value.chars().count(),
        }
    }
}

impl Deref for Element<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

/// A whitespace-delimited word split into its negation marker, field
/// prefix and value. Element text borrows from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term<'a> {
    pub negation: Option<Element<'a>>,
    pub field: Option<Element<'a>>,
    pub value: Element<'a>,
}

impl<'a> Term<'a> {
    pub fn start(&self) -> usize {
        self.negation.or(self.field).unwrap_or(self.value).start
    }

    pub fn end(&self) -> usize {
        self.value.end
    }

    pub fn is_negated(&self) -> bool {
        self.value.kind == Kind::Negate
    }

    /// Field name without the trailing colon.
    pub fn field_name(&self) -> Option<&'a str> {
        self.field
            .map(|field| field.value.strip_suffix(':').unwrap_or(field.value))
    }

    /// Value text with a value-level dash removed.
    pub fn text(&self) -> &'a str {
        let value = self.value.value;
        value.strip_prefix('-').unwrap_or(value)
    }
}
