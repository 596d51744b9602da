use std::iter;

use super::{Span, Term};

/// Folds classified terms into contiguous spans.
///
/// Whitespace after a term belongs to its last element, whitespace before
/// the first term to the first span. Neighbouring elements of the same kind
/// share a span; zero-width elements produce none.
pub fn merge<'a, I>(terms: I, length: usize) -> Vec<Span>
where
    I: IntoIterator<Item = Term<'a>>,
{
    let mut spans = Vec::new();
    let mut current: Option<Span> = None;

    let mut terms = terms.into_iter().peekable();
    while let Some(term) = terms.next() {
        let boundary = terms.peek().map_or(length, |next| next.start());

        let elements = term
            .negation
            .iter()
            .chain(term.field.iter())
            .map(|element| (element.kind, element.end))
            .chain(iter::once((term.value.kind, boundary)));

        for (kind, end) in elements {
            if end <= current.map_or(0, |span| span.end) {
                continue;
            }

            match current {
                Some(ref mut span) if span.kind == kind => span.end = end,
                _ => spans.extend(current.replace(Span::new(kind, end))),
            }
        }
    }

    spans.extend(current);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Element, Kind};
    use pretty_assertions::assert_eq;

    fn term(kind: Kind, value: &'static str, start: usize) -> Term<'static> {
        Term {
            negation: None,
            field: None,
            value: Element::new(kind, value, start),
        }
    }

    #[test]
    fn nothing() {
        assert!(merge(iter::empty::<Term>(), 4).is_empty());
    }

    #[test]
    fn leading_whitespace_joins_first_span() {
        let terms = [term(Kind::Alias, "cut", 2)];
        assert_eq!(merge(terms, 7), vec![Span::new(Kind::Alias, 7)]);
    }

    #[test]
    fn same_kind_across_words() {
        let terms = [
            term(Kind::Text, "a", 0),
            term(Kind::Text, "b", 2),
            term(Kind::Alias, "cut", 4),
        ];
        assert_eq!(
            merge(terms, 7),
            vec![Span::new(Kind::Text, 4), Span::new(Kind::Alias, 7)]
        );
    }

    #[test]
    fn elements_within_a_word() {
        let terms = [Term {
            negation: Some(Element::new(Kind::Negate, "-", 0)),
            field: Some(Element::new(Kind::Field, "f:", 1)),
            value: Element::new(Kind::Negate, "x", 3),
        }];
        assert_eq!(
            merge(terms, 5),
            vec![
                Span::new(Kind::Negate, 1),
                Span::new(Kind::Field, 3),
                Span::new(Kind::Negate, 5),
            ]
        );
    }

    #[test]
    fn empty_value_at_end() {
        let terms = [Term {
            negation: None,
            field: Some(Element::new(Kind::Field, "f:", 0)),
            value: Element::new(Kind::Text, "", 2),
        }];
        assert_eq!(merge(terms, 2), vec![Span::new(Kind::Field, 2)]);
    }
}
