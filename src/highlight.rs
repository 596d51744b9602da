use std::ops::Range;

use crate::lexer::{Kind, Span};

/// Code-point range of every span, each starting where the previous ended.
pub fn ranges(spans: &[Span]) -> impl Iterator<Item = (Kind, Range<usize>)> + '_ {
    let mut start = 0;

    spans.iter().map(move |span| {
        let range = start..span.end;
        start = span.end;

        (span.kind, range)
    })
}

/// Slices `source` into the text covered by each span.
///
/// `spans` must have been produced for `source`; spans reaching past its end
/// yield the remaining (possibly empty) text.
pub fn highlight<'a>(
    source: &'a str,
    spans: &'a [Span],
) -> impl Iterator<Item = (Kind, &'a str)> + 'a {
    let mut rest = source;

    ranges(spans).map(move |(kind, range)| {
        let split = rest
            .char_indices()
            .nth(range.len())
            .map_or(rest.len(), |(index, _)| index);

        let (text, tail) = rest.split_at(split);
        rest = tail;

        (kind, text)
    })
}
