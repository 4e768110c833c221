//! Single-pass scanner splitting a format string into literal text and
//! `{...}` spans. Shared by the validator, parser, and preview generator
//! so the three operations agree on what counts as a placeholder span.

/// A raw segment of a format string, before token resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawSegment<'a> {
    /// Literal text outside any braces.
    Literal(&'a str),
    /// A brace-delimited span, not yet resolved against the vocabulary.
    Token {
        /// Text between the braces (may be empty for `{}`).
        inner: &'a str,
        /// The full span including braces, for literal passthrough.
        raw: &'a str,
        /// Byte offset of the opening brace in the original string.
        start: usize,
    },
}

/// Split a format string into literals and brace spans, left to right.
///
/// An opening brace with no matching `}` is not a span; the remainder of
/// the string is returned as literal text. Never fails on any input.
pub(crate) fn scan(format: &str) -> Vec<RawSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = format;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        if open > 0 {
            segments.push(RawSegment::Literal(&rest[..open]));
        }
        let end = open + close + 1;
        segments.push(RawSegment::Token {
            inner: &rest[open + 1..end - 1],
            raw: &rest[open..end],
            start: offset + open,
        });
        offset += end;
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(RawSegment::Literal(rest));
    }
    segments
}
