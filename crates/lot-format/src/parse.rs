//! Decomposition of a format string into typed components.

use serde::Serialize;

use crate::grammar::{PlaceholderKind, resolve_token};
use crate::scan::{RawSegment, scan};

/// A typed placeholder occurrence within a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    /// Byte offset of the opening brace in the original string.
    pub position: usize,
}

impl Placeholder {
    /// Width of a `SEQ` placeholder, `None` for the rest.
    pub fn seq_width(&self) -> Option<usize> {
        self.kind.seq_width()
    }
}

/// Read-only decomposition of a format string.
///
/// `separators` holds the literal text between consecutive placeholders,
/// in order; adjacent placeholders contribute an empty separator, so
/// `separators.len() == placeholders.len() - 1` whenever any placeholder
/// exists. Literal text after the last placeholder is not a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFormat {
    /// Literal text before the first opening brace. When the format has
    /// no brace at all this is the entire string.
    pub prefix: String,
    pub placeholders: Vec<Placeholder>,
    pub separators: Vec<String>,
}

/// Parse a format string into its components.
///
/// Never fails: unrecognized `{...}` spans are treated as literal text,
/// and a format without recognizable placeholders parses to an empty
/// placeholder list. Rejecting bad input is the validator's job.
pub fn parse_format(format: &str) -> ParsedFormat {
    let prefix = match format.find('{') {
        Some(index) => &format[..index],
        None => format,
    };

    let mut placeholders: Vec<Placeholder> = Vec::new();
    let mut separators = Vec::new();
    // Literal text accumulated since the last recognized placeholder.
    let mut pending = String::new();

    for segment in scan(format) {
        match segment {
            RawSegment::Literal(text) => {
                if !placeholders.is_empty() {
                    pending.push_str(text);
                }
            }
            RawSegment::Token { inner, raw, start } => match resolve_token(inner) {
                Some(kind) => {
                    if !placeholders.is_empty() {
                        separators.push(std::mem::take(&mut pending));
                    }
                    placeholders.push(Placeholder {
                        kind,
                        position: start,
                    });
                }
                None => {
                    if !placeholders.is_empty() {
                        pending.push_str(raw);
                    }
                }
            },
        }
    }

    ParsedFormat {
        prefix: prefix.to_string(),
        placeholders,
        separators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_prefix_placeholders_and_separator() {
        let parsed = parse_format("LOT-{YYYY}-{SEQ:6}");
        assert_eq!(parsed.prefix, "LOT-");
        assert_eq!(parsed.placeholders.len(), 2);
        assert_eq!(parsed.placeholders[0].kind, PlaceholderKind::Year4);
        assert_eq!(parsed.placeholders[0].position, 4);
        assert_eq!(parsed.placeholders[1].position, 11);
        assert_eq!(parsed.placeholders[1].seq_width(), Some(6));
        assert_eq!(parsed.separators, vec!["-".to_string()]);
    }

    #[test]
    fn adjacent_placeholders_yield_empty_separators() {
        let parsed = parse_format("PREFIX-{YYYY}{MM}{DD}-{SEQ:4}-SUFFIX");
        assert_eq!(parsed.prefix, "PREFIX-");
        assert_eq!(parsed.placeholders.len(), 4);
        assert_eq!(
            parsed.separators,
            vec![String::new(), String::new(), "-".to_string()]
        );
    }

    #[test]
    fn whole_string_is_prefix_when_no_brace() {
        let parsed = parse_format("PLAIN");
        assert_eq!(parsed.prefix, "PLAIN");
        assert!(parsed.placeholders.is_empty());
        assert!(parsed.separators.is_empty());
    }

    #[test]
    fn unclosed_brace_does_not_panic() {
        let parsed = parse_format("LOT-{YYYY");
        assert_eq!(parsed.prefix, "LOT-");
        assert!(parsed.placeholders.is_empty());
    }

    #[test]
    fn unrecognized_span_joins_the_separator() {
        let parsed = parse_format("{YYYY}a{FOO}b{SEQ:2}");
        assert_eq!(parsed.placeholders.len(), 2);
        assert_eq!(parsed.separators, vec!["a{FOO}b".to_string()]);
    }

    #[test]
    fn serializes_for_ui_display() {
        let parsed = parse_format("L{LINE}-{SEQ:4}");
        let json = serde_json::to_string(&parsed).expect("serialize parsed format");
        assert!(json.contains("\"prefix\":\"L\""));
        assert!(json.contains("\"position\":1"));
    }
}
