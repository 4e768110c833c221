//! Format string validation against the placeholder grammar.

use serde::Serialize;

use crate::grammar::resolve_token;
use crate::scan::{RawSegment, scan};

/// Outcome of validating a lot number format string.
///
/// Invalid input is reported here, never as an `Err`: the errors are
/// human-readable strings surfaced directly in the configuring form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormatReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a format string.
///
/// A format is valid when it contains at least one placeholder and every
/// `{...}` span resolves against the vocabulary. Error messages quote the
/// offending token verbatim. Multiple `SEQ` placeholders of differing
/// widths are accepted; rejecting them is a product decision this layer
/// does not make.
pub fn validate_format(format: &str) -> FormatReport {
    let mut errors = Vec::new();
    let mut placeholder_count = 0usize;

    for segment in scan(format) {
        let RawSegment::Token { inner, .. } = segment else {
            continue;
        };
        placeholder_count += 1;
        if inner.is_empty() {
            errors.push("empty placeholder {} is not allowed".to_string());
        } else if resolve_token(inner).is_none() {
            if inner == "SEQ" || inner.starts_with("SEQ:") {
                errors.push(format!(
                    "invalid placeholder {{{inner}}}: SEQ requires a positive width, e.g. {{SEQ:6}}"
                ));
            } else {
                errors.push(format!(
                    "invalid placeholder {{{inner}}}: not a recognized token"
                ));
            }
        }
    }

    if placeholder_count == 0 {
        errors.push("format must contain at least one placeholder, e.g. {SEQ:6}".to_string());
    }

    FormatReport {
        valid: errors.is_empty(),
        errors,
    }
}
