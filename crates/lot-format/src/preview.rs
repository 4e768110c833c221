//! Sample lot number generation for live previews.

use chrono::{Datelike, Local, NaiveDate};

use crate::grammar::{
    FALLBACK_LINE_CODE, FALLBACK_PRODUCT_CODE, PlaceholderKind, resolve_token,
};
use crate::scan::{RawSegment, scan};

/// Sequence value rendered in previews: the first lot of the day.
const SAMPLE_SEQUENCE: u32 = 1;

/// Generate a sample lot number for today's date.
///
/// Convenience wrapper over [`sample_lot_number_on`]; the preview is
/// deterministic within a calendar day for fixed arguments.
pub fn sample_lot_number(
    format: &str,
    product_code: Option<&str>,
    line_code: Option<&str>,
) -> String {
    sample_lot_number_on(format, Local::now().date_naive(), product_code, line_code)
}

/// Generate a sample lot number for an explicit date.
///
/// Substitutes each recognized placeholder with a representative value:
/// date tokens from `date`, `PROD`/`LINE` from the supplied codes (or the
/// fixed fallbacks when omitted), and `SEQ:N` as the value 1 zero-padded
/// to width N. Unrecognized spans pass through unchanged; this feeds a
/// UI preview and never fails, it degrades to partially-substituted
/// output on malformed input.
pub fn sample_lot_number_on(
    format: &str,
    date: NaiveDate,
    product_code: Option<&str>,
    line_code: Option<&str>,
) -> String {
    let mut out = String::with_capacity(format.len());
    for segment in scan(format) {
        match segment {
            RawSegment::Literal(text) => out.push_str(text),
            RawSegment::Token { inner, raw, .. } => match resolve_token(inner) {
                Some(kind) => render(&mut out, kind, date, product_code, line_code),
                None => out.push_str(raw),
            },
        }
    }
    out
}

fn render(
    out: &mut String,
    kind: PlaceholderKind,
    date: NaiveDate,
    product_code: Option<&str>,
    line_code: Option<&str>,
) {
    match kind {
        PlaceholderKind::Year4 => out.push_str(&format!("{:04}", date.year())),
        PlaceholderKind::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
        PlaceholderKind::Month => out.push_str(&format!("{:02}", date.month())),
        PlaceholderKind::Day => out.push_str(&format!("{:02}", date.day())),
        PlaceholderKind::DateCompact => out.push_str(&format!(
            "{:02}{:02}{:02}",
            date.year().rem_euclid(100),
            date.month(),
            date.day()
        )),
        PlaceholderKind::Julian => out.push_str(&format!("{:03}", date.ordinal())),
        PlaceholderKind::ProductCode => {
            out.push_str(product_code.unwrap_or(FALLBACK_PRODUCT_CODE));
        }
        PlaceholderKind::LineCode => out.push_str(line_code.unwrap_or(FALLBACK_LINE_CODE)),
        PlaceholderKind::Sequence { width } => {
            out.push_str(&format!("{SAMPLE_SEQUENCE:0width$}"));
        }
    }
}
