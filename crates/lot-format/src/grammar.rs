//! Placeholder vocabulary for lot number format strings.
//!
//! The vocabulary is a fixed, closed set of uppercase tokens. Matching is
//! case-sensitive: `{yyyy}` is not a placeholder.

use serde::Serialize;
use std::fmt;

/// Product code substituted for `{PROD}` when the caller supplies none.
pub const FALLBACK_PRODUCT_CODE: &str = "PRD";

/// Line code substituted for `{LINE}` when the caller supplies none.
pub const FALLBACK_LINE_CODE: &str = "L1";

/// A placeholder token kind.
///
/// All kinds except [`PlaceholderKind::Sequence`] are bare tokens;
/// `SEQ` carries its zero-pad width (`{SEQ:6}` renders six digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderKind {
    /// `YYYY`: 4-digit year.
    Year4,
    /// `YY`: last 2 digits of the year.
    Year2,
    /// `MM`: 2-digit month.
    Month,
    /// `DD`: 2-digit day.
    Day,
    /// `YYMMDD`: composite 6-digit date.
    DateCompact,
    /// `JULIAN`: 1-based day-of-year, zero-padded to 3 digits.
    Julian,
    /// `PROD`: caller-supplied product code.
    ProductCode,
    /// `LINE`: caller-supplied production line code.
    LineCode,
    /// `SEQ:N`: running sequence, zero-padded to a fixed width of at least 1.
    Sequence {
        /// Total rendered width in digits.
        width: usize,
    },
}

impl PlaceholderKind {
    /// Canonical token name, without the `{` `}` delimiters or SEQ width.
    pub fn token(&self) -> &'static str {
        match self {
            PlaceholderKind::Year4 => "YYYY",
            PlaceholderKind::Year2 => "YY",
            PlaceholderKind::Month => "MM",
            PlaceholderKind::Day => "DD",
            PlaceholderKind::DateCompact => "YYMMDD",
            PlaceholderKind::Julian => "JULIAN",
            PlaceholderKind::ProductCode => "PROD",
            PlaceholderKind::LineCode => "LINE",
            PlaceholderKind::Sequence { .. } => "SEQ",
        }
    }

    /// Width of a sequence placeholder, `None` for every other kind.
    pub fn seq_width(&self) -> Option<usize> {
        match self {
            PlaceholderKind::Sequence { width } => Some(*width),
            _ => None,
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKind::Sequence { width } => write!(f, "SEQ:{width}"),
            other => write!(f, "{}", other.token()),
        }
    }
}

/// Resolve the inner text of a `{...}` span into a placeholder kind.
///
/// Returns `None` for anything outside the fixed vocabulary, including
/// empty spans, lowercase tokens, `SEQ` without a width, and widths that
/// are not positive integers.
pub fn resolve_token(inner: &str) -> Option<PlaceholderKind> {
    match inner {
        "YYYY" => Some(PlaceholderKind::Year4),
        "YY" => Some(PlaceholderKind::Year2),
        "MM" => Some(PlaceholderKind::Month),
        "DD" => Some(PlaceholderKind::Day),
        "YYMMDD" => Some(PlaceholderKind::DateCompact),
        "JULIAN" => Some(PlaceholderKind::Julian),
        "PROD" => Some(PlaceholderKind::ProductCode),
        "LINE" => Some(PlaceholderKind::LineCode),
        _ => {
            let digits = inner.strip_prefix("SEQ:")?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let width: usize = digits.parse().ok()?;
            (width >= 1).then_some(PlaceholderKind::Sequence { width })
        }
    }
}

/// Token vocabulary with display descriptions, for help and listing output.
pub const TOKEN_SUMMARY: &[(&str, &str)] = &[
    ("YYYY", "4-digit year"),
    ("YY", "2-digit year"),
    ("MM", "2-digit month"),
    ("DD", "2-digit day"),
    ("YYMMDD", "composite date (YY + MM + DD)"),
    ("JULIAN", "day-of-year, zero-padded to 3 digits"),
    ("PROD", "product code supplied by the caller"),
    ("LINE", "production line code supplied by the caller"),
    ("SEQ:N", "running sequence, zero-padded to width N"),
];
