//! Lot number format engine.
//!
//! Lot/batch identifiers are configured per product as a template string
//! combining literal text with `{...}` placeholders, e.g.
//! `LOT-{YYYY}-{SEQ:6}` produces `LOT-2025-000001`.
//!
//! The engine exposes three operations over such templates:
//!
//! - [`validate_format`]: check a user-authored template against the
//!   placeholder grammar, returning a report of human-readable errors.
//! - [`parse_format`]: decompose a template into its prefix, typed
//!   placeholders, and literal separators.
//! - [`sample_lot_number`]: substitute representative values to produce
//!   a live preview of the lot number the template generates.
//!
//! All three are pure functions over in-memory strings. Validation errors
//! are returned in a report structure, never thrown; parsing and preview
//! degrade gracefully on malformed input because they feed UI previews,
//! not persisted identifiers.

pub mod grammar;
pub mod parse;
pub mod preview;
pub mod validate;

mod scan;

pub use grammar::{FALLBACK_LINE_CODE, FALLBACK_PRODUCT_CODE, PlaceholderKind};
pub use parse::{ParsedFormat, Placeholder, parse_format};
pub use preview::{sample_lot_number, sample_lot_number_on};
pub use validate::{FormatReport, validate_format};
