//! End-to-end tests over the format engine: the canonical formats a
//! bakery-style deployment configures, plus the degenerate inputs the
//! configuring form can produce.

use chrono::{Datelike, Local, NaiveDate};
use lot_format::{PlaceholderKind, parse_format, sample_lot_number, sample_lot_number_on, validate_format};

/// Formats exercised by the product-configuration UI presets.
const CANONICAL_FORMATS: &[&str] = &[
    "LOT-{YYYY}-{SEQ:6}",
    "{PROD}-{YYMMDD}-{SEQ:4}",
    "{JULIAN}{YY}-{SEQ:5}",
    "L{LINE}-{YYYY}{MM}{DD}-{SEQ:4}",
    "BRD-{YYYY}-{MM}-{SEQ:6}",
];

#[test]
fn canonical_formats_validate_and_preview() {
    for format in CANONICAL_FORMATS {
        let report = validate_format(format);
        assert!(report.valid, "{format} should be valid: {:?}", report.errors);
        assert!(report.errors.is_empty());

        let sample = sample_lot_number(format, None, None);
        assert!(!sample.is_empty(), "{format} should produce a preview");
    }
}

#[test]
fn preview_contains_current_year_and_first_sequence() {
    let sample = sample_lot_number("LOT-{YYYY}-{SEQ:6}", None, None);
    let year = Local::now().date_naive().year().to_string();
    assert!(sample.contains(&year));
    assert!(sample.contains("000001"));
}

#[test]
fn preview_contains_product_code_and_six_digit_date() {
    let sample = sample_lot_number("{PROD}-{YYMMDD}-{SEQ:4}", Some("BRD"), None);
    assert!(sample.contains("BRD"));
    let date_block: Vec<&str> = sample.split('-').collect();
    assert_eq!(date_block[1].len(), 6);
    assert!(date_block[1].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn preview_is_stable_within_a_day() {
    let first = sample_lot_number("{YYYY}-{MM}-{DD}-{SEQ:6}", None, None);
    let second = sample_lot_number("{YYYY}-{MM}-{DD}-{SEQ:6}", None, None);
    assert_eq!(first, second);
}

#[test]
fn preview_is_deterministic_for_an_explicit_date() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
    let sample = sample_lot_number_on("{JULIAN}{YY}-{SEQ:5}", date, None, None);
    assert_eq!(sample, "36525-00001");
}

#[test]
fn parse_reports_structure_of_the_default_format() {
    let parsed = parse_format("LOT-{YYYY}-{SEQ:6}");
    assert_eq!(parsed.prefix, "LOT-");
    assert_eq!(parsed.placeholders.len(), 2);
    let seq = parsed
        .placeholders
        .iter()
        .find(|p| matches!(p.kind, PlaceholderKind::Sequence { .. }))
        .expect("SEQ placeholder present");
    assert_eq!(seq.seq_width(), Some(6));
}

#[test]
fn lowercase_tokens_are_rejected() {
    let report = validate_format("LOT-{yyyy}-{seq:6}");
    assert!(!report.valid);
}

#[test]
fn missing_placeholders_are_rejected() {
    let report = validate_format("PLAIN_TEXT_NO_PLACEHOLDERS");
    assert!(!report.valid);
    assert!(!report.errors.is_empty());
}

#[test]
fn invalid_token_is_named_in_the_error() {
    let report = validate_format("LOT-{BATCH}-001");
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("BATCH")));
}

#[test]
fn validation_report_serializes_for_the_form() {
    let report = validate_format("LOT-{}-001");
    let json = serde_json::to_string(&report).expect("serialize report");
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("empty placeholder"));
}
