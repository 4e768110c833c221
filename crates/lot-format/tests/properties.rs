//! Property tests over the scanner-backed operations: no input may panic
//! any of them, and previews must be pure functions of their arguments.

use chrono::NaiveDate;
use lot_format::{parse_format, sample_lot_number_on, validate_format};
use proptest::prelude::*;

proptest! {
    #[test]
    fn literal_only_formats_are_rejected(text in "[A-Za-z0-9 _.-]{0,40}") {
        let report = validate_format(&text);
        prop_assert!(!report.valid);
        prop_assert!(!report.errors.is_empty());
    }

    #[test]
    fn parser_never_panics_and_keeps_order(text in "\\PC{0,60}") {
        let parsed = parse_format(&text);
        let positions: Vec<usize> = parsed.placeholders.iter().map(|p| p.position).collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        if parsed.placeholders.is_empty() {
            prop_assert!(parsed.separators.is_empty());
        } else {
            prop_assert_eq!(parsed.separators.len(), parsed.placeholders.len() - 1);
        }
    }

    #[test]
    fn preview_never_panics(text in "\\PC{0,60}") {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date");
        let _ = sample_lot_number_on(&text, date, Some("BRD"), Some("2"));
    }

    #[test]
    fn preview_is_deterministic(width in 1usize..9, day in 1u32..29) {
        let format = format!("LOT-{{YYYY}}-{{SEQ:{width}}}");
        let date = NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date");
        let first = sample_lot_number_on(&format, date, None, None);
        let second = sample_lot_number_on(&format, date, None, None);
        prop_assert_eq!(&first, &second);
        let expected_suffix = format!("{:0width$}", 1);
        prop_assert!(first.ends_with(&expected_suffix));
    }

    #[test]
    fn valid_sequence_widths_render_exactly(width in 1usize..12) {
        let format = format!("{{SEQ:{width}}}");
        prop_assert!(validate_format(&format).valid);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let sample = sample_lot_number_on(&format, date, None, None);
        prop_assert_eq!(sample.len(), width);
        prop_assert!(sample.chars().all(|c| c.is_ascii_digit()));
    }
}
