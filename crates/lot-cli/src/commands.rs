use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info, warn};

use lot_format::grammar::TOKEN_SUMMARY;
use lot_format::{parse_format, sample_lot_number_on, validate_format};
use lot_model::TraceabilityConfig;

use crate::cli::{CheckConfigArgs, InspectArgs, PreviewArgs, ValidateArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, error_cell, header_cell};

/// Validate a template and print the report. Returns whether it is valid.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let report = validate_format(&args.format);
    debug!(format = %args.format, valid = report.valid, "validated format");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    if report.valid {
        println!("OK: {}", args.format);
        return Ok(true);
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Error")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in report.errors.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), error_cell(error)]);
    }
    println!("Invalid format: {}", args.format);
    println!("{table}");
    Ok(false)
}

/// Parse a template and print its structure.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let report = validate_format(&args.format);
    for error in &report.errors {
        warn!(format = %args.format, "{error}");
    }

    let parsed = parse_format(&args.format);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("Format: {}", args.format);
    println!("Prefix: {:?}", parsed.prefix);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Position"),
        header_cell("Width"),
        header_cell("Separator after"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, placeholder) in parsed.placeholders.iter().enumerate() {
        let width = match placeholder.seq_width() {
            Some(width) => Cell::new(width),
            None => dim_cell("-"),
        };
        let separator = match parsed.separators.get(index) {
            Some(separator) => Cell::new(format!("{separator:?}")),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(placeholder.kind.to_string()),
            Cell::new(placeholder.position),
            width,
            separator,
        ]);
    }
    println!("{table}");
    if parsed.placeholders.is_empty() {
        println!("No recognized placeholders.");
    }
    Ok(())
}

/// Print the sample lot number a template produces.
pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let report = validate_format(&args.format);
    for error in &report.errors {
        warn!(format = %args.format, "{error}");
    }
    if !report.valid {
        warn!("previewing anyway; unresolved tokens pass through unchanged");
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let sample = sample_lot_number_on(
        &args.format,
        date,
        args.product_code.as_deref(),
        args.line_code.as_deref(),
    );
    info!(format = %args.format, date = %date, "generated preview");

    if args.json {
        let payload = serde_json::json!({
            "format": args.format,
            "date": date.to_string(),
            "sample": sample,
            "valid": report.valid,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{sample}");
    }
    Ok(())
}

/// Validate a traceability configuration JSON file. Returns whether the
/// record may be persisted.
pub fn run_check_config(args: &CheckConfigArgs) -> Result<bool> {
    let contents = fs::read_to_string(&args.path)
        .with_context(|| format!("read {}", args.path.display()))?;
    let config: TraceabilityConfig = serde_json::from_str(&contents)
        .with_context(|| format!("parse {}", args.path.display()))?;
    let report = config.validate();
    info!(
        path = %args.path.display(),
        format = %config.lot_number_format,
        valid = report.valid,
        "checked configuration"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    if report.valid {
        println!("OK: {} ({})", args.path.display(), config.lot_number_format);
        return Ok(true);
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Error")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in report.errors.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), error_cell(error)]);
    }
    println!("Invalid configuration: {}", args.path.display());
    println!("{table}");
    Ok(false)
}

/// List the placeholder vocabulary.
pub fn run_tokens() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Token"), header_cell("Meaning")]);
    apply_table_style(&mut table);
    for (token, description) in TOKEN_SUMMARY {
        table.add_row(vec![
            Cell::new(format!("{{{token}}}")),
            Cell::new(*description),
        ]);
    }
    println!("{table}");
    Ok(())
}
