//! CLI argument definitions for the lot format tools.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lottrace",
    version,
    about = "Lot number format tools - validate, inspect, and preview lot/batch identifier templates",
    long_about = "Work with lot number format templates such as LOT-{YYYY}-{SEQ:6}.\n\n\
                  Templates combine literal text with placeholders for date parts,\n\
                  product/line codes, and a zero-padded sequence. Validate a template\n\
                  against the placeholder grammar, inspect its parsed structure, or\n\
                  preview the lot number it produces."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a format template against the placeholder grammar.
    Validate(ValidateArgs),

    /// Show the parsed structure of a format template.
    Inspect(InspectArgs),

    /// Preview the lot number a format template produces.
    Preview(PreviewArgs),

    /// Validate a traceability configuration record from a JSON file.
    CheckConfig(CheckConfigArgs),

    /// List all supported placeholder tokens.
    Tokens,
}

#[derive(Parser)]
pub struct CheckConfigArgs {
    /// Path to a JSON file holding a traceability configuration record.
    #[arg(value_name = "CONFIG_FILE")]
    pub path: PathBuf,

    /// Emit the validation report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Format template, e.g. "LOT-{YYYY}-{SEQ:6}".
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Emit the validation report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Format template, e.g. "LOT-{YYYY}-{SEQ:6}".
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Emit the parsed structure as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Format template, e.g. "LOT-{YYYY}-{SEQ:6}".
    #[arg(value_name = "FORMAT")]
    pub format: String,

    /// Product code substituted for {PROD}.
    #[arg(long = "product-code", value_name = "CODE")]
    pub product_code: Option<String>,

    /// Line code substituted for {LINE}.
    #[arg(long = "line-code", value_name = "CODE")]
    pub line_code: Option<String>,

    /// Preview date as YYYY-MM-DD (defaults to today).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Emit the preview as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
