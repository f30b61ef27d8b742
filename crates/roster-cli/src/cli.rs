//! CLI argument definitions for the exam roster converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "exam-roster",
    version,
    about = "Turn occupational-health exam exports into employee rosters",
    long_about = "Convert exam exports (one row per employee and exam) into a roster \
                  workbook with one row per employee and one column per exam type.\n\n\
                  Outputs are written as output_sorted_<name>.xlsx."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow employee names and identity numbers in debug logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every export in a folder.
    Batch(BatchArgs),

    /// Convert a single export.
    Convert(ConvertArgs),

    /// Print the preferred exam column order in effect.
    Exams(OptionsArgs),
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Folder holding the exports.
    #[arg(value_name = "FOLDER", default_value = ".")]
    pub folder: PathBuf,

    #[command(flatten)]
    pub options: OptionsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Export to convert (xlsx, xls, xlsm, xlsb, ods or csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Exact output path (takes precedence over --output-dir).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    #[command(flatten)]
    pub options: OptionsArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct OptionsArgs {
    /// JSON file with roster options (column layout, preferred exams, mark).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preferred exam label; repeat to replace the default list, in order.
    #[arg(long = "preferred-exam", value_name = "LABEL")]
    pub preferred_exams: Vec<String>,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output directory (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write values only, without borders, rotation or widths.
    #[arg(long = "plain")]
    pub plain: bool,

    /// Keep fixed column widths instead of autofitting.
    #[arg(long = "no-autofit")]
    pub no_autofit: bool,

    /// Build and report rosters without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
