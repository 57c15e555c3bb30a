//! CLI argument definitions for the model inspection tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "strana",
    version,
    about = "Structural-analysis table automation - inspect model snapshots",
    long_about = "Inspect structural model snapshots offline.\n\n\
                  Snapshots are JSON captures of an analysis engine's tables,\n\
                  load cases, combinations, and object inventories. Commands\n\
                  replay them through the same marshaling core used against a\n\
                  live engine."
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
    /// List the tables a snapshot exposes, with their import types.
    Tables(SnapshotArgs),

    /// Render one named table.
    Show(ShowArgs),

    /// List load cases and combinations with their classification.
    Cases(SnapshotArgs),

    /// Expand a combination into its elementary load cases.
    Expand(ExpandArgs),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Path to the model snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the model snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Name of the table to render.
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// Report every step of multi-step cases instead of envelopes.
    #[arg(long = "steps")]
    pub steps: bool,

    /// Restrict result tables to these cases/combinations (repeatable).
    #[arg(long = "select", value_name = "CASE")]
    pub select: Vec<String>,
}

#[derive(Parser)]
pub struct ExpandArgs {
    /// Path to the model snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Name of the combination to expand.
    #[arg(value_name = "COMBO")]
    pub combo: String,

    /// Abort expansion past this nesting depth (guards cyclic definitions).
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
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
