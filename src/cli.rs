//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::intake;

/// Top-level CLI parser for `taskrank`.
#[derive(Debug, Parser)]
#[command(
    name = "taskrank",
    version,
    about = "Rank tasks by deadline, importance, effort and dependencies"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter tasks (or load them from a file) and list them by priority.
    Rank(RankArgs),
    /// Score a single task described by flags.
    Score(ScoreArgs),
}

/// Output formats for `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Arguments for `taskrank rank`.
#[derive(Debug, Args)]
pub struct RankArgs {
    /// Read tasks from a YAML or JSON file instead of prompting.
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Rank against this date instead of today (DD/MM/YYYY or YYYY-MM-DD).
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Show the sub-scores behind each score.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `taskrank score`.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Task name.
    #[arg(long, default_value = "")]
    pub name: String,
    /// Deadline (DD/MM/YYYY or YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub deadline: String,
    /// Importance, 1-5.
    #[arg(long, allow_negative_numbers = true)]
    pub importance: i64,
    /// Estimated minutes, 0-480.
    #[arg(long, allow_negative_numbers = true)]
    pub effort: i64,
    /// Number of blocking dependencies.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub dependencies: i64,
    /// Score against this date instead of today.
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,
    /// Show the sub-scores behind the score.
    #[arg(long)]
    pub explain: bool,
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    intake::parse_deadline(text).map_err(|_| format!("'{text}' is not a DD/MM/YYYY date"))
}
