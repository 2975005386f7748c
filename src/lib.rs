//! Core library entry for the `taskrank` CLI.
//!
//! The priority model lives in [`scoring`]; everything else collects input
//! for it and presents its output.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod intake;
pub mod logging;
pub mod ports;
pub mod render;
pub mod scoring;
pub mod task;

use clap::error::ErrorKind;
use clap::Parser;

pub use error::Error;
pub use scoring::{compute_score, rank_tasks};
pub use task::{ScoredTask, Task};

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed by clap and count as success.
///
/// # Errors
///
/// Returns [`Error::Usage`] when argument parsing fails, or the command's
/// error.
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().map_err(|e| Error::Render(e.to_string()))?;
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err.to_string().trim_end().to_string())),
    };
    commands::dispatch(&cli.command)
}
