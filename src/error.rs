//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::intake::ValidationError;

/// Errors surfaced by `taskrank` commands.
///
/// The scoring core never fails; everything here comes from input
/// collection, configuration, rendering or session recording.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// A value supplied on the command line failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An entry in a task file failed validation.
    #[error("task #{index}: {source}")]
    InvalidEntry {
        /// One-based position of the entry in the file.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: ValidationError,
    },

    /// A task file could not be read or parsed.
    #[error("failed to load tasks from {}: {message}", .path.display())]
    TaskFile {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying read or parse failure.
        message: String,
    },

    /// Standard input ended before all tasks were entered.
    #[error("input closed before all tasks were entered")]
    InputClosed,

    /// Reading from the console failed.
    #[error("console error: {0}")]
    Console(String),

    /// An environment setting is invalid.
    #[error("invalid {key}: {message}")]
    Config {
        /// Environment variable name.
        key: &'static str,
        /// Why it was rejected.
        message: String,
    },

    /// A session recording could not be written.
    #[error("recording failed: {0}")]
    Recording(String),

    /// A session cassette could not be loaded for replay.
    #[error("replay failed: {0}")]
    Replay(String),

    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Render(String),
}
