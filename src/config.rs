//! Environment configuration.
//!
//! Settings are read from the process environment after loading a `.env`
//! file from the working directory, if one exists. Command-line flags take
//! precedence over anything set here.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Error;
use crate::intake;

/// Reference date override.
pub const TODAY_VAR: &str = "TASKRANK_TODAY";
/// Cassette path to record the session to.
pub const RECORD_VAR: &str = "TASKRANK_RECORD";
/// Cassette path to replay the session from.
pub const REPLAY_VAR: &str = "TASKRANK_REPLAY";
/// `tracing` filter directive.
pub const LOG_VAR: &str = "TASKRANK_LOG";

/// How the session's ports are wired.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Real terminal and clock.
    #[default]
    Live,
    /// Real terminal and clock, recorded to the given cassette.
    Record(PathBuf),
    /// Everything served from the given cassette.
    Replay(PathBuf),
}

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Date to rank against instead of the clock.
    pub today: Option<NaiveDate>,
    /// Port wiring for this run.
    pub session: SessionMode,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unparsable date or conflicting
    /// record/replay settings.
    pub fn from_env() -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let today = get(TODAY_VAR)
            .map(|raw| {
                intake::parse_deadline(&raw)
                    .map_err(|_| Error::Config { key: TODAY_VAR, message: format!("'{raw}' is not a date") })
            })
            .transpose()?;

        let session = match (get(RECORD_VAR), get(REPLAY_VAR)) {
            (Some(_), Some(_)) => {
                return Err(Error::Config {
                    key: RECORD_VAR,
                    message: format!("cannot be combined with {REPLAY_VAR}"),
                })
            }
            (Some(path), None) => SessionMode::Record(PathBuf::from(path)),
            (None, Some(path)) => SessionMode::Replay(PathBuf::from(path)),
            (None, None) => SessionMode::Live,
        };

        Ok(Self { today, session })
    }
}
