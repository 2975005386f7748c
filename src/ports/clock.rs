//! Clock port for obtaining today's date.

use chrono::NaiveDate;

/// Provides the reference date that deadlines are measured against.
///
/// Scoring takes the date as a parameter; this port is only consulted by
/// commands, so tests and replays can pin it.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}
