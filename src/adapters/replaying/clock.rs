//! Replaying adapter for the `Clock` port.

use chrono::NaiveDate;

use super::{next_interaction, SharedReplayer};
use crate::ports::clock::Clock;

/// Serves recorded dates from a cassette.
pub struct ReplayingClock {
    replayer: SharedReplayer,
}

impl ReplayingClock {
    /// Creates a clock backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl Clock for ReplayingClock {
    /// # Panics
    ///
    /// Panics if the cassette has no (more) `clock::today` interactions or
    /// the recorded value is not a date, since the port cannot report errors.
    fn today(&self) -> NaiveDate {
        let interaction = next_interaction(&self.replayer, "clock", "today")
            .unwrap_or_else(|e| panic!("clock replay failed: {e}"));
        serde_json::from_value(interaction.output)
            .unwrap_or_else(|e| panic!("clock replay failed: recorded value is not a date: {e}"))
    }
}
