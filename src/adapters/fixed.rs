//! A clock pinned to one date.

use chrono::NaiveDate;

use crate::ports::clock::Clock;

/// Always reports the same date. Backs `--today` and `TASKRANK_TODAY`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
