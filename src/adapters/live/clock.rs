//! Live clock using the local system date.

use chrono::{Local, NaiveDate};

use crate::ports::clock::Clock;

/// Reports today's date in the local time zone.
pub struct LiveClock;

impl Clock for LiveClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_local_date() {
        let before = Local::now().date_naive();
        let today = LiveClock.today();
        let after = Local::now().date_naive();

        assert!(today >= before);
        assert!(today <= after);
    }
}
