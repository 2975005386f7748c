//! Recording adapter for the `Clock` port.

use chrono::NaiveDate;

use super::{record_interaction, SharedRecorder};
use crate::ports::Clock;

/// Records every date it hands out.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: SharedRecorder,
}

impl RecordingClock {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Clock>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn today(&self) -> NaiveDate {
        let today = self.inner.today();
        record_interaction(&self.recorder, "clock", "today", &(), &today);
        today
    }
}
