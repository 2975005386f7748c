//! Service context bundling the port trait objects a command needs.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use crate::adapters::fixed::FixedClock;
use crate::adapters::live::{LiveClock, LiveConsole};
use crate::adapters::recording::{RecordingClock, RecordingConsole, SharedRecorder};
use crate::adapters::replaying::{ReplayingClock, ReplayingConsole};
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Error;
use crate::ports::{Clock, Console};

/// The external boundaries available to a command.
///
/// Constructors wire up different adapter sets (live, recording,
/// replaying, or caller-supplied).
pub struct ServiceContext {
    /// Source of today's date.
    pub clock: Box<dyn Clock>,
    /// Where prompts are answered and output is shown.
    pub console: Box<dyn Console>,
    recorder: Option<(PathBuf, SharedRecorder)>,
}

impl ServiceContext {
    /// Real terminal and system date.
    #[must_use]
    pub fn live() -> Self {
        Self::with_ports(Box::new(LiveClock), Box::new(LiveConsole))
    }

    /// Uses the given ports.
    #[must_use]
    pub fn with_ports(clock: Box<dyn Clock>, console: Box<dyn Console>) -> Self {
        Self { clock, console, recorder: None }
    }

    /// Live ports whose interactions are recorded to a cassette at `path`.
    ///
    /// Nothing is written until [`finish`](Self::finish).
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder: SharedRecorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "taskrank-session")));
        Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            console: Box::new(RecordingConsole::new(Box::new(LiveConsole), Arc::clone(&recorder))),
            recorder: Some((path.to_path_buf(), recorder)),
        }
    }

    /// Ports served from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Replay`] if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, Error> {
        let replayer = Arc::new(Mutex::new(CassetteReplayer::load(path).map_err(Error::Replay)?));
        Ok(Self::with_ports(
            Box::new(ReplayingClock::new(Arc::clone(&replayer))),
            Box::new(ReplayingConsole::new(replayer)),
        ))
    }

    /// Pins the clock to `date`, keeping the console as it is.
    ///
    /// When recording, the pinned date is what gets recorded.
    #[must_use]
    pub fn override_today(mut self, date: NaiveDate) -> Self {
        self.clock = match &self.recorder {
            Some((_, recorder)) => {
                Box::new(RecordingClock::new(Box::new(FixedClock(date)), Arc::clone(recorder)))
            }
            None => Box::new(FixedClock(date)),
        };
        self
    }

    /// Releases the ports and writes the recording, if there is one.
    ///
    /// Returns the cassette path when a recording was written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Recording`] if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, Error> {
        let Self { clock, console, recorder } = self;
        drop(clock);
        drop(console);

        let Some((path, recorder)) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| {
                Error::Recording(format!("recorder for {} is still in use", path.display()))
            })?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        recorder.finish().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scripted::ScriptedConsole;
    use crate::cassette::Cassette;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn with_ports_uses_given_adapters() {
        let ctx = ServiceContext::with_ports(
            Box::new(FixedClock(date(2025, 5, 5))),
            Box::new(ScriptedConsole::new(["yes"])),
        );
        assert_eq!(ctx.clock.today(), date(2025, 5, 5));
        assert_eq!(ctx.console.prompt("?").unwrap().as_deref(), Some("yes"));
        assert_eq!(ctx.finish().unwrap(), None);
    }

    #[test]
    fn override_today_replaces_clock() {
        let ctx = ServiceContext::live().override_today(date(2030, 1, 1));
        assert_eq!(ctx.clock.today(), date(2030, 1, 1));
    }

    #[test]
    fn recording_writes_cassette_on_finish() {
        let dir = std::env::temp_dir().join("taskrank_context_recording_test");
        let path = dir.join("session.yaml");

        let ctx = ServiceContext::recording(&path).override_today(date(2025, 6, 15));
        assert_eq!(ctx.clock.today(), date(2025, 6, 15));
        assert!(!path.exists());

        let written = ctx.finish().unwrap();
        assert_eq!(written.as_deref(), Some(path.as_path()));

        let cassette = Cassette::from_yaml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].port, "clock");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/taskrank.yaml"));
        assert!(matches!(result, Err(Error::Replay(_))));
    }
}
