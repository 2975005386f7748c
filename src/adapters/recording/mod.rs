//! Recording adapters that capture interactions to a cassette.

pub mod clock;
pub mod console;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use console::RecordingConsole;

/// Recorder shared by every recording adapter of one session.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Appends one interaction to the shared recorder.
///
/// Values that fail to serialize are logged and skipped; recording never
/// interrupts the command being recorded.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let (input, output) = match (serde_json::to_value(input), serde_json::to_value(output)) {
        (Ok(input), Ok(output)) => (input, output),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(port, method, error = %e, "skipping unserializable interaction");
            return;
        }
    };

    recorder.lock().unwrap_or_else(PoisonError::into_inner).record(port, method, input, output);
}
