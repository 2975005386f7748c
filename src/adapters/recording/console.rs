//! Recording adapter for the `Console` port.

use serde::Serialize;
use serde_json::json;

use super::{record_interaction, SharedRecorder};
use crate::ports::console::{Console, PortError};

/// Records every answer read through the wrapped console.
///
/// Only `prompt` is recorded; output lines are passed straight through.
pub struct RecordingConsole {
    inner: Box<dyn Console>,
    recorder: SharedRecorder,
}

impl RecordingConsole {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Console>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PromptInput<'a> {
    message: &'a str,
}

impl Console for RecordingConsole {
    fn prompt(&self, message: &str) -> Result<Option<String>, PortError> {
        let result = self.inner.prompt(message);
        let output = match &result {
            Ok(answer) => json!({ "ok": answer }),
            Err(e) => json!({ "err": e.to_string() }),
        };
        record_interaction(&self.recorder, "console", "prompt", &PromptInput { message }, &output);
        result
    }

    fn say(&self, line: &str) {
        self.inner.say(line);
    }
}
