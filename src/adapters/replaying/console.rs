//! Replaying adapter for the `Console` port.

use super::{next_interaction, SharedReplayer};
use crate::ports::console::{Console, PortError};

/// Answers prompts from a cassette and prints output to stdout.
pub struct ReplayingConsole {
    replayer: SharedReplayer,
}

impl ReplayingConsole {
    /// Creates a console backed by `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl Console for ReplayingConsole {
    fn prompt(&self, _message: &str) -> Result<Option<String>, PortError> {
        let output = next_interaction(&self.replayer, "console", "prompt")?.output;
        if let Some(err) = output.get("err") {
            return Err(err.as_str().unwrap_or("unknown error").into());
        }
        match output.get("ok") {
            Some(serde_json::Value::String(answer)) => Ok(Some(answer.clone())),
            Some(serde_json::Value::Null) => Ok(None),
            _ => Err(format!("malformed console::prompt output: {output}").into()),
        }
    }

    fn say(&self, line: &str) {
        println!("{line}");
    }
}
