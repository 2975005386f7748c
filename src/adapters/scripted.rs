//! A console fed from a fixed list of answers.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::console::{Console, PortError};

/// Answers prompts from a script and captures everything shown to the user.
///
/// Once the script runs out, `prompt` reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    state: Mutex<Transcript>,
}

#[derive(Debug, Default)]
struct Transcript {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers = answers.into_iter().map(Into::into).collect();
        Self { state: Mutex::new(Transcript { answers, ..Transcript::default() }) }
    }

    /// Lines passed to `say`, in order.
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.with_state(|s| s.output.clone())
    }

    /// Prompt messages shown, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.with_state(|s| s.prompts.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut Transcript) -> T) -> T {
        let mut guard = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Console for ScriptedConsole {
    fn prompt(&self, message: &str) -> Result<Option<String>, PortError> {
        Ok(self.with_state(|s| {
            s.prompts.push(message.to_string());
            s.answers.pop_front()
        }))
    }

    fn say(&self, line: &str) {
        self.with_state(|s| s.output.push(line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order_then_reports_eof() {
        let console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.prompt("1? ").unwrap().as_deref(), Some("a"));
        assert_eq!(console.prompt("2? ").unwrap().as_deref(), Some("b"));
        assert_eq!(console.prompt("3? ").unwrap(), None);
        assert_eq!(console.prompts(), ["1? ", "2? ", "3? "]);
    }

    #[test]
    fn captures_output() {
        let console = ScriptedConsole::default();
        console.say("hello");
        console.say("");
        assert_eq!(console.output(), ["hello", ""]);
    }
}
