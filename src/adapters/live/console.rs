//! Live console over stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::ports::console::{Console, PortError};

/// Prompts on stdout and reads answers from stdin.
pub struct LiveConsole;

impl Console for LiveConsole {
    fn prompt(&self, message: &str) -> Result<Option<String>, PortError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }

    fn say(&self, line: &str) {
        println!("{line}");
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
