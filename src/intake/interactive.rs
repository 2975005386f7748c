//! Interactive task entry over the [`Console`] port.

use crate::error::Error;
use crate::intake::{self, ValidationError};
use crate::ports::Console;
use crate::task::Task;

const COUNT_HINT: &str = "Just enter a positive number.";

/// Walks the user through entering a list of tasks.
///
/// Every field is re-prompted until it validates; the reason for each
/// rejection is echoed back before asking again.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] if input ends mid-dialogue, or
/// [`Error::Console`] if the console cannot be read.
pub fn collect_tasks(console: &dyn Console) -> Result<Vec<Task>, Error> {
    console.say("--- Task Sorter ---");

    let count = ask_until(
        console,
        "How many tasks do you have? ",
        |text| intake::parse_number(text, intake::TASK_COUNT),
        |_| COUNT_HINT.to_string(),
    )?;
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    tracing::debug!(count, "collecting tasks interactively");

    let mut tasks = Vec::with_capacity(count.min(64));
    for i in 1..=count {
        console.say("");
        console.say(&format!("Details for Task #{i}"));
        tasks.push(collect_task(console)?);
    }
    Ok(tasks)
}

fn collect_task(console: &dyn Console) -> Result<Task, Error> {
    let name = intake::normalize_name(&ask(console, "Name: ")?);
    let deadline = ask_until(
        console,
        "Deadline (DD/MM/YYYY): ",
        intake::parse_deadline,
        ToString::to_string,
    )?;
    let importance = ask_until(
        console,
        "Importance (1-5): ",
        |text| intake::parse_number(text, intake::IMPORTANCE).and_then(intake::importance),
        ToString::to_string,
    )?;
    let effort = ask_until(
        console,
        "Minutes needed (0-480): ",
        |text| intake::parse_number(text, intake::EFFORT).and_then(intake::effort),
        ToString::to_string,
    )?;
    let dependencies = ask_until(
        console,
        "Dependencies (0+): ",
        |text| intake::parse_number(text, intake::DEPENDENCIES).and_then(intake::dependencies),
        ToString::to_string,
    )?;

    Ok(Task::new(name, deadline, importance, effort, dependencies))
}

fn ask(console: &dyn Console, message: &str) -> Result<String, Error> {
    console
        .prompt(message)
        .map_err(|e| Error::Console(e.to_string()))?
        .ok_or(Error::InputClosed)
}

fn ask_until<T>(
    console: &dyn Console,
    message: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
    explain: impl Fn(&ValidationError) -> String,
) -> Result<T, Error> {
    loop {
        let answer = ask(console, message)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(prompt = message.trim(), input = %answer, error = %err, "rejected input");
                console.say(&explain(&err));
            }
        }
    }
}
