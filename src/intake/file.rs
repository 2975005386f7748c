//! Batch task entry from a YAML or JSON file.
//!
//! ```yaml
//! - name: Write report
//!   deadline: 01/07/2025
//!   importance: 4
//!   effort: 90
//!   dependencies: 1
//! - deadline: 2025-08-15   # name defaults to "Untitled", dependencies to 0
//!   importance: 2
//!   effort: 15
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::intake::RawTask;
use crate::task::Task;

/// One entry of a task file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskEntry {
    #[serde(default)]
    name: String,
    deadline: String,
    importance: i64,
    effort: i64,
    #[serde(default)]
    dependencies: i64,
}

/// Loads and validates every task in `path`.
///
/// # Errors
///
/// Returns [`Error::TaskFile`] if the file cannot be read or parsed, and
/// [`Error::InvalidEntry`] for the first entry that fails validation.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, Error> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::TaskFile { path: path.to_path_buf(), message: e.to_string() })?;
    let tasks = parse_tasks(&content, path)?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded task file");
    Ok(tasks)
}

/// Parses and validates a task list from YAML (JSON is accepted too).
///
/// `origin` is only used to label parse errors.
///
/// # Errors
///
/// See [`load_tasks`].
pub fn parse_tasks(content: &str, origin: &Path) -> Result<Vec<Task>, Error> {
    let entries: Vec<TaskEntry> = serde_yaml::from_str(content)
        .map_err(|e| Error::TaskFile { path: origin.to_path_buf(), message: e.to_string() })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            RawTask {
                name: &entry.name,
                deadline: &entry.deadline,
                importance: entry.importance,
                effort: entry.effort,
                dependencies: entry.dependencies,
            }
            .validate()
            .map_err(|source| Error::InvalidEntry { index: i + 1, source })
        })
        .collect()
}
