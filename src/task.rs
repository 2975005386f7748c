//! Task records and their scored form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoreBreakdown;

/// A validated task as entered by the user.
///
/// Field domains are enforced by `intake`; scoring clamps again on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display label.
    pub name: String,
    /// Due date, no time component.
    pub deadline: NaiveDate,
    /// Importance on a 1-5 scale.
    pub importance: u8,
    /// Estimated effort in minutes (0-480).
    pub effort: u32,
    /// Number of blocking dependencies.
    pub dependencies: u32,
}

impl Task {
    /// Creates a task from already-validated fields.
    pub fn new(
        name: impl Into<String>,
        deadline: NaiveDate,
        importance: u8,
        effort: u32,
        dependencies: u32,
    ) -> Self {
        Self { name: name.into(), deadline, importance, effort, dependencies }
    }
}

/// A task annotated with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    /// The scored task.
    #[serde(flatten)]
    pub task: Task,
    /// Weighted priority in `[0, 1]`.
    pub score: f64,
    /// Sub-scores that produced `score`.
    #[serde(skip)]
    pub breakdown: ScoreBreakdown,
}
