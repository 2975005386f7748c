//! Priority scoring and ranking.
//!
//! A task's score is a weighted sum of four normalized sub-scores:
//!
//! | term         | weight | sub-score                                   |
//! |--------------|--------|---------------------------------------------|
//! | urgency      | 0.40   | `1 - clamp(days_left, 0, 30) / 30`          |
//! | importance   | 0.30   | `clamp(importance, 1, 5) / 5`               |
//! | effort       | 0.15   | `1 - clamp(effort, 0, 480) / 480`           |
//! | dependencies | 0.15   | `clamp(dependencies, 0, 5) / 5`             |
//!
//! Scoring never fails: out-of-range inputs are clamped rather than rejected.
//! The reference date is always passed in, never read from a clock here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::task::{ScoredTask, Task};

/// Weight of the urgency term.
pub const URGENCY_WEIGHT: f64 = 0.40;
/// Weight of the importance term.
pub const IMPORTANCE_WEIGHT: f64 = 0.30;
/// Weight of the effort term.
pub const EFFORT_WEIGHT: f64 = 0.15;
/// Weight of the dependency term.
pub const DEPENDENCY_WEIGHT: f64 = 0.15;

/// Days-left beyond which a deadline no longer adds urgency.
pub const HORIZON_DAYS: u32 = 30;
/// Highest importance level.
pub const MAX_IMPORTANCE: u8 = 5;
/// Effort cap in minutes (one working day).
pub const MAX_EFFORT_MINUTES: u32 = 480;
/// Dependency count at which the dependency term saturates.
pub const MAX_DEPENDENCIES: u32 = 5;

/// The individual sub-scores of a task and their weighted total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// `1.0` when due today or overdue, `0.0` at or past the horizon.
    pub urgency: f64,
    /// Normalized importance, `0.2..=1.0`.
    pub importance: f64,
    /// Higher for quicker tasks.
    pub effort: f64,
    /// Normalized dependency count.
    pub dependencies: f64,
    /// Weighted sum, clamped to `[0, 1]`.
    pub total: f64,
}

/// Computes every sub-score of `task` relative to `today`.
#[must_use]
pub fn breakdown(task: &Task, today: NaiveDate) -> ScoreBreakdown {
    let days_left = (task.deadline - today).num_days();
    let effective_days = u32::try_from(days_left.clamp(0, i64::from(HORIZON_DAYS)))
        .unwrap_or(HORIZON_DAYS);

    let urgency = 1.0 - ratio(effective_days, HORIZON_DAYS);
    let importance = ratio(
        u32::from(task.importance.clamp(1, MAX_IMPORTANCE)),
        u32::from(MAX_IMPORTANCE),
    );
    let effort = 1.0 - ratio(task.effort, MAX_EFFORT_MINUTES);
    let dependencies = ratio(task.dependencies, MAX_DEPENDENCIES);

    let total = URGENCY_WEIGHT * urgency
        + IMPORTANCE_WEIGHT * importance
        + EFFORT_WEIGHT * effort
        + DEPENDENCY_WEIGHT * dependencies;

    ScoreBreakdown { urgency, importance, effort, dependencies, total: total.clamp(0.0, 1.0) }
}

/// Priority score of `task` relative to `today`, in `[0, 1]`.
#[must_use]
pub fn compute_score(task: &Task, today: NaiveDate) -> f64 {
    breakdown(task, today).total
}

/// Scores every task and orders them by descending score.
///
/// The sort is stable: tasks with exactly equal scores keep their input order.
/// The result always has the same length as the input.
#[must_use]
pub fn rank_tasks(tasks: Vec<Task>, today: NaiveDate) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = tasks
        .into_iter()
        .map(|task| {
            let breakdown = breakdown(&task, today);
            tracing::trace!(name = %task.name, score = breakdown.total, "scored task");
            ScoredTask { task, score: breakdown.total, breakdown }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// `min(value, max) / max`.
fn ratio(value: u32, max: u32) -> f64 {
    f64::from(value.min(max)) / f64::from(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn task(name: &str, days: i64, importance: u8, effort: u32, dependencies: u32) -> Task {
        Task::new(name, today() + Duration::days(days), importance, effort, dependencies)
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = URGENCY_WEIGHT + IMPORTANCE_WEIGHT + EFFORT_WEIGHT + DEPENDENCY_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn maximal_task_scores_one() {
        assert_eq!(compute_score(&task("max", 0, 5, 0, 5), today()), 1.0);
    }

    #[test]
    fn minimal_task_scores_importance_floor() {
        let score = compute_score(&task("min", 30, 1, 480, 0), today());
        assert!((score - 0.06).abs() < 1e-12, "got {score}");

        let far = compute_score(&task("far", 400, 1, 480, 0), today());
        assert!((far - 0.06).abs() < 1e-12, "got {far}");
    }

    #[test]
    fn overdue_is_fully_urgent() {
        for days in [-365, -30, -1, 0] {
            assert_eq!(breakdown(&task("t", days, 3, 60, 1), today()).urgency, 1.0);
        }
    }

    #[test]
    fn beyond_horizon_has_no_urgency() {
        for days in [30, 31, 60, 10_000] {
            assert_eq!(breakdown(&task("t", days, 3, 60, 1), today()).urgency, 0.0);
        }
    }

    #[test]
    fn halfway_to_horizon_is_half_urgent() {
        let b = breakdown(&task("t", 15, 3, 60, 1), today());
        assert!((b.urgency - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let wild = Task::new("wild", today(), 9, 10_000, 99);
        let b = breakdown(&wild, today());
        assert_eq!(b.importance, 1.0);
        assert_eq!(b.effort, 0.0);
        assert_eq!(b.dependencies, 1.0);

        let zero = Task::new("zero", today(), 0, 0, 0);
        assert!((breakdown(&zero, today()).importance - 0.2).abs() < 1e-12);
    }

    #[test]
    fn breakdown_total_matches_compute_score() {
        let t = task("t", 7, 4, 120, 2);
        assert_eq!(breakdown(&t, today()).total, compute_score(&t, today()));
    }

    #[test]
    fn quick_important_task_due_today_beats_slow_distant_one() {
        let a = task("A", 0, 5, 10, 3);
        let b = task("B", 60, 1, 400, 0);
        let ranked = rank_tasks(vec![b, a], today());
        assert_eq!(ranked[0].task.name, "A");
        assert_eq!(ranked[1].task.name, "B");
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let tasks = vec![
            task("first", 10, 3, 60, 1),
            task("top", 0, 5, 0, 5),
            task("second", 10, 3, 60, 1),
            task("third", 10, 3, 60, 1),
        ];
        let names: Vec<String> =
            rank_tasks(tasks, today()).into_iter().map(|s| s.task.name).collect();
        assert_eq!(names, ["top", "first", "second", "third"]);
    }

    #[test]
    fn rank_empty_list() {
        assert!(rank_tasks(Vec::new(), today()).is_empty());
    }

    #[test]
    fn scored_task_carries_score() {
        let ranked = rank_tasks(vec![task("x", 3, 2, 30, 0)], today());
        assert_eq!(ranked[0].score, ranked[0].breakdown.total);
    }
}
