//! Report rendering for ranked tasks.

use serde::Serialize;

use crate::error::Error;
use crate::scoring::ScoreBreakdown;
use crate::task::ScoredTask;

/// Width of the table rules.
const RULE_WIDTH: usize = 50;
/// `DD/MM/YYYY`, as shown in the table.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Renders the ranked tasks as a text table, one line per element.
///
/// With `explain`, each row also shows the urgency (`U`), importance (`I`),
/// effort (`E`) and dependency (`D`) sub-scores.
#[must_use]
pub fn table(ranked: &[ScoredTask], explain: bool) -> Vec<String> {
    let rule_width = if explain { RULE_WIDTH + 20 } else { RULE_WIDTH };
    let rule = "-".repeat(rule_width);

    let mut header = format!("{:<4} {:<20} {:<12} {}", "#", "Task", "Date", "Score");
    if explain {
        header.push_str(&format!("  {:>4} {:>4} {:>4} {:>4}", "U", "I", "E", "D"));
    }

    let mut lines =
        vec![String::new(), String::new(), "TODO LIST (Sorted)".to_string(), rule.clone(), header, rule];

    for (i, scored) in ranked.iter().enumerate() {
        let mut row = format!(
            "{:<4} {:<20} {:<12} {:.2}",
            i + 1,
            scored.task.name,
            scored.task.deadline.format(DATE_FORMAT).to_string(),
            scored.score,
        );
        if explain {
            let b = &scored.breakdown;
            row.push_str(&format!(
                "  {:>4.2} {:>4.2} {:>4.2} {:>4.2}",
                b.urgency, b.importance, b.effort, b.dependencies
            ));
        }
        lines.push(row);
    }
    lines
}

#[derive(Serialize)]
struct JsonRow<'a> {
    rank: usize,
    name: &'a str,
    deadline: chrono::NaiveDate,
    importance: u8,
    effort: u32,
    dependencies: u32,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a ScoreBreakdown>,
}

/// Renders the ranked tasks as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`Error::Render`] if serialization fails.
pub fn json(ranked: &[ScoredTask], explain: bool) -> Result<String, Error> {
    let rows: Vec<JsonRow<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(i, s)| JsonRow {
            rank: i + 1,
            name: &s.task.name,
            deadline: s.task.deadline,
            importance: s.task.importance,
            effort: s.task.effort,
            dependencies: s.task.dependencies,
            score: s.score,
            breakdown: explain.then_some(&s.breakdown),
        })
        .collect();
    serde_json::to_string_pretty(&rows).map_err(|e| Error::Render(e.to_string()))
}
