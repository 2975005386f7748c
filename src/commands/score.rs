//! `taskrank score` command.

use crate::cli::ScoreArgs;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::intake::RawTask;
use crate::scoring::{self, DEPENDENCY_WEIGHT, EFFORT_WEIGHT, IMPORTANCE_WEIGHT, URGENCY_WEIGHT};

/// Execute the `score` command: print one task's priority score.
///
/// # Errors
///
/// Returns a validation error if any flag is out of its domain.
pub fn run(ctx: &ServiceContext, args: &ScoreArgs) -> Result<(), Error> {
    let task = RawTask {
        name: &args.name,
        deadline: &args.deadline,
        importance: args.importance,
        effort: args.effort,
        dependencies: args.dependencies,
    }
    .validate()?;

    let today = ctx.clock.today();
    let breakdown = scoring::breakdown(&task, today);
    ctx.console.say(&format!("{}: {:.2}", task.name, breakdown.total));

    if args.explain {
        for (label, value, weight) in [
            ("urgency", breakdown.urgency, URGENCY_WEIGHT),
            ("importance", breakdown.importance, IMPORTANCE_WEIGHT),
            ("effort", breakdown.effort, EFFORT_WEIGHT),
            ("dependencies", breakdown.dependencies, DEPENDENCY_WEIGHT),
        ] {
            ctx.console.say(&format!("  {label:<12} {value:.2} x {weight:.2}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedClock;
    use crate::adapters::scripted::ScriptedConsole;
    use crate::intake::ValidationError;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn run_score(args: &ScoreArgs) -> (Result<(), Error>, Vec<String>) {
        let console = Arc::new(ScriptedConsole::default());
        let ctx = ServiceContext::with_ports(
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())),
            Box::new(Arc::clone(&console)),
        );
        let result = run(&ctx, args);
        (result, console.output())
    }

    fn args() -> ScoreArgs {
        ScoreArgs {
            name: "Ship".into(),
            deadline: "15/06/2025".into(),
            importance: 5,
            effort: 0,
            dependencies: 5,
            today: None,
            explain: false,
        }
    }

    #[test]
    fn prints_score() {
        let (result, output) = run_score(&args());
        result.unwrap();
        assert_eq!(output, ["Ship: 1.00"]);
    }

    #[test]
    fn explain_prints_each_term() {
        let (result, output) = run_score(&ScoreArgs { explain: true, ..args() });
        result.unwrap();
        assert_eq!(output.len(), 5);
        assert_eq!(output[1], "  urgency      1.00 x 0.40");
    }

    #[test]
    fn unnamed_task_is_untitled() {
        let (_, output) = run_score(&ScoreArgs { name: String::new(), ..args() });
        assert!(output[0].starts_with("Untitled: "));
    }

    #[test]
    fn rejects_out_of_range_flags() {
        let (result, output) = run_score(&ScoreArgs { importance: 7, ..args() });
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::OutOfRange { value: 7, .. }))
        ));
        assert!(output.is_empty());
    }
}
