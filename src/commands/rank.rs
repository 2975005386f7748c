//! `taskrank rank` command.

use crate::cli::{OutputFormat, RankArgs};
use crate::context::ServiceContext;
use crate::error::Error;
use crate::{intake, render, scoring};

/// Execute the `rank` command.
///
/// Collects tasks from `--input` or interactively, scores them against the
/// context's clock and prints them highest priority first.
///
/// # Errors
///
/// Returns an error if tasks cannot be collected or the output cannot be
/// rendered.
pub fn run(ctx: &ServiceContext, args: &RankArgs) -> Result<(), Error> {
    let tasks = match &args.input {
        Some(path) => intake::load_tasks(path)?,
        None => intake::collect_tasks(ctx.console.as_ref())?,
    };

    let today = ctx.clock.today();
    tracing::debug!(%today, count = tasks.len(), "ranking tasks");
    let ranked = scoring::rank_tasks(tasks, today);

    match args.format {
        OutputFormat::Table => {
            for line in render::table(&ranked, args.explain) {
                ctx.console.say(&line);
            }
        }
        OutputFormat::Json => ctx.console.say(&render::json(&ranked, args.explain)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedClock;
    use crate::adapters::scripted::ScriptedConsole;
    use crate::cli::OutputFormat;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn context(answers: &[&str]) -> (ServiceContext, Arc<ScriptedConsole>) {
        let console = Arc::new(ScriptedConsole::new(answers.iter().copied()));
        let ctx = ServiceContext::with_ports(
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())),
            Box::new(Arc::clone(&console)),
        );
        (ctx, console)
    }

    fn args(format: OutputFormat) -> RankArgs {
        RankArgs { input: None, today: None, format, explain: false }
    }

    #[test]
    fn ranks_interactively_entered_tasks() {
        let (ctx, console) = context(&[
            "2", "Someday", "14/08/2025", "1", "400", "0", "Now", "15/06/2025", "5", "10", "3",
        ]);

        run(&ctx, &args(OutputFormat::Table)).unwrap();

        let output = console.output();
        let rows: Vec<&String> =
            output.iter().filter(|l| l.starts_with("1 ") || l.starts_with("2 ")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Now"));
        assert!(rows[1].contains("Someday"));
    }

    #[test]
    fn json_output_is_a_single_document() {
        let (ctx, console) = context(&["1", "Only", "20/06/2025", "3", "60", "1"]);

        run(&ctx, &args(OutputFormat::Json)).unwrap();

        let last = console.output().pop().unwrap();
        let value: serde_json::Value = serde_json::from_str(&last).unwrap();
        assert_eq!(value[0]["name"], "Only");
    }

    #[test]
    fn closed_input_is_an_error() {
        let (ctx, _) = context(&["3"]);
        assert!(matches!(run(&ctx, &args(OutputFormat::Table)), Err(Error::InputClosed)));
    }

    #[test]
    fn reads_tasks_from_file() {
        let dir = std::env::temp_dir().join("taskrank_rank_file_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tasks.yaml");
        std::fs::write(
            &path,
            "- {name: B, deadline: 01/09/2025, importance: 1, effort: 300}\n\
             - {name: A, deadline: 16/06/2025, importance: 5, effort: 5, dependencies: 5}\n",
        )
        .unwrap();

        let (ctx, console) = context(&[]);
        let rank_args = RankArgs { input: Some(path), ..args(OutputFormat::Table) };
        run(&ctx, &rank_args).unwrap();

        let output = console.output();
        assert!(console.prompts().is_empty());
        let first = output.iter().find(|l| l.starts_with("1 ")).unwrap();
        assert!(first.contains(" A "));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
