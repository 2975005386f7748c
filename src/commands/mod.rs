//! Command dispatch and handlers.

pub mod rank;
pub mod score;

use chrono::NaiveDate;

use crate::cli::Command;
use crate::config::{Config, SessionMode};
use crate::context::ServiceContext;
use crate::error::Error;

/// Dispatch a parsed command to its handler.
///
/// Port wiring follows the environment: `TASKRANK_RECORD=<file>` records the
/// session's clock and console interactions to a cassette, and
/// `TASKRANK_REPLAY=<file>` replays one.
///
/// # Errors
///
/// Returns the handler's error, or a configuration/recording error.
pub fn dispatch(command: &Command) -> Result<(), Error> {
    let config = Config::from_env()?;
    let ctx = match &config.session {
        SessionMode::Live => ServiceContext::live(),
        SessionMode::Record(path) => ServiceContext::recording(path),
        SessionMode::Replay(path) => ServiceContext::replaying(path)?,
    };
    tracing::debug!(session = ?config.session, "dispatching command");

    let ctx = match requested_today(command).or(config.today) {
        Some(date) => {
            tracing::debug!(%date, "pinning reference date");
            ctx.override_today(date)
        }
        None => ctx,
    };

    let result = dispatch_with_context(command, &ctx);

    // The recording is written even when the command failed.
    match ctx.finish() {
        Ok(Some(path)) => eprintln!("Recording saved to: {}", path.display()),
        Ok(None) => {}
        Err(e) if result.is_err() => tracing::warn!(error = %e, "recording lost"),
        Err(e) => return Err(e),
    }
    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns the handler's error.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), Error> {
    match command {
        Command::Rank(args) => rank::run(ctx, args),
        Command::Score(args) => score::run(ctx, args),
    }
}

fn requested_today(command: &Command) -> Option<NaiveDate> {
    match command {
        Command::Rank(args) => args.today,
        Command::Score(args) => args.today,
    }
}
