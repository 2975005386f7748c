//! Binary entrypoint for the `taskrank` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    taskrank::logging::init();

    match taskrank::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
