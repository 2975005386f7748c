//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_VAR;

/// Installs a stderr `tracing` subscriber filtered by `TASKRANK_LOG`
/// (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
