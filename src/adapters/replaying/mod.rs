//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod console;

use std::sync::{Arc, Mutex, PoisonError};

use crate::cassette::format::Interaction;
use crate::cassette::replayer::{CassetteReplayer, ReplayError};

pub use clock::ReplayingClock;
pub use console::ReplayingConsole;

/// Replayer shared by the replaying adapters of one session.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Takes the next recorded interaction for `port::method`.
pub(crate) fn next_interaction(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
) -> Result<Interaction, ReplayError> {
    replayer.lock().unwrap_or_else(PoisonError::into_inner).next_interaction(port, method)
}
