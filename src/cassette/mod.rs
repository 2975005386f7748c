//! Session cassettes: YAML transcripts of port interactions.
//!
//! A cassette captures every clock read and console answer of one run so
//! the run can be replayed later without a terminal or a moving date.

pub mod format;
pub mod recorder;
pub mod replayer;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::{CassetteReplayer, ReplayError};
