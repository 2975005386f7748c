//! Port implementations.
//!
//! - [`live`]: the real terminal and system date.
//! - [`fixed`] / [`scripted`]: deterministic stand-ins for tests and `--today`.
//! - [`recording`] / [`replaying`]: capture a run to a cassette and play it back.

pub mod fixed;
pub mod live;
pub mod recording;
pub mod replaying;
pub mod scripted;
