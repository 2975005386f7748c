//! Port traits defining external boundaries.
//!
//! The scoring core never touches these; they sit between the commands and
//! the outside world (wall-clock date, terminal). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod console;

pub use clock::Clock;
pub use console::{Console, PortError};
