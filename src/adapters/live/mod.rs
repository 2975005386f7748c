//! Live adapters for real external interactions.

pub mod clock;
pub mod console;

pub use clock::LiveClock;
pub use console::LiveConsole;
