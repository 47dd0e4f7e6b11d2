//! Use cases for the clock.

mod update_clock;

pub use update_clock::{UpdateClock, UpdateOutcome};
