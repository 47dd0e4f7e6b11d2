//! Dynclock Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (clock, display surfaces)
//! - The clock update use case
//! - The owned periodic ticker that drives it

pub mod error;
pub mod ports;
pub mod ticker;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, DisplaySurface, SurfaceLocator};
pub use ticker::{ClockTicker, TickerHandle};
pub use use_cases::{UpdateClock, UpdateOutcome};
