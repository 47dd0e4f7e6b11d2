//! Dynclock Domain - Core clock types
//!
//! This crate defines the domain model for the dynclock live clock.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod locale;
pub mod settings;
pub mod surface;
pub mod time_format;

pub use error::{DomainError, DomainResult};
pub use locale::{HourCycle, LocaleTag};
pub use settings::ClockSettings;
pub use surface::{DYNAMIC_CLOCK_ID, SurfaceId};
pub use time_format::TimeFormat;
