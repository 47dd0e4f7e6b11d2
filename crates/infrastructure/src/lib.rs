//! Dynclock Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus host locale detection
//! and settings persistence.

pub mod adapters;
pub mod locale;
pub mod persistence;

pub use adapters::{
    ManualClock, MemorySurface, SurfaceRegistry, SystemClock, TerminalSurface,
};
pub use locale::HostLocale;
pub use persistence::{SettingsError, SettingsRepository};
