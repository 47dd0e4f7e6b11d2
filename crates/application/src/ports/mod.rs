//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the clock core and its host.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod display_surface;

pub use clock::Clock;
pub use display_surface::{DisplaySurface, SurfaceLocator};
