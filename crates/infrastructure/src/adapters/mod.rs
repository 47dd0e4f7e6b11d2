//! Infrastructure adapters

mod manual_clock;
mod memory_surface;
mod surface_registry;
mod system_clock;
mod terminal_surface;

pub use manual_clock::ManualClock;
pub use memory_surface::MemorySurface;
pub use surface_registry::SurfaceRegistry;
pub use system_clock::SystemClock;
pub use terminal_surface::TerminalSurface;
