//! In-memory display surface

use dynclock_application::ports::DisplaySurface;
use parking_lot::Mutex;

/// Display surface keeping its text in memory.
///
/// Also records every write, which lets embedders and tests observe what
/// a run of ticks displayed.
#[derive(Debug, Default)]
pub struct MemorySurface {
    writes: Mutex<Vec<String>>,
}

impl MemorySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible text (empty before the first write).
    #[must_use]
    pub fn text(&self) -> String {
        self.writes.lock().last().cloned().unwrap_or_default()
    }

    /// Every text written so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    /// Number of writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&self, text: &str) {
        self.writes.lock().push(text.to_owned());
    }
}
