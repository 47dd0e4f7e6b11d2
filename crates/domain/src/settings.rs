//! Clock Settings Domain Model
//!
//! Defines the user-adjustable settings of the clock host.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult, SurfaceId};

/// Settings for the clock host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// Surface the clock writes into.
    #[serde(default)]
    pub surface_id: SurfaceId,

    /// Interval between updates, in milliseconds.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_tick_period_ms() -> u64 {
    1000
}

fn default_log_filter() -> String {
    "info".to_owned()
}

impl ClockSettings {
    /// Returns the tick period as a [`Duration`].
    #[must_use]
    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTickPeriod`] for a zero tick period.
    pub fn validate(&self) -> DomainResult<()> {
        if self.tick_period_ms == 0 {
            return Err(DomainError::InvalidTickPeriod(self.tick_period_ms));
        }
        Ok(())
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            surface_id: SurfaceId::default(),
            tick_period_ms: default_tick_period_ms(),
            log_filter: default_log_filter(),
        }
    }
}
