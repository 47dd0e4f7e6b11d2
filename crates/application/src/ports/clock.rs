//! Clock port for time-related operations

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a simulated implementation.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
