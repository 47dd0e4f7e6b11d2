//! Update clock use case.

use dynclock_domain::{SurfaceId, TimeFormat};

use crate::ports::{Clock, SurfaceLocator};

/// What a single clock update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The surface was found and now shows this text.
    Written(String),
    /// No surface is registered under the identifier; nothing changed.
    SurfaceMissing,
}

/// Use case writing the current time into a display surface.
pub struct UpdateClock<C: Clock, L: SurfaceLocator> {
    clock: C,
    locator: L,
    surface_id: SurfaceId,
    format: TimeFormat,
}

impl<C: Clock, L: SurfaceLocator> UpdateClock<C, L> {
    /// Creates a new `UpdateClock` use case.
    #[must_use]
    pub const fn new(clock: C, locator: L, surface_id: SurfaceId, format: TimeFormat) -> Self {
        Self {
            clock,
            locator,
            surface_id,
            format,
        }
    }

    /// The identifier of the surface this use case writes into.
    #[must_use]
    pub const fn surface_id(&self) -> &SurfaceId {
        &self.surface_id
    }

    /// Writes the current time into the surface, if it exists.
    ///
    /// The surface is looked up on every call. A missing surface is not an
    /// error: the update is skipped and the next call checks again.
    pub fn execute(&self) -> UpdateOutcome {
        let Some(surface) = self.locator.locate(&self.surface_id) else {
            return UpdateOutcome::SurfaceMissing;
        };

        let text = self.format.format(&self.clock.now());
        surface.set_text(&text);
        UpdateOutcome::Written(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use dynclock_domain::HourCycle;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{FixedClock, Page, local_time};

    fn one_pm_ish() -> FixedClock {
        FixedClock(local_time(13, 5, 9))
    }

    #[test]
    fn writes_formatted_local_time() {
        let page = Arc::new(Page::default());
        let label = page.attach(SurfaceId::dynamic_clock());

        let update = UpdateClock::new(
            one_pm_ish(),
            Arc::clone(&page),
            SurfaceId::dynamic_clock(),
            TimeFormat::new(HourCycle::H12),
        );

        assert_eq!(
            update.execute(),
            UpdateOutcome::Written("01:05:09 PM".to_owned())
        );
        assert_eq!(label.text(), "01:05:09 PM");
    }

    #[test]
    fn uses_the_offset_wall_clock() {
        let page = Arc::new(Page::default());
        let label = page.attach(SurfaceId::dynamic_clock());

        let update = UpdateClock::new(
            one_pm_ish(),
            page,
            SurfaceId::dynamic_clock(),
            TimeFormat::new(HourCycle::H23),
        );
        update.execute();

        assert_eq!(label.text(), "13:05:09");
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let page = Arc::new(Page::default());
        let other = page.attach(SurfaceId::new("other").unwrap());

        let update = UpdateClock::new(
            one_pm_ish(),
            page,
            SurfaceId::dynamic_clock(),
            TimeFormat::default(),
        );

        assert_eq!(update.execute(), UpdateOutcome::SurfaceMissing);
        assert!(other.history().is_empty());
    }

    #[test]
    fn surface_is_looked_up_on_every_call() {
        let page = Arc::new(Page::default());
        let update = UpdateClock::new(
            one_pm_ish(),
            Arc::clone(&page),
            SurfaceId::dynamic_clock(),
            TimeFormat::default(),
        );
        assert_eq!(update.execute(), UpdateOutcome::SurfaceMissing);

        let label = page.attach(SurfaceId::dynamic_clock());
        assert_eq!(
            update.execute(),
            UpdateOutcome::Written("13:05:09".to_owned())
        );

        page.detach(&SurfaceId::dynamic_clock());
        assert_eq!(update.execute(), UpdateOutcome::SurfaceMissing);
        assert_eq!(label.history(), vec!["13:05:09".to_owned()]);
    }
}
