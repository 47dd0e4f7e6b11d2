//! Display surface ports

use std::sync::Arc;

use dynclock_domain::SurfaceId;

/// A UI element able to show a line of text.
pub trait DisplaySurface: Send + Sync {
    /// Replaces the visible text of the surface.
    fn set_text(&self, text: &str);
}

/// Port for finding display surfaces by identifier.
///
/// The host owns the surfaces; a surface may appear or disappear between
/// two lookups, so callers must not cache the returned handle.
pub trait SurfaceLocator: Send + Sync {
    /// Returns the surface registered under `id`, if any.
    fn locate(&self, id: &SurfaceId) -> Option<Arc<dyn DisplaySurface>>;
}

impl<L: SurfaceLocator + ?Sized> SurfaceLocator for Arc<L> {
    fn locate(&self, id: &SurfaceId) -> Option<Arc<dyn DisplaySurface>> {
        (**self).locate(id)
    }
}
