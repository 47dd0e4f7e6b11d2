//! Surface registry adapter
//!
//! The registry plays the part of the page: it owns the mapping from
//! identifiers to display surfaces, and the clock finds its surface here.

use std::collections::HashMap;
use std::sync::Arc;

use dynclock_application::ports::{DisplaySurface, SurfaceLocator};
use dynclock_domain::SurfaceId;
use parking_lot::RwLock;

/// Thread-safe registry of display surfaces.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: RwLock<HashMap<SurfaceId, Arc<dyn DisplaySurface>>>,
}

impl SurfaceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` under `id`, returning the surface it replaced.
    pub fn attach(
        &self,
        id: SurfaceId,
        surface: Arc<dyn DisplaySurface>,
    ) -> Option<Arc<dyn DisplaySurface>> {
        tracing::debug!(surface = %id, "surface attached");
        self.surfaces.write().insert(id, surface)
    }

    /// Removes the surface registered under `id`.
    pub fn detach(&self, id: &SurfaceId) -> Option<Arc<dyn DisplaySurface>> {
        let removed = self.surfaces.write().remove(id);
        if removed.is_some() {
            tracing::debug!(surface = %id, "surface detached");
        }
        removed
    }

    /// Returns true if a surface is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &SurfaceId) -> bool {
        self.surfaces.read().contains_key(id)
    }

    /// Number of registered surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.read().len()
    }

    /// Returns true if no surface is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.read().is_empty()
    }
}

impl std::fmt::Debug for SurfaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self
            .surfaces
            .read()
            .keys()
            .map(SurfaceId::to_string)
            .collect();
        ids.sort();
        f.debug_struct("SurfaceRegistry")
            .field("surfaces", &ids)
            .finish()
    }
}

impl SurfaceLocator for SurfaceRegistry {
    fn locate(&self, id: &SurfaceId) -> Option<Arc<dyn DisplaySurface>> {
        self.surfaces.read().get(id).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::adapters::MemorySurface;

    #[test]
    fn attach_locate_detach() {
        let registry = SurfaceRegistry::new();
        let id = SurfaceId::dynamic_clock();
        assert!(registry.is_empty());
        assert!(registry.locate(&id).is_none());

        let surface = Arc::new(MemorySurface::new());
        assert!(registry.attach(id.clone(), surface.clone()).is_none());
        assert!(registry.contains(&id));
        assert_eq!(registry.len(), 1);

        registry.locate(&id).unwrap().set_text("12:00:00");
        assert_eq!(surface.text(), "12:00:00");

        assert!(registry.detach(&id).is_some());
        assert!(registry.locate(&id).is_none());
        assert!(registry.detach(&id).is_none());
    }

    #[test]
    fn attach_replaces_existing_surface() {
        let registry = SurfaceRegistry::new();
        let id = SurfaceId::dynamic_clock();
        let first = Arc::new(MemorySurface::new());
        let second = Arc::new(MemorySurface::new());

        registry.attach(id.clone(), first.clone());
        assert!(registry.attach(id.clone(), second.clone()).is_some());

        registry.locate(&id).unwrap().set_text("08:15:00");
        assert_eq!(first.text(), "");
        assert_eq!(second.text(), "08:15:00");
    }

    #[test]
    fn debug_lists_identifiers() {
        let registry = SurfaceRegistry::new();
        registry.attach(SurfaceId::new("b").unwrap(), Arc::new(MemorySurface::new()));
        registry.attach(SurfaceId::new("a").unwrap(), Arc::new(MemorySurface::new()));
        assert_eq!(
            format!("{registry:?}"),
            r#"SurfaceRegistry { surfaces: ["a", "b"] }"#
        );
    }
}
