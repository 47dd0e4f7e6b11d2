//! In-memory fakes for the ports, shared by the unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use dynclock_domain::SurfaceId;
use parking_lot::Mutex;

use crate::ports::{Clock, DisplaySurface, SurfaceLocator};

pub fn local_time(h: u32, m: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 1, h, m, s)
        .unwrap()
}

pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Follows tokio's (possibly paused) clock from a fixed starting time.
pub struct PausedClock {
    base: DateTime<FixedOffset>,
    started: tokio::time::Instant,
}

impl PausedClock {
    pub fn starting_at(base: DateTime<FixedOffset>) -> Self {
        Self {
            base,
            started: tokio::time::Instant::now(),
        }
    }
}

impl Clock for PausedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.base + TimeDelta::from_std(self.started.elapsed()).unwrap()
    }
}

/// Surface recording every text written to it.
#[derive(Default)]
pub struct Label(Mutex<Vec<String>>);

impl Label {
    pub fn text(&self) -> String {
        self.0.lock().last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl DisplaySurface for Label {
    fn set_text(&self, text: &str) {
        self.0.lock().push(text.to_owned());
    }
}

#[derive(Default)]
pub struct Page(Mutex<HashMap<SurfaceId, Arc<Label>>>);

impl Page {
    pub fn attach(&self, id: SurfaceId) -> Arc<Label> {
        let label = Arc::new(Label::default());
        self.0.lock().insert(id, Arc::clone(&label));
        label
    }

    pub fn reattach(&self, id: SurfaceId, label: &Arc<Label>) {
        self.0.lock().insert(id, Arc::clone(label));
    }

    pub fn detach(&self, id: &SurfaceId) {
        self.0.lock().remove(id);
    }
}

impl SurfaceLocator for Page {
    fn locate(&self, id: &SurfaceId) -> Option<Arc<dyn DisplaySurface>> {
        self.0
            .lock()
            .get(id)
            .map(|label| Arc::clone(label) as Arc<dyn DisplaySurface>)
    }
}
