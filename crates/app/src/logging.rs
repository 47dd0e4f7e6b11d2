//! Logging setup.
//!
//! Tracing starts before settings are read, so settings loading can log.
//! The filter from the settings file is swapped in afterwards unless
//! `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Filter used until the settings are known.
const BOOT_FILTER: &str = "info";

/// Handle to the installed subscriber's filter.
pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    env_override: bool,
}

/// Installs the global subscriber, logging to stderr so stdout carries
/// only the clock line.
pub fn init() -> Logging {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_override = env_directive(rust_log.as_deref()).is_some();
    let (filter, handle) =
        reload::Layer::new(EnvFilter::new(pick_filter(rust_log.as_deref(), BOOT_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Logging {
        handle,
        env_override,
    }
}

impl Logging {
    /// Switches to the filter from the settings file, unless `RUST_LOG`
    /// was given.
    pub fn apply_settings(&self, configured: &str) {
        if self.env_override {
            return;
        }
        if let Err(err) = self.handle.reload(EnvFilter::new(configured)) {
            tracing::warn!(error = %err, "failed to apply log filter from settings");
        }
    }
}

fn env_directive(rust_log: Option<&str>) -> Option<&str> {
    rust_log.filter(|v| !v.trim().is_empty())
}

/// `RUST_LOG` wins over the configured filter.
fn pick_filter<'a>(rust_log: Option<&'a str>, configured: &'a str) -> &'a str {
    env_directive(rust_log).unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(pick_filter(Some("debug"), "warn"), "debug");
    }

    #[test]
    fn configured_filter_when_rust_log_unset_or_blank() {
        assert_eq!(pick_filter(None, "warn"), "warn");
        assert_eq!(pick_filter(Some("  "), "warn"), "warn");
    }
}
