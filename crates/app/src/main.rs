//! Dynclock - Main Entry Point
//!
//! Shows the local time on the terminal, redrawn once per tick, until
//! Ctrl-C is pressed.

mod logging;

use std::sync::Arc;

use anyhow::Context;
use dynclock_application::{ClockTicker, UpdateClock};
use dynclock_infrastructure::{
    HostLocale, SettingsRepository, SurfaceRegistry, SystemClock, TerminalSurface,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging = logging::init();
    let settings = SettingsRepository::new()
        .load()
        .await
        .context("failed to load settings")?;
    logging.apply_settings(&settings.log_filter);

    let locale = HostLocale::detect();
    tracing::info!(locale = %locale.tag(), source = ?locale.source(), "detected host locale");

    // The terminal line is the only surface on this "page".
    let registry = Arc::new(SurfaceRegistry::new());
    let terminal = Arc::new(TerminalSurface::stdout());
    registry.attach(settings.surface_id.clone(), terminal.clone());

    let updater = Arc::new(UpdateClock::new(
        SystemClock::new(),
        Arc::clone(&registry),
        settings.surface_id.clone(),
        locale.time_format(),
    ));

    // Show the time right away instead of after the first period.
    updater.execute();
    let ticker = ClockTicker::spawn(Arc::clone(&updater), settings.tick_period())
        .context("failed to start clock ticker")?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    let ticks = ticker.cancel().await?;
    registry.detach(&settings.surface_id);
    terminal.finish().context("failed to end clock line")?;
    tracing::info!(ticks, "clock stopped");

    Ok(())
}
