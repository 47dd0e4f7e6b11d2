//! Periodic clock ticker.
//!
//! Drives an [`UpdateClock`] from a tokio task at a fixed period. The task
//! is owned through a [`TickerHandle`]: cancelling or dropping the handle
//! stops it.

use std::sync::Arc;
use std::time::Duration;

use dynclock_domain::DomainError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::ports::{Clock, SurfaceLocator};
use crate::use_cases::UpdateClock;
use crate::{ApplicationError, ApplicationResult};

/// Starts periodic clock updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTicker;

impl ClockTicker {
    /// Spawns a task running `updater` once every `period`.
    ///
    /// The first update happens one full period after the call. Updates run
    /// one at a time; a tick missed because the runtime was busy is
    /// skipped rather than replayed.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTickPeriod`] for a zero period.
    pub fn spawn<C, L>(
        updater: Arc<UpdateClock<C, L>>,
        period: Duration,
    ) -> ApplicationResult<TickerHandle>
    where
        C: Clock + 'static,
        L: SurfaceLocator + 'static,
    {
        if period.is_zero() {
            return Err(DomainError::InvalidTickPeriod(0).into());
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        tracing::info!(
            surface = %updater.surface_id(),
            ?period,
            "clock ticker started"
        );

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut ticks = 0_u64;
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => break,
                    _ = interval.tick() => {
                        ticks += 1;
                        updater.execute();
                    }
                }
            }
            ticks
        });

        Ok(TickerHandle {
            shutdown_tx,
            task: Some(task),
        })
    }
}

/// Owned handle to a running clock ticker.
///
/// Dropping the handle aborts the ticker task.
#[derive(Debug)]
pub struct TickerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<u64>>,
}

impl TickerHandle {
    /// Returns true once the ticker task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stops the ticker and waits for the task to exit.
    ///
    /// Returns the number of ticks that ran.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::TickerFailed`] if the task panicked.
    pub async fn cancel(mut self) -> ApplicationResult<u64> {
        let _ = self.shutdown_tx.send(true);
        let Some(task) = self.task.take() else {
            return Ok(0);
        };
        let ticks = task
            .await
            .map_err(|e| ApplicationError::TickerFailed(e.to_string()))?;
        tracing::debug!(ticks, "clock ticker stopped");
        Ok(ticks)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
