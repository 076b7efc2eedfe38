//! Periodic trigger for `keeper-watch watch`.
//!
//! Cycles run one after another on a fixed interval; a cycle that overruns
//! the interval delays the next tick instead of overlapping it. A failed cycle
//! has already been logged by [`handler`] and the next tick simply tries again.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::handler::{MonitorContext, Trigger, handler};

/// Counts of a finished schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub cycles: u64,
    pub failed: u64,
    pub alerts: u64,
}

pub struct Schedule {
    pub every: Duration,
    pub max_cycles: Option<u64>,
}

impl Schedule {
    /// Runs until `shutdown` resolves or `max_cycles` cycles have completed.
    /// Shutdown is only observed between cycles.
    pub async fn run<F>(&self, ctx: &MonitorContext, shutdown: F) -> ScheduleSummary
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut summary = ScheduleSummary::default();
        loop {
            if self.max_cycles.is_some_and(|max| summary.cycles >= max) {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {}
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping schedule");
                    break;
                }
            }

            summary.cycles += 1;
            let trigger = Trigger::Scheduled {
                tick: summary.cycles,
            };
            match handler(ctx, trigger, Utc::now()).await {
                Ok(report) => summary.alerts += report.stale_jobs.len() as u64,
                Err(_) => summary.failed += 1,
            }
        }

        info!(
            cycles = summary.cycles,
            failed = summary.failed,
            alerts = summary.alerts,
            "schedule finished"
        );
        summary
    }
}

/// Resolves when `signal` fires. If the signal cannot be installed the
/// schedule keeps running, bounded only by its cycle cap.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "cannot listen for shutdown signal, running until the cycle limit");
        std::future::pending::<()>().await;
    }
}
