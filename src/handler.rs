//! Process-level wiring and the single invocation entry point.

use std::fmt::Debug;
use std::time::Duration;

use alloy::primitives::Address;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::alert::DiscordWebhook;
use crate::chain::{ChainClient, Sequencer};
use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::monitor::{BlockWindow, CycleReport, KeeperNetwork, MonitorCycle};

/// Everything a cycle needs, built once per process and passed by reference.
pub struct MonitorContext {
    pub chain: ChainClient,
    pub sequencer: Sequencer,
    pub alerts: DiscordWebhook,
    pub network: KeeperNetwork,
    pub window: BlockWindow,
}

impl MonitorContext {
    pub fn from_config(config: &WatchConfig) -> Result<Self, WatchError> {
        config.validate()?;

        let chain = ChainClient::connect(&config.rpc_url)?;
        let registry: Address = config.sequencer_address.trim().parse().map_err(|e| {
            WatchError::Config(format!(
                "invalid sequencer address {:?}: {e}",
                config.sequencer_address
            ))
        })?;
        let alerts = DiscordWebhook::new(
            config.discord_webhook_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )?;

        Ok(Self {
            sequencer: Sequencer::new(chain.clone(), registry),
            chain,
            alerts,
            network: KeeperNetwork::new(&config.network)?,
            window: BlockWindow::new(config.block_window)?,
        })
    }

    pub fn cycle(&self) -> MonitorCycle<'_, ChainClient, Sequencer, ChainClient, DiscordWebhook> {
        MonitorCycle::new(
            &self.chain,
            &self.sequencer,
            &self.chain,
            &self.alerts,
            &self.network,
            self.window,
        )
    }
}

/// What fired the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Manual,
    Scheduled { tick: u64 },
}

/// Runs one monitoring cycle.
///
/// `event` and `context` describe the trigger and are only logged. Every call
/// gets a fresh invocation id on its `cycle` span. A failed cycle is logged
/// with its [`ErrorKind`](crate::error::ErrorKind) and returned so the caller
/// can apply its own retry policy.
pub async fn handler<E: Debug, C: Debug>(
    ctx: &MonitorContext,
    event: E,
    context: C,
) -> Result<CycleReport, WatchError> {
    let invocation = Uuid::new_v4();
    let span = info_span!(
        "cycle",
        %invocation,
        network = %ctx.network,
        window = ctx.window.size()
    );
    async move {
        debug!(?event, ?context, "trigger received");
        match ctx.cycle().run().await {
            Ok(report) => {
                info!(
                    block = report.block,
                    jobs = report.jobs_checked,
                    stale = report.stale_jobs.len(),
                    "monitoring cycle complete"
                );
                Ok(report)
            }
            Err(e) => {
                let err = WatchError::from(e);
                error!(kind = %err.kind(), error = %err, "monitoring cycle failed");
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}
