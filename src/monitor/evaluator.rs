use alloy::primitives::Address;
use tracing::debug;

use super::model::KeeperNetwork;
use super::ports::{ChainPort, JobPort};
use super::window::BlockWindow;
use crate::chain::ChainError;

/// Decides whether a job reported itself workable anywhere in a block window.
pub struct WorkabilityEvaluator<'a, C, J> {
    chain: &'a C,
    jobs: &'a J,
    network: &'a KeeperNetwork,
}

impl<'a, C: ChainPort, J: JobPort> WorkabilityEvaluator<'a, C, J> {
    pub fn new(chain: &'a C, jobs: &'a J, network: &'a KeeperNetwork) -> Self {
        Self {
            chain,
            jobs,
            network,
        }
    }

    /// Scans `window` newest first and stops at the first `canWork = true`.
    ///
    /// Issues at most `window.size()` predicate calls. Any chain failure aborts
    /// the scan and is returned unchanged.
    pub async fn evaluate(&self, job: Address, window: BlockWindow) -> Result<bool, ChainError> {
        let current = self.chain.block_number().await?;

        for at in window.targets(current) {
            let outcome = self.jobs.workable(job, self.network.id(), at).await?;
            if outcome.can_work {
                debug!(%job, block = ?at, network = %self.network, "job reported workable");
                return Ok(true);
            }
        }

        debug!(%job, head = current, window = window.size(), "job not workable in window");
        Ok(false)
    }
}
