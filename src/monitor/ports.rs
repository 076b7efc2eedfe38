//! Seams between the monitoring core and the outside world.
//!
//! The chain, registry and job ports are read-only and may fail; their errors
//! are always cycle-fatal. The alert port cannot fail from the caller's point of
//! view: delivery problems are handled (and logged) by the implementation.

use alloy::primitives::{Address, B256};

use super::model::{AlertEvent, WorkabilityOutcome};
use crate::chain::ChainError;

pub trait ChainPort {
    /// Latest block height known to the node.
    async fn block_number(&self) -> Result<u64, ChainError>;
}

pub trait RegistryPort {
    /// Number of jobs currently registered.
    async fn num_jobs(&self) -> Result<u64, ChainError>;

    /// Address of the job at `index` (`0 <= index < num_jobs`).
    async fn job_at(&self, index: u64) -> Result<Address, ChainError>;
}

pub trait JobPort {
    /// Evaluates `workable(network)` on `job`, pinned to block `at` when given,
    /// otherwise against the latest state.
    async fn workable(
        &self,
        job: Address,
        network: B256,
        at: Option<u64>,
    ) -> Result<WorkabilityOutcome, ChainError>;
}

pub trait AlertPort {
    /// Best-effort delivery. Never surfaces a failure to the caller.
    async fn deliver(&self, event: &AlertEvent);
}
