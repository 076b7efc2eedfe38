use alloy::primitives::{Address, B256, Bytes};

use super::window::BlockWindow;
use crate::error::WatchError;

/// A registered job as enumerated from the sequencer during one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub index: u64,
    pub address: Address,
}

/// Result of a single `workable` call. `args` is carried but never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkabilityOutcome {
    pub can_work: bool,
    pub args: Bytes,
}

/// Alert raised for a job that was not workable anywhere in its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub job_index: u64,
    pub job_address: Address,
    pub window_size: u64,
    pub message: String,
}

impl AlertEvent {
    pub fn stale(job: &Job, window: BlockWindow) -> Self {
        let window_size = window.size();
        Self {
            job_index: job.index,
            job_address: job.address,
            window_size,
            message: format!(
                "Job {} at address {} has NOT been workable in the last {} blocks.",
                job.index, job.address, window_size
            ),
        }
    }
}

/// Keeper network whose rules the `workable` predicate applies.
///
/// On chain the name travels as a `bytes32`: UTF-8, right-padded with zeros,
/// and short enough to keep a trailing zero byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeeperNetwork {
    name: String,
    id: B256,
}

impl KeeperNetwork {
    pub const MAX_NAME_LEN: usize = 31;

    pub fn new(name: &str) -> Result<Self, WatchError> {
        let bytes = name.as_bytes();
        if bytes.is_empty() {
            return Err(WatchError::InvalidNetwork("name must not be empty".into()));
        }
        if bytes.len() > Self::MAX_NAME_LEN {
            return Err(WatchError::InvalidNetwork(format!(
                "{name:?} is {} bytes, at most {} fit in a bytes32",
                bytes.len(),
                Self::MAX_NAME_LEN
            )));
        }
        let mut id = [0u8; 32];
        id[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            name: name.to_string(),
            id: B256::from(id),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> B256 {
        self.id
    }
}

impl std::fmt::Display for KeeperNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
