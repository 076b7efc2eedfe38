//! In-memory ports that record every call, shared by the monitor tests.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::{Address, B256, Bytes};

use super::model::{AlertEvent, WorkabilityOutcome};
use super::ports::{AlertPort, ChainPort, JobPort, RegistryPort};
use crate::chain::ChainError;

pub struct MockChain {
    height: Option<u64>,
    queries: Mutex<u32>,
}

impl MockChain {
    pub fn at(height: u64) -> Self {
        Self {
            height: Some(height),
            queries: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            height: None,
            queries: Mutex::new(0),
        }
    }

    pub fn height_queries(&self) -> u32 {
        *self.queries.lock().unwrap()
    }
}

impl ChainPort for MockChain {
    async fn block_number(&self) -> Result<u64, ChainError> {
        *self.queries.lock().unwrap() += 1;
        self.height
            .ok_or_else(|| ChainError::Malformed("eth_blockNumber timed out".into()))
    }
}

/// How a mocked job answers `workable`, keyed by offset from the head.
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Never,
    WorkableAt(u64),
    FailAt(u64),
}

pub struct MockJobs {
    head: u64,
    behaviours: HashMap<Address, Behaviour>,
    calls: Mutex<Vec<(Address, B256, Option<u64>)>>,
}

impl MockJobs {
    pub fn new(head: u64) -> Self {
        Self {
            head,
            behaviours: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, job: Address, behaviour: Behaviour) -> Self {
        self.behaviours.insert(job, behaviour);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn heights_for(&self, job: Address) -> Vec<Option<u64>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(address, _, _)| *address == job)
            .map(|(_, _, at)| *at)
            .collect()
    }

    pub fn jobs_called(&self) -> Vec<Address> {
        let mut seen: Vec<Address> = Vec::new();
        for (address, _, _) in self.calls.lock().unwrap().iter() {
            if seen.last() != Some(address) {
                seen.push(*address);
            }
        }
        seen
    }

    pub fn networks_seen(&self) -> Vec<B256> {
        let mut seen: Vec<B256> = self
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, network, _)| *network)
            .collect();
        seen.dedup();
        seen
    }
}

impl JobPort for MockJobs {
    async fn workable(
        &self,
        job: Address,
        network: B256,
        at: Option<u64>,
    ) -> Result<WorkabilityOutcome, ChainError> {
        self.calls.lock().unwrap().push((job, network, at));
        let offset = at.map(|height| self.head - height).unwrap_or(0);
        match self.behaviours.get(&job).copied().unwrap_or(Behaviour::Never) {
            Behaviour::WorkableAt(k) if k == offset => {
                Ok(WorkabilityOutcome {
                    can_work: true,
                    args: Bytes::from_static(b"args"),
                })
            }
            Behaviour::FailAt(k) if k == offset => {
                Err(ChainError::Malformed(format!("eth_call failed at offset {k}")))
            }
            _ => Ok(WorkabilityOutcome {
                can_work: false,
                args: Bytes::new(),
            }),
        }
    }
}

pub struct MockRegistry {
    jobs: Vec<Address>,
    count_fails: bool,
    reported_count: Option<u64>,
    fail_at: Option<u64>,
    queried: Mutex<Vec<u64>>,
}

impl MockRegistry {
    pub fn with_jobs(jobs: Vec<Address>) -> Self {
        Self {
            jobs,
            count_fails: false,
            reported_count: None,
            fail_at: None,
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(mut self, index: u64) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Reports `count` from `num_jobs` regardless of the registered jobs.
    pub fn reporting_count(mut self, count: u64) -> Self {
        self.reported_count = Some(count);
        self
    }

    pub fn failing_count(mut self) -> Self {
        self.count_fails = true;
        self
    }

    pub fn queried(&self) -> Vec<u64> {
        self.queried.lock().unwrap().clone()
    }
}

impl RegistryPort for MockRegistry {
    async fn num_jobs(&self) -> Result<u64, ChainError> {
        if self.count_fails {
            return Err(ChainError::Malformed("numJobs reverted".into()));
        }
        Ok(self.reported_count.unwrap_or(self.jobs.len() as u64))
    }

    async fn job_at(&self, index: u64) -> Result<Address, ChainError> {
        self.queried.lock().unwrap().push(index);
        if self.fail_at == Some(index) {
            return Err(ChainError::Malformed(format!("jobAt({index}) connection reset")));
        }
        self.jobs
            .get(index as usize)
            .copied()
            .ok_or_else(|| ChainError::Malformed(format!("jobAt({index}) out of range")))
    }
}

/// Records alerts. A failing sink swallows every delivery, like a webhook outage.
#[derive(Default)]
pub struct MockAlerts {
    failing: bool,
    attempts: Mutex<Vec<AlertEvent>>,
    delivered: Mutex<Vec<AlertEvent>>,
}

impl MockAlerts {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<AlertEvent> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn delivered(&self) -> Vec<AlertEvent> {
        self.delivered.lock().unwrap().clone()
    }
}

impl AlertPort for MockAlerts {
    async fn deliver(&self, event: &AlertEvent) {
        self.attempts.lock().unwrap().push(event.clone());
        if !self.failing {
            self.delivered.lock().unwrap().push(event.clone());
        }
    }
}
