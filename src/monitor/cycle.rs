//! One stateless pass over every registered job.
//!
//! Jobs are enumerated and evaluated strictly in index order. Registry and
//! evaluator failures abort the pass and are returned unchanged; alert
//! delivery cannot fail from here (see [`AlertPort`]).

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::evaluator::WorkabilityEvaluator;
use super::model::{AlertEvent, Job, KeeperNetwork};
use super::ports::{AlertPort, ChainPort, JobPort, RegistryPort};
use super::window::BlockWindow;
use crate::chain::ChainError;

/// Summary of a completed cycle. Failed cycles produce no report.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub block: u64,
    pub window: u64,
    pub jobs_checked: u64,
    pub stale_jobs: Vec<u64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

pub struct MonitorCycle<'a, C, R, J, A> {
    chain: &'a C,
    registry: &'a R,
    alerts: &'a A,
    evaluator: WorkabilityEvaluator<'a, C, J>,
    window: BlockWindow,
}

impl<'a, C, R, J, A> MonitorCycle<'a, C, R, J, A>
where
    C: ChainPort,
    R: RegistryPort,
    J: JobPort,
    A: AlertPort,
{
    pub fn new(
        chain: &'a C,
        registry: &'a R,
        jobs: &'a J,
        alerts: &'a A,
        network: &'a KeeperNetwork,
        window: BlockWindow,
    ) -> Self {
        Self {
            chain,
            registry,
            alerts,
            evaluator: WorkabilityEvaluator::new(chain, jobs, network),
            window,
        }
    }

    pub async fn run(&self) -> Result<CycleReport, ChainError> {
        let started_at = Utc::now();
        let block = self.chain.block_number().await?;
        info!(block, "Latest block number: {block}");

        let num_jobs = self.registry.num_jobs().await?;
        info!(num_jobs, window = self.window.size(), "checking registered jobs");

        let mut stale_jobs = Vec::new();
        for index in 0..num_jobs {
            let job = Job {
                index,
                address: self.registry.job_at(index).await?,
            };

            if self.evaluator.evaluate(job.address, self.window).await? {
                info!(job_index = index, job = %job.address, "Job {index} is workable.");
                continue;
            }

            warn!(
                job_index = index,
                job = %job.address,
                "Job {index} has NOT been workable in the last {} blocks.",
                self.window.size()
            );
            self.alerts
                .deliver(&AlertEvent::stale(&job, self.window))
                .await;
            stale_jobs.push(index);
        }

        Ok(CycleReport {
            block,
            window: self.window.size(),
            jobs_checked: num_jobs,
            stale_jobs,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

/// Enumerates the registry without evaluating anything.
pub async fn list_jobs<R: RegistryPort>(registry: &R) -> Result<Vec<Job>, ChainError> {
    let num_jobs = registry.num_jobs().await?;
    let mut jobs = Vec::new();
    for index in 0..num_jobs {
        jobs.push(Job {
            index,
            address: registry.job_at(index).await?,
        });
    }
    Ok(jobs)
}
