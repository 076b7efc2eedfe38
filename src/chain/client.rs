use alloy::eips::BlockId;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use reqwest::Url;

use super::contracts::{IJob, ISequencer};
use super::error::ChainError;
use crate::monitor::{ChainPort, JobPort, RegistryPort, WorkabilityOutcome};

/// Read-only JSON-RPC connection, built once per process and shared by reference.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
}

impl ChainClient {
    pub fn connect(rpc_url: &str) -> Result<Self, ChainError> {
        let url: Url = rpc_url
            .parse()
            .map_err(|e| ChainError::InvalidEndpoint(format!("{rpc_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChainError::InvalidEndpoint(format!(
                "{rpc_url}: only http(s) endpoints are supported"
            )));
        }
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self { provider })
    }
}

impl ChainPort for ChainClient {
    async fn block_number(&self) -> Result<u64, ChainError> {
        Ok(self.provider.get_block_number().await?)
    }
}

impl JobPort for ChainClient {
    async fn workable(
        &self,
        job: Address,
        network: B256,
        at: Option<u64>,
    ) -> Result<WorkabilityOutcome, ChainError> {
        let contract = IJob::new(job, self.provider.clone());
        let mut call = contract.workable(network);
        if let Some(height) = at {
            call = call.block(BlockId::number(height));
        }
        let ret = call.call().await?;
        Ok(WorkabilityOutcome {
            can_work: ret.canWork,
            args: ret.args,
        })
    }
}

/// The sequencer contract that registers every job of the keeper network.
#[derive(Clone)]
pub struct Sequencer {
    client: ChainClient,
    address: Address,
}

impl Sequencer {
    pub fn new(client: ChainClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl RegistryPort for Sequencer {
    async fn num_jobs(&self) -> Result<u64, ChainError> {
        let registry = ISequencer::new(self.address, self.client.provider.clone());
        let count = registry.numJobs().call().await?;
        u64::try_from(count)
            .map_err(|_| ChainError::Malformed(format!("numJobs returned {count}")))
    }

    async fn job_at(&self, index: u64) -> Result<Address, ChainError> {
        let registry = ISequencer::new(self.address, self.client.provider.clone());
        Ok(registry.jobAt(U256::from(index)).call().await?)
    }
}
