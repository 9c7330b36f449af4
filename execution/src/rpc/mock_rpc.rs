use std::fs::read_to_string;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use eyre::Result;
use serde::Deserialize;

use common::errors::RpcError;
use common::types::BlockInfo;

use super::ChainRpc;

/// A chain held in memory, where height `n` has timestamp `timestamps[n]`.
#[derive(Debug)]
pub struct MockRpc {
    timestamps: Vec<u64>,
    requests: AtomicU64,
}

impl MockRpc {
    pub fn from_timestamps(timestamps: Vec<u64>) -> Self {
        MockRpc {
            timestamps,
            requests: AtomicU64::new(0),
        }
    }

    /// Number of remote calls served so far.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn timestamp(&self, number: u64) -> Option<u64> {
        usize::try_from(number)
            .ok()
            .and_then(|idx| self.timestamps.get(idx))
            .copied()
    }
}

#[async_trait]
impl ChainRpc for MockRpc {
    /// Loads `chain.json` from the given test data directory.
    fn new(rpc: &str) -> Result<Self> {
        let path = PathBuf::from(rpc).join("chain.json");
        let chain: ChainFixture = serde_json::from_str(&read_to_string(path)?)?;
        Ok(MockRpc::from_timestamps(chain.timestamps))
    }

    async fn get_block_number(&self) -> Result<u64> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let tip = self
            .timestamps
            .len()
            .checked_sub(1)
            .ok_or_else(|| RpcError::new("get_block_number", "empty chain"))?;

        Ok(tip as u64)
    }

    async fn get_block(&self, number: u64) -> Result<BlockInfo> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let timestamp = self
            .timestamp(number)
            .ok_or_else(|| RpcError::new("get_block", format!("block {number} not found")))?;

        Ok(BlockInfo::new(number, timestamp))
    }
}

#[derive(Deserialize)]
struct ChainFixture {
    timestamps: Vec<u64>,
}
