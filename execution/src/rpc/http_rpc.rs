use async_trait::async_trait;
use ethers::prelude::Http;
use ethers::providers::{Middleware, Provider};
use eyre::Result;
use tracing::trace;

use common::errors::RpcError;
use common::types::BlockInfo;

use super::ChainRpc;

#[derive(Clone, Debug)]
pub struct HttpRpc {
    url: String,
    provider: Provider<Http>,
}

impl HttpRpc {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChainRpc for HttpRpc {
    fn new(rpc: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc)?;
        Ok(HttpRpc {
            url: rpc.to_string(),
            provider,
        })
    }

    async fn get_block_number(&self) -> Result<u64> {
        trace!("fetching block number");
        let number = self
            .provider
            .get_block_number()
            .await
            .map_err(|e| RpcError::new("get_block_number", e))?;

        Ok(number.as_u64())
    }

    async fn get_block(&self, number: u64) -> Result<BlockInfo> {
        trace!(number, "fetching block");
        let block = self
            .provider
            .get_block(number)
            .await
            .map_err(|e| RpcError::new("get_block", e))?
            .ok_or_else(|| RpcError::new("get_block", format!("block {number} not found")))?;

        Ok(BlockInfo::new(number, block.timestamp.as_u64()))
    }
}
