use async_trait::async_trait;
use eyre::Result;

use common::types::BlockInfo;

pub mod http_rpc;
pub mod mock_rpc;

/// Read access to a chain of sequentially numbered, timestamped blocks.
///
/// Implementations wrap every failure in [`common::errors::RpcError`] so that
/// callers only ever see a transport error, whatever backs the client.
#[async_trait]
pub trait ChainRpc: Send + Sync + 'static {
    fn new(rpc: &str) -> Result<Self>
    where
        Self: Sized;

    async fn get_block_number(&self) -> Result<u64>;
    async fn get_block(&self, number: u64) -> Result<BlockInfo>;
}
