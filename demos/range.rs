use eyre::Result;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use dater::config::networks;
use dater::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let base = networks::mainnet();
    let rpc = base.rpc.unwrap_or_default();

    let dater: Dater<HttpRpc> = DaterBuilder::new()
        .rpc(&rpc)
        .accuracy(base.accuracy)
        .max_retries(base.max_retries)
        .build()?;

    let blocks = dater
        .resolve_range("2020-12-31", "2021-01-01", 10_000, BlockPosition::After)
        .await?;

    for block in &blocks {
        info!(
            "{} -> block {} after {} retries",
            block.block.date(),
            block.height(),
            block.retries
        );
    }

    let total = blocks.iter().map(|block| block.retries + 1).sum::<u64>();
    info!("resolved {} blocks in about {} probes", blocks.len(), total);

    Ok(())
}
