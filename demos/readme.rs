use eyre::Result;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use dater::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rpc = "https://rpc.ankr.com/eth";
    info!("Using rpc: {}", rpc);

    let dater: Dater<HttpRpc> = DaterBuilder::new().rpc(rpc).build()?;

    let closest = dater.locate("2020-12-31", BlockPosition::Closest).await?;
    let after = dater.locate("2020-12-31", BlockPosition::After).await?;

    info!(
        "closest block: {} ({} seconds from target)",
        closest.height(),
        closest.seconds_from_target
    );
    info!("first block after: {}", after.height());

    Ok(())
}
