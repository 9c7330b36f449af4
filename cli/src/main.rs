use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand};
use dirs::home_dir;
use eyre::Result;
use tracing::error;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use client::{Dater, DaterBuilder};
use common::types::{BlockPosition, DateInput};
use config::{CliConfig, Config};
use execution::rpc::http_rpc::HttpRpc;

#[tokio::main]
async fn main() -> Result<()> {
    enable_tracer();

    let cli = Cli::parse();
    let dater = cli.make_dater();

    let output = match &cli.command {
        Command::Block(args) => {
            let block = dater.locate(parse_date(&args.date), args.position).await;
            block.map(|block| serde_json::to_string_pretty(&block))
        }
        Command::Blocks(args) => {
            let blocks = dater
                .resolve_range(
                    parse_date(&args.start),
                    parse_date(&args.end),
                    args.interval,
                    args.position,
                )
                .await;
            blocks.map(|blocks| serde_json::to_string_pretty(&blocks))
        }
    };

    match output {
        Ok(json) => println!("{}", json?),
        Err(err) => {
            error!(target: "dater::runner", error = %err);
            exit(1);
        }
    }

    Ok(())
}

fn enable_tracer() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .expect("invalid env filter");

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("subscriber set failed");
}

#[derive(Parser)]
#[clap(version, about)]
/// Dater finds the block produced at a given date
struct Cli {
    #[clap(short, long, default_value = "mainnet", global = true)]
    network: String,
    #[clap(short, long, env = "DATER_RPC", global = true)]
    rpc: Option<String>,
    #[clap(short, long, env = "DATER_ACCURACY", global = true)]
    accuracy: Option<f64>,
    #[clap(short, long, env = "DATER_MAX_RETRIES", global = true)]
    max_retries: Option<u64>,
    #[clap(short, long, env = "DATER_CONFIG", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the block matching a single date
    #[clap(name = "block")]
    Block(BlockArgs),
    /// Find blocks at a fixed interval between two dates
    #[clap(name = "blocks")]
    Blocks(BlocksArgs),
}

#[derive(Args)]
struct BlockArgs {
    /// Epoch milliseconds or an ISO-8601 date
    date: String,
    #[clap(short, long, default_value = "closest", value_parser = parse_position)]
    position: BlockPosition,
}

#[derive(Args)]
struct BlocksArgs {
    start: String,
    end: String,
    /// Seconds between two consecutive dates
    #[clap(short, long)]
    interval: i64,
    #[clap(short, long, default_value = "after", value_parser = parse_position)]
    position: BlockPosition,
}

impl Cli {
    fn make_dater(&self) -> Dater<HttpRpc> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| home_dir().unwrap_or_default().join(".dater/dater.toml"));
        let config = Config::from_file(&config_path, &self.network, &self.as_cli_config());

        match DaterBuilder::new().config(config).build::<HttpRpc>() {
            Ok(dater) => dater,
            Err(err) => {
                error!(target: "dater::runner", error = %err);
                exit(1);
            }
        }
    }

    fn as_cli_config(&self) -> CliConfig {
        CliConfig {
            rpc: self.rpc.clone(),
            accuracy: self.accuracy,
            max_retries: self.max_retries,
        }
    }
}

fn parse_date(s: &str) -> DateInput {
    match s.parse::<i64>() {
        Ok(millis) => DateInput::Millis(millis),
        Err(_) => DateInput::Text(s.to_string()),
    }
}

fn parse_position(s: &str) -> Result<BlockPosition, String> {
    s.parse().map_err(|err: eyre::Report| err.to_string())
}
