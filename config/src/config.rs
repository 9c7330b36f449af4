use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::base::BaseConfig;
use crate::cli::CliConfig;
use crate::networks::Network;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub rpc: String,
    pub accuracy: f64,
    pub max_retries: u64,
}

impl Config {
    /// Layers the network preset, the toml file, `DATER_` environment
    /// variables and the command line, later sources winning.
    pub fn from_file(config_path: &PathBuf, network: &str, cli_config: &CliConfig) -> Self {
        match Self::extract(config_path, network, cli_config) {
            Ok(config) => config,
            Err(err) => {
                match err.kind {
                    figment::error::Kind::MissingField(field) => {
                        let field = field.replace('_', "-");

                        eprintln!("\x1b[91merror\x1b[0m: missing configuration field: {field}");

                        eprintln!("\n\ttry supplying the proper command line argument: --{field}");

                        eprintln!("\talternatively, you can add the field to your dater.toml file or as an environment variable");
                    }
                    _ => eprintln!("cannot parse configuration: {err}"),
                }
                exit(1);
            }
        }
    }

    pub fn extract(
        config_path: &PathBuf,
        network: &str,
        cli_config: &CliConfig,
    ) -> figment::Result<Self> {
        let base_config = match Network::from_str(network) {
            Ok(network) => network.to_base_config(),
            Err(_) => {
                warn!(network, "unknown network, no preset rpc");
                BaseConfig::default()
            }
        };

        let base_provider = Serialized::from(base_config, network);
        let toml_provider = Toml::file(config_path).nested();
        let env_provider = Env::prefixed("DATER_").profile(network);
        let cli_provider = cli_config.as_provider(network);

        Figment::new()
            .merge(base_provider)
            .merge(toml_provider)
            .merge(env_provider)
            .merge(cli_provider)
            .select(network)
            .extract()
    }

    pub fn to_base_config(&self) -> BaseConfig {
        BaseConfig {
            rpc: Some(self.rpc.clone()),
            accuracy: self.accuracy,
            max_retries: self.max_retries,
        }
    }
}
