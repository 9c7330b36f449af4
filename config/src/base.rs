use serde::Serialize;

use common::constants::{DEFAULT_ACCURACY, DEFAULT_MAX_RETRIES};

/// The base configuration for a network.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc: Option<String>,
    pub accuracy: f64,
    pub max_retries: u64,
}

impl Default for BaseConfig {
    fn default() -> Self {
        BaseConfig {
            rpc: None,
            accuracy: DEFAULT_ACCURACY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
