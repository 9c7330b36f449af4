use std::collections::HashMap;

use figment::{providers::Serialized, value::Value};
use serde::{Deserialize, Serialize};

/// Cli Config
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CliConfig {
    pub rpc: Option<String>,
    pub accuracy: Option<f64>,
    pub max_retries: Option<u64>,
}

impl CliConfig {
    pub fn as_provider(&self, network: &str) -> Serialized<HashMap<&str, Value>> {
        let mut user_dict = HashMap::new();

        if let Some(rpc) = &self.rpc {
            user_dict.insert("rpc", Value::from(rpc.clone()));
        }

        if let Some(accuracy) = self.accuracy {
            user_dict.insert("accuracy", Value::from(accuracy));
        }

        if let Some(max_retries) = self.max_retries {
            user_dict.insert("max_retries", Value::from(max_retries));
        }

        Serialized::from(user_dict, network)
    }
}
