use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::base::BaseConfig;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
    Holesky,
}

impl Network {
    pub fn to_base_config(&self) -> BaseConfig {
        match self {
            Self::Mainnet => mainnet(),
            Self::Sepolia => sepolia(),
            Self::Holesky => holesky(),
        }
    }
}

pub fn mainnet() -> BaseConfig {
    BaseConfig {
        rpc: Some("https://rpc.ankr.com/eth".to_string()),
        ..Default::default()
    }
}

pub fn sepolia() -> BaseConfig {
    BaseConfig {
        rpc: Some("https://rpc.ankr.com/eth_sepolia".to_string()),
        ..Default::default()
    }
}

pub fn holesky() -> BaseConfig {
    BaseConfig {
        rpc: Some("https://rpc.ankr.com/eth_holesky".to_string()),
        ..Default::default()
    }
}
