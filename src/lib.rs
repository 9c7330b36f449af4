#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! # Block-by-date resolution for Ethereum-style chains.
//!
//! > dater maps a wall-clock date to the block that was produced at that time, using nothing more than an RPC endpoint.
//!
//! It runs an interpolation search that re-estimates the average block time after every probe,
//! which usually lands on the right block in a handful of requests. Series of evenly spaced
//! dates reuse the bounds of the previous result to keep the request count low.
//!
//! ## Quickstart: `prelude`
//!
//! The prelude imports all the necessary data types and traits from dater.
//!
//! ```no_run
//! # #[allow(unused)]
//! use dater::prelude::*;
//! ```
//!
//! ## Breakdown of exported dater modules
//!
//! ### `client`
//!
//! `Dater` resolves dates to blocks, `DaterBuilder` configures one with the fluent builder pattern.
//!
//! ### `rpc`
//!
//! The `ChainRpc` trait abstracts the remote chain, with an HTTP implementation and an in-memory mock.
//!
//! ### `config`
//!
//! Layered configuration (network presets, toml file, environment, command line).
//!
//! ### `types`
//!
//! Blocks, resolved blocks, block positions and accepted date forms.
//!
//! ### `errors`
//!
//! Errors used across dater.

pub mod client {
    pub use client::{Dater, DaterBuilder};
}

pub mod config {
    pub use config::{networks, CliConfig, Config, Network};
}

pub mod rpc {
    pub use execution::rpc::{http_rpc::HttpRpc, mock_rpc::MockRpc, ChainRpc};
}

pub mod types {
    pub use common::types::*;
}

pub mod errors {
    pub use client::errors::*;
    pub use common::errors::*;
}

pub mod constants {
    pub use common::constants::*;
}

pub mod utils {
    pub use common::utils::*;
}

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::errors::*;
    pub use crate::rpc::*;
    pub use crate::types::*;
}
