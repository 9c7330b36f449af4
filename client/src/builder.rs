use eyre::{eyre, Result};

use common::constants::{DEFAULT_ACCURACY, DEFAULT_MAX_RETRIES};
use config::Config;
use execution::rpc::ChainRpc;

use crate::Dater;

#[derive(Default)]
pub struct DaterBuilder {
    pub rpc: Option<String>,
    pub accuracy: Option<f64>,
    pub max_retries: Option<u64>,
    pub config: Option<Config>,
}

impl DaterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rpc(mut self, rpc: &str) -> Self {
        self.rpc = Some(rpc.to_string());
        self
    }

    /// Sets the tolerance, in seconds, for accepting a candidate block.
    ///
    /// # Example
    /// ```rust
    /// let builder = client::DaterBuilder::new().accuracy(30.0);
    /// assert_eq!(builder.accuracy, Some(30.0));
    /// ```
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn max_retries(mut self, max_retries: u64) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build<R: ChainRpc>(self) -> Result<Dater<R>> {
        let rpc = self
            .rpc
            .clone()
            .or_else(|| self.config.as_ref().map(|config| config.rpc.clone()))
            .ok_or(eyre!("missing rpc"))?;

        let accuracy = self
            .accuracy
            .or_else(|| self.config.as_ref().map(|config| config.accuracy))
            .unwrap_or(DEFAULT_ACCURACY);

        let max_retries = self
            .max_retries
            .or_else(|| self.config.as_ref().map(|config| config.max_retries))
            .unwrap_or(DEFAULT_MAX_RETRIES);

        Dater::new(&rpc, accuracy, max_retries)
    }
}
