use eyre::Report;
use thiserror::Error;

use common::errors::DateError;

/// Errors that can occur while resolving dates to blocks
#[derive(Debug, Error)]
pub enum DaterError {
    #[error(transparent)]
    InvalidTarget(#[from] TargetError),

    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    #[error("interval must be greater than 0, got {0}")]
    InvalidStep(i64),

    #[error("unable to locate block at timestamp {target}")]
    SearchExhausted { target: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to fetch block number: {0}")]
    BlockNumberFetch(Report),

    #[error("unable to fetch block {number}: {err}")]
    BlockFetch { number: u64, err: Report },
}

/// Reasons a date cannot be used as a search target
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid date: {0}")]
    Unparsable(String),

    #[error("date {0} is before the genesis block")]
    BeforeGenesis(String),

    #[error("date {0} is in the future")]
    InFuture(String),
}

impl From<DateError> for TargetError {
    fn from(err: DateError) -> Self {
        TargetError::Unparsable(err.input().to_string())
    }
}

impl From<DateError> for DaterError {
    fn from(err: DateError) -> Self {
        DaterError::InvalidTarget(err.into())
    }
}
