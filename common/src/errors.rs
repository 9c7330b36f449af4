use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("rpc error on method: {method}, message: {message}")]
pub struct RpcError {
    method: String,
    message: String,
}

impl RpcError {
    pub fn new<E: Display>(method: &str, err: E) -> Self {
        Self {
            method: method.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid date: {input}")]
pub struct DateError {
    input: String,
}

impl DateError {
    pub fn new(input: impl Display) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
