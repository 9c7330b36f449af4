mod client;
pub use crate::client::*;

mod builder;
pub use crate::builder::*;

pub mod errors;
