pub mod client;
pub mod contracts;
pub mod error;

pub use client::{ChainClient, Sequencer};
pub use error::ChainError;

#[cfg(test)]
pub(crate) mod testing;
