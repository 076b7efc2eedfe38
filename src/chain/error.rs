//! Errors raised while reading chain state.
//!
//! Every variant is cycle-fatal: a failed height query, a reverted registry call
//! or an undecodable predicate result means the data source cannot be trusted for
//! the rest of the pass.

use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error)]
pub enum ChainError {
    /// JSON-RPC transport failure (connection refused, HTTP error, bad JSON-RPC envelope).
    #[error("transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    /// A contract call reverted or its return data could not be decoded.
    /// An out-of-range `jobAt` index surfaces here.
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("malformed chain response: {0}")]
    Malformed(String),

    #[error("invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ChainError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Fatal
    }
}
