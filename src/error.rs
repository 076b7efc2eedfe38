use thiserror::Error;

use crate::alert::AlertError;
use crate::chain::ChainError;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid keeper network name: {0}")]
    InvalidNetwork(String),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Alert error: {0}")]
    Alert(#[from] AlertError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl WatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WatchError::Chain(e) => e.kind(),
            WatchError::Alert(e) => e.kind(),
            _ => ErrorKind::Fatal,
        }
    }
}

/// Classifies a failure for propagation decisions inside a monitoring cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Aborts the current cycle and is surfaced to the invoker (chain, registry, config).
    Fatal,
    /// Handled where it happens and never leaves that component (alert delivery).
    Recoverable,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Fatal => write!(f, "Fatal"),
            ErrorKind::Recoverable => write!(f, "Recoverable"),
        }
    }
}
