//! Error types for configuration and reporting.

use thiserror::Error;

/// A rejected test configuration. Always a usage error at the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid size: {0} (expected a positive integer)")]
    InvalidSize(String),

    #[error("Array size {size} out of range (must be 1..={max})")]
    SizeOutOfRange { size: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
