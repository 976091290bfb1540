//! Error types for the blockplan core

use thiserror::Error;

/// Main error type for the diagram core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed stream, unsupported version or out-of-range ids during load.
    #[error("Format error: {0}")]
    Format(String),

    /// A block instance disagreeing with the position it is stored under.
    #[error("Consistency violation: {0}")]
    Consistency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
