// src/domain/errors.rs
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger API error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the upstream Ledger API collaborator.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The upstream returned a non-success status. The status code and
    /// response body are carried verbatim for pass-through reporting.
    #[error("{operation} rejected upstream with status {status}")]
    UpstreamRejected {
        operation: &'static str,
        status: u16,
        body: Value,
    },

    /// The upstream responded with a success status but the payload did
    /// not have the expected shape.
    #[error("Unexpected upstream payload: {0}")]
    Payload(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(String),
}

// Result type aliases for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type LedgerResult<T> = Result<T, LedgerError>;
