//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the block explorer
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Explorer returned HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Invalid explorer response: {0}")]
    InvalidResponse(String),

    #[error("Explorer API error: {0}")]
    Api(String),
}

impl ExplorerError {
    /// Status code and reason phrase, if this is a non-2xx response
    pub fn http_status(&self) -> Option<(u16, &str)> {
        match self {
            ExplorerError::HttpStatus { status, reason } => Some((*status, reason.as_str())),
            _ => None,
        }
    }
}

/// Errors that can occur during price lookup
///
/// These never leave the `price` module: `PriceClient::get_eth_price`
/// folds them into `None`.
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Price API returned HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },
}

/// Errors that can occur while aggregating transactions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Transaction {tx} is missing field '{field}'")]
    MissingField { field: &'static str, tx: String },

    #[error("Invalid integer in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Overflow while accumulating {0}")]
    Overflow(&'static str),
}

/// Errors that can occur while rendering reports
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
