//! RPC error types

use thiserror::Error;

/// Errors from a single vote-account query.
///
/// Every variant fails the current attempt; none of them is retried
/// differently from the others.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("No result in RPC response")]
    MissingResult,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid activated stake for current validator #{index}: {value}")]
    InvalidStake { index: usize, value: String },
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else {
            RpcError::Http(err.to_string())
        }
    }
}
