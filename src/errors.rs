use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, store, and storage layers.
#[derive(Error, Debug)]
pub enum SpendbookError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Malformed transaction data: {0}")]
    MalformedData(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, SpendbookError>;

impl From<std::io::Error> for SpendbookError {
    fn from(err: std::io::Error) -> Self {
        SpendbookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SpendbookError {
    fn from(err: serde_json::Error) -> Self {
        SpendbookError::MalformedData(err.to_string())
    }
}
