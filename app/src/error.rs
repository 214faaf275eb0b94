//! Client error handling
//!
//! `ClientError` is the failure channel of the remote data client: a call
//! that could not produce a response at all. Errors the store returns as
//! values travel in `RemoteResponse::error` instead.

use fitness_dashboard_shared::SeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid remote URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dashboard seed: {0}")]
    Seed(#[from] SeedError),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
