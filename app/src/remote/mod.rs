//! Remote data client abstraction
//!
//! The store answers a call in one of two ways: a response carrying data
//! and/or an error value, or no response at all (`Err(ClientError)`).
//! Callers handle both channels.

use crate::error::ClientResult;
use async_trait::async_trait;
use fitness_dashboard_shared::ErrorInfo;

mod postgrest;

pub use postgrest::PostgrestClient;

/// One record of a collection
pub type Row = serde_json::Value;

/// Response of a remote call: `(data, error)`
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse<T> {
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> RemoteResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ErrorInfo) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }
}

/// Query and insert primitives against named collections
#[async_trait]
pub trait RemoteDataClient: Send + Sync {
    /// Read up to `limit` rows from `collection`
    async fn select(&self, collection: &str, limit: usize) -> ClientResult<RemoteResponse<Vec<Row>>>;

    /// Insert `records` into `collection`
    async fn insert(&self, collection: &str, records: Vec<Row>) -> ClientResult<RemoteResponse<Vec<Row>>>;
}
