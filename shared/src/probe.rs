//! Connectivity probe state and error classification
//!
//! The remote store reports a missing table only through its error text, so
//! classification is a substring match on the message. `classify_error` is
//! the one place that knows the wording; a structured error code from the
//! store would replace it.

use crate::errors::{ErrorInfo, RemoteErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection probed by default
pub const DEFAULT_PROBE_COLLECTION: &str = "status_checks";

pub const SCHEMA_MISSING_DETAIL: &str =
    "Tables not found - this is expected. Please create tables using the SQL schema.";

/// Error text the store returns when `collection` does not exist
pub fn schema_missing_signature(collection: &str) -> String {
    format!("relation \"public.{collection}\" does not exist")
}

/// Classify a returned error message for a read against `collection`
pub fn classify_error(message: &str, collection: &str) -> RemoteErrorKind {
    if message.contains(&schema_missing_signature(collection)) {
        RemoteErrorKind::SchemaMissing
    } else {
        RemoteErrorKind::Query
    }
}

/// Probe status kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    #[default]
    Testing,
    FullyConnected,
    SchemaMissing,
    ConnectionError,
    ConnectionFailed,
}

impl ProbeStatus {
    /// Human-readable status label
    pub fn label(&self) -> &'static str {
        match self {
            ProbeStatus::Testing => "Testing...",
            ProbeStatus::FullyConnected => "✅ Fully connected and tables exist!",
            ProbeStatus::SchemaMissing => "✅ Connected to Supabase! Tables need to be created.",
            ProbeStatus::ConnectionError => "❌ Connection Error",
            ProbeStatus::ConnectionFailed => "❌ Connection Failed",
        }
    }

    /// Whether the store answered at all
    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeStatus::FullyConnected | ProbeStatus::SchemaMissing)
    }
}

/// How a probe read ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Read returned without error
    Rows(usize),
    /// Read returned an error value
    Returned(ErrorInfo),
    /// Read failed before any response
    Failed(String),
}

/// Observable state of the connectivity probe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProbeState {
    pub status: ProbeStatus,
    pub error_detail: Option<String>,
    pub checked_at: Option<DateTime<Utc>>,
    pub rows_seen: Option<usize>,
}

impl ConnectionProbeState {
    pub fn testing() -> Self {
        Self::default()
    }

    /// State after a completed read against `collection`
    pub fn from_outcome(outcome: ProbeOutcome, collection: &str, checked_at: DateTime<Utc>) -> Self {
        let (status, error_detail, rows_seen) = match outcome {
            ProbeOutcome::Rows(count) => (ProbeStatus::FullyConnected, None, Some(count)),
            ProbeOutcome::Returned(error) => match classify_error(&error.message, collection) {
                RemoteErrorKind::SchemaMissing => (
                    ProbeStatus::SchemaMissing,
                    Some(SCHEMA_MISSING_DETAIL.to_string()),
                    None,
                ),
                RemoteErrorKind::Query => (ProbeStatus::ConnectionError, Some(error.message), None),
            },
            ProbeOutcome::Failed(message) => (ProbeStatus::ConnectionFailed, Some(message), None),
        };

        Self {
            status,
            error_detail,
            checked_at: Some(checked_at),
            rows_seen,
        }
    }

    pub fn label(&self) -> &'static str {
        self.status.label()
    }
}
