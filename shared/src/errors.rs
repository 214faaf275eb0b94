//! Error types for the Fitness Dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error value returned by the remote store alongside (instead of) data
///
/// Mirrors the PostgREST error body; only `message` is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Kind of a returned remote error, as decided by the probe classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteErrorKind {
    /// Store reachable, probed table absent
    SchemaMissing,
    /// Any other query error
    Query,
}

/// Invalid dashboard seed data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    #[error("User name cannot be empty")]
    EmptyUserName,

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Duplicate workout id: {0}")]
    DuplicateWorkoutId(i64),

    #[error("Workout {id}: {reason}")]
    InvalidWorkout { id: i64, reason: String },
}
