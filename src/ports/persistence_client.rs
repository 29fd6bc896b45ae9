//! Persistence Client Port - Interface to the storage service.
//!
//! `POST /save` takes the word-encoded [`ReadableRecord`] (plus the client's
//! verdict) and answers `{ "message": ..., "prediction": 0 | 1 }`.
//!
//! The storage service scores the record a second time before storing it,
//! from its own re-derived encoding. One user submission therefore reaches
//! the scoring model twice.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::intake::{ReadableRecord, Verdict};

/// Port for the storage service.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Saves a scored record.
    async fn save(&self, request: &SaveRequest) -> Result<SaveReceipt, SubmissionError>;
}

/// Body of `POST /save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    #[serde(flatten)]
    pub record: ReadableRecord,
    /// Verdict the client already showed. The service ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Verdict>,
}

impl SaveRequest {
    pub fn new(record: ReadableRecord, prediction: Verdict) -> Self {
        Self {
            record,
            prediction: Some(prediction),
        }
    }
}

/// Reply of `POST /save`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    pub message: String,
    /// Verdict computed by the storage service itself.
    pub prediction: Verdict,
}

/// Saving failed after a successful prediction.
///
/// Never fatal: the verdict already shown stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Service answered with a non-success status.
    #[error("storage service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Reply could not be understood.
    #[error("parse error: {0}")]
    Parse(String),

    /// The background save task stopped before finishing.
    #[error("save task interrupted: {0}")]
    Interrupted(String),
}

impl SubmissionError {
    pub fn network(message: impl Into<String>) -> Self {
        SubmissionError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        SubmissionError::Parse(message.into())
    }

    /// Warning shown to the user.
    pub fn user_message(&self) -> String {
        "Your prediction is valid, but the data could not be saved.".to_string()
    }
}
