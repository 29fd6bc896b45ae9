//! Prediction Client Port - Interface to the external scoring service.
//!
//! The scoring model is opaque: it receives an [`EncodedRecord`] and answers
//! with a binary [`Verdict`]. Over HTTP this is `POST /predict` with the
//! encoded record as JSON and `{ "prediction": 0 | 1 }` as the reply.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intake::{EncodedRecord, Verdict};

/// Port for the risk scoring service.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Scores one encoded record.
    async fn predict(&self, record: &EncodedRecord) -> Result<Verdict, PredictionError>;
}

/// Errors from the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Service answered with a non-success status.
    #[error("prediction service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Reply could not be understood.
    #[error("parse error: {0}")]
    Parse(String),
}

impl PredictionError {
    pub fn network(message: impl Into<String>) -> Self {
        PredictionError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        PredictionError::Parse(message.into())
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        "There was an error making the prediction. Please try again.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_cause() {
        assert_eq!(
            PredictionError::network("connection refused").to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            PredictionError::Status { status: 503, body: "down".into() }.to_string(),
            "prediction service returned 503: down"
        );
        assert_eq!(
            PredictionError::Timeout { timeout_ms: 10_000 }.to_string(),
            "request timed out after 10000ms"
        );
    }

    #[test]
    fn user_message_suggests_retry() {
        assert!(PredictionError::parse("bad json")
            .user_message()
            .contains("Please try again"));
    }
}
