//! HTTP DTOs for the storage service endpoints.
//!
//! `POST /save` keeps the reply shapes its clients already parse:
//! `{ message, prediction }` on success and `{ error }` on failure.

use serde::{Deserialize, Serialize};

use crate::domain::intake::Verdict;
use crate::domain::risk_record::RiskRecord;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Reply of a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    pub prediction: Verdict,
}

impl SaveResponse {
    pub fn saved(prediction: Verdict) -> Self {
        Self {
            message: "Data saved successfully!".to_string(),
            prediction,
        }
    }
}

/// Reply of a failed save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveErrorResponse {
    pub error: String,
}

impl SaveErrorResponse {
    pub fn failed() -> Self {
        Self {
            error: "Error saving data!".to_string(),
        }
    }
}

/// Stored records.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRecordListResponse {
    pub items: Vec<RiskRecord>,
    pub total: usize,
}

impl From<Vec<RiskRecord>> for RiskRecordListResponse {
    fn from(items: Vec<RiskRecord>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Standard error response for query endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
