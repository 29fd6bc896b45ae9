//! Risk record aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RiskRecordId;
use crate::domain::intake::{ReadableRecord, Verdict};

/// A saved submission.
///
/// # Invariants
///
/// - `prediction` is the verdict computed by the persistence service from
///   `fields`, never the one reported by the client
/// - Records are immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    id: RiskRecordId,
    #[serde(flatten)]
    fields: ReadableRecord,
    prediction: Verdict,
    created_at: DateTime<Utc>,
}

impl RiskRecord {
    /// Creates a new record stamped with the current time.
    pub fn new(fields: ReadableRecord, prediction: Verdict) -> Self {
        Self {
            id: RiskRecordId::new(),
            fields,
            prediction,
            created_at: Utc::now(),
        }
    }

    /// Reconstitute a record from storage.
    pub fn reconstitute(
        id: RiskRecordId,
        fields: ReadableRecord,
        prediction: Verdict,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            fields,
            prediction,
            created_at,
        }
    }

    pub fn id(&self) -> &RiskRecordId {
        &self.id
    }

    pub fn fields(&self) -> &ReadableRecord {
        &self.fields
    }

    pub fn prediction(&self) -> Verdict {
        self.prediction
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }
}
