//! GetRiskRecordHandler - Query handler for a single stored record.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RiskRecordId};
use crate::domain::risk_record::RiskRecord;
use crate::ports::RiskRecordRepository;

/// Query for one record.
#[derive(Debug, Clone)]
pub struct GetRiskRecordQuery {
    pub record_id: RiskRecordId,
}

/// Handler for fetching a stored record.
pub struct GetRiskRecordHandler {
    repository: Arc<dyn RiskRecordRepository>,
}

impl GetRiskRecordHandler {
    pub fn new(repository: Arc<dyn RiskRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRiskRecordQuery) -> Result<RiskRecord, DomainError> {
        self.repository
            .find_by_id(&query.record_id)
            .await
            .map_err(|e| DomainError::new(ErrorCode::StorageError, e.to_string()))?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::RecordNotFound, "Risk record not found")
                    .with_detail("record_id", query.record_id.to_string())
            })
    }
}
