//! ListRiskRecordsHandler - Query handler for stored records.

use std::sync::Arc;

use crate::domain::risk_record::RiskRecord;
use crate::ports::{RepositoryError, RiskRecordRepository};

/// Handler for listing stored records.
pub struct ListRiskRecordsHandler {
    repository: Arc<dyn RiskRecordRepository>,
}

impl ListRiskRecordsHandler {
    pub fn new(repository: Arc<dyn RiskRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<RiskRecord>, RepositoryError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRiskRecordRepository;
    use crate::domain::intake::{encode, IntakeField, IntakeRecord, ReadableRecord, Verdict};

    #[tokio::test]
    async fn lists_what_was_saved() {
        let repository = Arc::new(InMemoryRiskRecordRepository::new());
        let raw = IntakeField::ALL
            .into_iter()
            .fold(IntakeRecord::empty(), |r, f| r.with(f, "5"));
        let record = RiskRecord::new(
            ReadableRecord::from_submission(&raw, &encode(&raw).unwrap()),
            Verdict::NoRisk,
        );
        repository.save(&record).await.unwrap();

        let handler = ListRiskRecordsHandler::new(repository);

        assert_eq!(handler.handle().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListRiskRecordsHandler::new(Arc::new(InMemoryRiskRecordRepository::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
