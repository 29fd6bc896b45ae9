//! SaveRiskRecordHandler - Server side of `POST /save`.
//!
//! Re-derives the numeric encoding from the readable fields, scores the
//! record with the prediction service, then stores it with that verdict.
//! Any verdict sent by the client is ignored.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::risk_record::RiskRecord;
use crate::ports::{
    PredictionClient, PredictionError, RepositoryError, RiskRecordRepository, SaveRequest,
};

/// Command to save a submitted record.
#[derive(Debug, Clone)]
pub struct SaveRiskRecordCommand {
    pub request: SaveRequest,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveRiskRecordResult {
    pub record: RiskRecord,
}

/// Errors while saving a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveRiskRecordError {
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    #[error("storage failed: {0}")]
    Storage(#[from] RepositoryError),
}

impl SaveRiskRecordError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SaveRiskRecordError::Prediction(_) => ErrorCode::PredictionFailed,
            SaveRiskRecordError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

/// Handler for saving risk records.
pub struct SaveRiskRecordHandler {
    prediction: Arc<dyn PredictionClient>,
    repository: Arc<dyn RiskRecordRepository>,
}

impl SaveRiskRecordHandler {
    pub fn new(
        prediction: Arc<dyn PredictionClient>,
        repository: Arc<dyn RiskRecordRepository>,
    ) -> Self {
        Self {
            prediction,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveRiskRecordCommand,
    ) -> Result<SaveRiskRecordResult, SaveRiskRecordError> {
        // 1. Score again from our own encoding
        let encoded = cmd.request.record.reencode();
        let verdict = self.prediction.predict(&encoded).await?;

        if let Some(client_verdict) = cmd.request.prediction {
            if client_verdict != verdict {
                tracing::debug!(
                    client_verdict = %client_verdict,
                    verdict = %verdict,
                    "Client verdict differs from stored verdict"
                );
            }
        }

        // 2. Store
        let record = RiskRecord::new(cmd.request.record, verdict);
        self.repository.save(&record).await?;

        tracing::info!(record_id = %record.id(), verdict = %verdict, "Risk record saved");
        Ok(SaveRiskRecordResult { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRiskRecordRepository;
    use crate::adapters::scoring::MockPredictionClient;
    use crate::domain::intake::{ReadableRecord, Verdict};
    use async_trait::async_trait;
    use crate::domain::foundation::RiskRecordId;

    fn request(client_verdict: Option<Verdict>) -> SaveRequest {
        SaveRequest {
            record: ReadableRecord {
                sex: "Female".to_string(),
                age: 45,
                education: 4,
                cigarettes_per_day: 0,
                blood_pressure_medications: "No".to_string(),
                prevalent_stroke: "No".to_string(),
                prevalent_hypertension: "Yes".to_string(),
                diabetes: "Yes".to_string(),
                cholesterol: 210,
                bmi: 31.2,
                heart_rate: 76,
                glucose: 140,
                pulse_pressure: 60,
            },
            prediction: client_verdict,
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl RiskRecordRepository for FailingRepository {
        async fn save(&self, _record: &RiskRecord) -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable("disk full".to_string()))
        }

        async fn find_by_id(
            &self,
            _id: &RiskRecordId,
        ) -> Result<Option<RiskRecord>, RepositoryError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<RiskRecord>, RepositoryError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn scores_server_side_encoding_and_stores() {
        let prediction = MockPredictionClient::always(Verdict::AtRisk);
        let repository = Arc::new(InMemoryRiskRecordRepository::new());
        let handler = SaveRiskRecordHandler::new(Arc::new(prediction.clone()), repository.clone());

        let result = handler
            .handle(SaveRiskRecordCommand {
                request: request(None),
            })
            .await
            .unwrap();

        let scored = &prediction.get_calls()[0];
        assert_eq!(scored.sex, 0);
        assert_eq!(scored.prevalent_hypertension, 1);
        assert_eq!(scored.diabetes, 1);
        assert_eq!(scored.bmi, 31.2);

        assert_eq!(result.record.prediction(), Verdict::AtRisk);
        assert_eq!(repository.list().await.unwrap(), vec![result.record]);
    }

    #[tokio::test]
    async fn client_verdict_is_ignored() {
        let handler = SaveRiskRecordHandler::new(
            Arc::new(MockPredictionClient::always(Verdict::NoRisk)),
            Arc::new(InMemoryRiskRecordRepository::new()),
        );

        let result = handler
            .handle(SaveRiskRecordCommand {
                request: request(Some(Verdict::AtRisk)),
            })
            .await
            .unwrap();

        assert_eq!(result.record.prediction(), Verdict::NoRisk);
    }

    #[tokio::test]
    async fn prediction_failure_stores_nothing() {
        let repository = Arc::new(InMemoryRiskRecordRepository::new());
        let handler = SaveRiskRecordHandler::new(
            Arc::new(
                MockPredictionClient::new().with_error(PredictionError::network("refused")),
            ),
            repository.clone(),
        );

        let err = handler
            .handle(SaveRiskRecordCommand {
                request: request(None),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::PredictionFailed);
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = SaveRiskRecordHandler::new(
            Arc::new(MockPredictionClient::new()),
            Arc::new(FailingRepository),
        );

        let err = handler
            .handle(SaveRiskRecordCommand {
                request: request(None),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SaveRiskRecordError::Storage(RepositoryError::Unavailable("disk full".to_string()))
        );
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
