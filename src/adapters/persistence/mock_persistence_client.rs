//! Mock Persistence Client for testing.
//!
//! Records every save request and answers with a queued receipt or error.
//! When chained to a prediction client it mimics the storage service's
//! second scoring call.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{PersistenceClient, PredictionClient, SaveReceipt, SaveRequest, SubmissionError};

/// Mock storage service.
#[derive(Clone, Default)]
pub struct MockPersistenceClient {
    responses: Arc<Mutex<VecDeque<Result<SaveReceipt, SubmissionError>>>>,
    rescoring: Option<Arc<dyn PredictionClient>>,
    calls: Arc<Mutex<Vec<SaveRequest>>>,
}

impl MockPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every saved record again with `prediction`, like the real service.
    pub fn rescoring_with(mut self, prediction: Arc<dyn PredictionClient>) -> Self {
        self.rescoring = Some(prediction);
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: SubmissionError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a receipt.
    pub fn with_receipt(self, receipt: SaveReceipt) -> Self {
        self.responses.lock().unwrap().push_back(Ok(receipt));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<SaveRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersistenceClient for MockPersistenceClient {
    async fn save(&self, request: &SaveRequest) -> Result<SaveReceipt, SubmissionError> {
        self.calls.lock().unwrap().push(request.clone());

        let queued = self.responses.lock().unwrap().pop_front();
        if let Some(response) = queued {
            return response;
        }

        let prediction = match &self.rescoring {
            Some(client) => client
                .predict(&request.record.reencode())
                .await
                .map_err(|e| SubmissionError::Status {
                    status: 500,
                    body: e.to_string(),
                })?,
            None => request.prediction.unwrap_or(crate::domain::intake::Verdict::NoRisk),
        };

        Ok(SaveReceipt {
            message: "Data saved successfully!".to_string(),
            prediction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scoring::MockPredictionClient;
    use crate::domain::intake::{encode, IntakeField, IntakeRecord, ReadableRecord, Verdict};

    fn request(verdict: Verdict) -> SaveRequest {
        let raw = IntakeField::ALL
            .into_iter()
            .fold(IntakeRecord::empty(), |r, f| r.with(f, "3"));
        SaveRequest::new(ReadableRecord::from_submission(&raw, &encode(&raw).unwrap()), verdict)
    }

    #[tokio::test]
    async fn echoes_client_verdict_by_default() {
        let client = MockPersistenceClient::new();
        let receipt = client.save(&request(Verdict::AtRisk)).await.unwrap();
        assert_eq!(receipt.prediction, Verdict::AtRisk);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn rescoring_calls_prediction_again() {
        let scoring = MockPredictionClient::always(Verdict::NoRisk);
        let client = MockPersistenceClient::new().rescoring_with(Arc::new(scoring.clone()));

        let receipt = client.save(&request(Verdict::AtRisk)).await.unwrap();

        assert_eq!(receipt.prediction, Verdict::NoRisk);
        assert_eq!(scoring.call_count(), 1);
    }

    #[tokio::test]
    async fn queued_error_is_returned() {
        let client = MockPersistenceClient::new().with_error(SubmissionError::network("down"));
        assert!(client.save(&request(Verdict::NoRisk)).await.is_err());
        assert!(client.save(&request(Verdict::NoRisk)).await.is_ok());
    }
}
