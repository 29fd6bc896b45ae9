//! Mock Prediction Client for testing.
//!
//! Provides a configurable mock implementation of the PredictionClient port,
//! allowing tests to run without a scoring service.
//!
//! # Features
//!
//! - Pre-configured verdicts, consumed in order
//! - Error injection
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockPredictionClient::new()
//!     .with_verdict(Verdict::AtRisk)
//!     .with_error(PredictionError::network("connection refused"));
//!
//! assert_eq!(client.predict(&record).await?, Verdict::AtRisk);
//! assert!(client.predict(&record).await.is_err());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::intake::{EncodedRecord, Verdict};
use crate::ports::{PredictionClient, PredictionError};

/// Mock scoring service.
#[derive(Debug, Clone)]
pub struct MockPredictionClient {
    /// Pre-configured replies (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<Verdict, PredictionError>>>>,
    /// Reply once the queue is empty.
    fallback: Verdict,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<EncodedRecord>>>,
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictionClient {
    /// Creates a mock that answers `NoRisk` until configured otherwise.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Verdict::NoRisk,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock that always answers `verdict`.
    pub fn always(verdict: Verdict) -> Self {
        Self {
            fallback: verdict,
            ..Self::new()
        }
    }

    /// Queues a successful reply.
    pub fn with_verdict(self, verdict: Verdict) -> Self {
        self.responses.lock().unwrap().push_back(Ok(verdict));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: PredictionError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<EncodedRecord> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<Verdict, PredictionError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(self.fallback))
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn predict(&self, record: &EncodedRecord) -> Result<Verdict, PredictionError> {
        self.calls.lock().unwrap().push(record.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }
}
