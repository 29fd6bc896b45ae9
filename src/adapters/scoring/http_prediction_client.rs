//! HTTP Prediction Client - PredictionClient over `POST /predict`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpPredictionConfig::new("http://localhost:5001")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpPredictionClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::intake::{EncodedRecord, Verdict};
use crate::ports::{PredictionClient, PredictionError};

/// Configuration for the HTTP prediction client.
#[derive(Debug, Clone)]
pub struct HttpPredictionConfig {
    /// Base URL of the scoring service (default: http://localhost:5001).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpPredictionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpPredictionConfig {
    fn default() -> Self {
        Self::new("http://localhost:5001")
    }
}

/// Scoring service client.
pub struct HttpPredictionClient {
    config: HttpPredictionConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Verdict,
}

impl HttpPredictionClient {
    /// Creates a client with the given configuration.
    pub fn new(config: HttpPredictionConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.config.base_url.trim_end_matches('/'))
    }

    fn map_send_error(&self, e: reqwest::Error) -> PredictionError {
        if e.is_timeout() {
            PredictionError::Timeout {
                timeout_ms: self.timeout_ms(),
            }
        } else if e.is_connect() {
            PredictionError::network(format!("Connection failed: {}", e))
        } else {
            PredictionError::network(e.to_string())
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, PredictionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PredictionError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, record: &EncodedRecord) -> Result<Verdict, PredictionError> {
        let response = self
            .client
            .post(self.predict_url())
            .json(record)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::handle_response_status(response).await?;

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::parse(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(verdict = %parsed.prediction, "Prediction service replied");
        Ok(parsed.prediction)
    }
}
