//! HTTP Persistence Client - PersistenceClient over `POST /save`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::ports::{PersistenceClient, SaveReceipt, SaveRequest, SubmissionError};

/// Configuration for the HTTP persistence client.
#[derive(Debug, Clone)]
pub struct HttpPersistenceConfig {
    /// Base URL of the storage service (default: http://localhost:5000).
    pub base_url: String,
    /// Request timeout. Covers the service's own scoring call.
    pub timeout: Duration,
}

impl HttpPersistenceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for HttpPersistenceConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

/// Storage service client.
pub struct HttpPersistenceClient {
    config: HttpPersistenceConfig,
    client: Client,
}

impl HttpPersistenceClient {
    pub fn new(config: HttpPersistenceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn save_url(&self) -> String {
        format!("{}/save", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PersistenceClient for HttpPersistenceClient {
    async fn save(&self, request: &SaveRequest) -> Result<SaveReceipt, SubmissionError> {
        let response = self
            .client
            .post(self.save_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Timeout {
                        timeout_ms: self.timeout_ms(),
                    }
                } else if e.is_connect() {
                    SubmissionError::network(format!("Connection failed: {}", e))
                } else {
                    SubmissionError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<SaveReceipt>()
            .await
            .map_err(|e| SubmissionError::parse(format!("Failed to parse response: {}", e)))
    }
}
