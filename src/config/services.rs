//! Downstream service configuration (prediction and storage services)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::persistence::HttpPersistenceConfig;
use crate::adapters::scoring::HttpPredictionConfig;

/// Prediction service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionServiceConfig {
    /// Base URL; `/predict` is appended
    #[serde(default = "default_prediction_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_prediction_timeout")]
    pub timeout_secs: u64,
}

impl PredictionServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn to_client_config(&self) -> HttpPredictionConfig {
        HttpPredictionConfig::new(self.base_url.clone()).with_timeout(self.timeout())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_service("prediction", &self.base_url, self.timeout_secs)
    }
}

impl Default for PredictionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_prediction_url(),
            timeout_secs: default_prediction_timeout(),
        }
    }
}

/// Storage service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceServiceConfig {
    /// Base URL; `/save` is appended
    #[serde(default = "default_persistence_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_persistence_timeout")]
    pub timeout_secs: u64,
}

impl PersistenceServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn to_client_config(&self) -> HttpPersistenceConfig {
        HttpPersistenceConfig::new(self.base_url.clone()).with_timeout(self.timeout())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_service("persistence", &self.base_url, self.timeout_secs)
    }
}

impl Default for PersistenceServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_persistence_url(),
            timeout_secs: default_persistence_timeout(),
        }
    }
}

fn validate_service(
    service: &'static str,
    base_url: &str,
    timeout_secs: u64,
) -> Result<(), ValidationError> {
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ValidationError::InvalidServiceUrl {
            service,
            url: base_url.to_string(),
        });
    }
    if timeout_secs == 0 || timeout_secs > 300 {
        return Err(ValidationError::InvalidServiceTimeout { service });
    }
    Ok(())
}

fn default_prediction_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_prediction_timeout() -> u64 {
    10
}

fn default_persistence_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_persistence_timeout() -> u64 {
    20
}
