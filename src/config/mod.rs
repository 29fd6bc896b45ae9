//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARDIO_INTAKE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cardio_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod intake;
mod server;
mod services;

pub use error::{ConfigError, ValidationError};
pub use intake::IntakeConfig;
pub use server::{Environment, ServerConfig};
pub use services::{PersistenceServiceConfig, PredictionServiceConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup (storage service on 5000, prediction service on 5001).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Storage service HTTP server
    #[serde(default)]
    pub server: ServerConfig,

    /// Prediction service client
    #[serde(default)]
    pub prediction: PredictionServiceConfig,

    /// Storage service client (used by the intake side)
    #[serde(default)]
    pub persistence: PersistenceServiceConfig,

    /// Intake session behaviour
    #[serde(default)]
    pub intake: IntakeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARDIO_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CARDIO_INTAKE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CARDIO_INTAKE__PREDICTION__BASE_URL=...` -> `prediction.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARDIO_INTAKE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.prediction.validate()?;
        self.persistence.validate()?;
        self.intake.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
