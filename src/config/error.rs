//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {service} service URL: {url}")]
    InvalidServiceUrl { service: &'static str, url: String },

    #[error("Invalid {service} service timeout")]
    InvalidServiceTimeout { service: &'static str },

    #[error("Step transition delay exceeds maximum allowed (10000 ms)")]
    InvalidTransitionDelay,
}
