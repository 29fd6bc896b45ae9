//! Wiring from `AppConfig` to ready-to-use handlers.
//!
//! `IntakeApp` is the intake side: HTTP clients for both downstream
//! services, a tracing notifier and the configured transition delay.
//! `store_handlers` is the storage service side, used by the binary.

use std::sync::Arc;

use crate::adapters::http::StoreHandlers;
use crate::adapters::notify::TracingNotifier;
use crate::adapters::persistence::HttpPersistenceClient;
use crate::adapters::scoring::HttpPredictionClient;
use crate::application::handlers::intake::SubmitIntakeHandler;
use crate::application::handlers::risk_record::{
    GetRiskRecordHandler, ListRiskRecordsHandler, SaveRiskRecordHandler,
};
use crate::config::{AppConfig, IntakeConfig};
use crate::domain::intake::IntakeSession;
use crate::ports::{PredictionClient, RiskRecordRepository};

/// Intake side of the system, built from configuration.
pub struct IntakeApp {
    submit: SubmitIntakeHandler,
    intake: IntakeConfig,
}

impl IntakeApp {
    /// Builds the submission path against the configured services.
    ///
    /// # Errors
    ///
    /// Fails only if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let prediction = HttpPredictionClient::new(config.prediction.to_client_config())?;
        let persistence = HttpPersistenceClient::new(config.persistence.to_client_config())?;

        tracing::debug!(
            prediction_url = %config.prediction.base_url,
            persistence_url = %config.persistence.base_url,
            "Intake clients configured"
        );

        Ok(Self {
            submit: SubmitIntakeHandler::new(
                Arc::new(prediction),
                Arc::new(persistence),
                Arc::new(TracingNotifier),
            ),
            intake: config.intake.clone(),
        })
    }

    /// Starts an empty session with the configured transition delay.
    pub fn new_session(&self) -> IntakeSession {
        self.intake.new_session()
    }

    pub fn submitter(&self) -> &SubmitIntakeHandler {
        &self.submit
    }
}

/// Builds the storage service handlers over `repository`.
///
/// Saved records are scored with the configured prediction service.
pub fn store_handlers(
    config: &AppConfig,
    repository: Arc<dyn RiskRecordRepository>,
) -> Result<StoreHandlers, reqwest::Error> {
    let prediction: Arc<dyn PredictionClient> =
        Arc::new(HttpPredictionClient::new(config.prediction.to_client_config())?);

    Ok(StoreHandlers::new(
        Arc::new(SaveRiskRecordHandler::new(prediction, repository.clone())),
        Arc::new(GetRiskRecordHandler::new(repository.clone())),
        Arc::new(ListRiskRecordsHandler::new(repository)),
    ))
}
