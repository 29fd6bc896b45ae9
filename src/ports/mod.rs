//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `PredictionClient` - The external scoring service
//! - `PersistenceClient` - The storage service (which scores again)
//! - `SubmissionNotifier` - One-shot user notifications
//!
//! ## Storage Ports
//!
//! - `RiskRecordRepository` - Records kept by the storage service

mod persistence_client;
mod prediction_client;
mod risk_record_repository;
mod submission_notifier;

pub use persistence_client::{PersistenceClient, SaveReceipt, SaveRequest, SubmissionError};
pub use prediction_client::{PredictionClient, PredictionError};
pub use risk_record_repository::{RepositoryError, RiskRecordRepository};
pub use submission_notifier::{Notification, SubmissionNotifier};
