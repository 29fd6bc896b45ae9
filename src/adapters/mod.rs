//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `scoring` - Prediction service clients (HTTP, mock)
//! - `persistence` - Storage service clients (HTTP, mock)
//! - `notify` - User notification sinks
//! - `memory` - In-memory risk record storage
//! - `http` - The storage service's REST API

pub mod http;
pub mod memory;
pub mod notify;
pub mod persistence;
pub mod scoring;

pub use memory::InMemoryRiskRecordRepository;
pub use notify::{RecordingNotifier, TracingNotifier};
pub use persistence::{HttpPersistenceClient, HttpPersistenceConfig, MockPersistenceClient};
pub use scoring::{HttpPredictionClient, HttpPredictionConfig, MockPredictionClient};
