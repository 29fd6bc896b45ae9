//! Scoring adapters.
//!
//! Implementations of the PredictionClient port.
//!
//! ## Available Adapters
//!
//! - `HttpPredictionClient` - `POST /predict` over reqwest
//! - `MockPredictionClient` - Configurable mock for testing

mod http_prediction_client;
mod mock_prediction_client;

pub use http_prediction_client::{HttpPredictionClient, HttpPredictionConfig};
pub use mock_prediction_client::MockPredictionClient;
