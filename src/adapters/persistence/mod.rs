//! Persistence adapters.
//!
//! Implementations of the PersistenceClient port.
//!
//! ## Available Adapters
//!
//! - `HttpPersistenceClient` - `POST /save` over reqwest
//! - `MockPersistenceClient` - Configurable mock for testing

mod http_persistence_client;
mod mock_persistence_client;

pub use http_persistence_client::{HttpPersistenceClient, HttpPersistenceConfig};
pub use mock_persistence_client::MockPersistenceClient;
