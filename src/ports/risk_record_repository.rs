//! Risk record repository port.
//!
//! Storage behind the persistence service. The schema is owned by the
//! backing store; this port only adds and reads whole records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::RiskRecordId;
use crate::domain::risk_record::RiskRecord;

/// Port for storing risk records.
#[async_trait]
pub trait RiskRecordRepository: Send + Sync {
    /// Stores a new record.
    async fn save(&self, record: &RiskRecord) -> Result<(), RepositoryError>;

    /// Finds a record by id.
    async fn find_by_id(&self, id: &RiskRecordId) -> Result<Option<RiskRecord>, RepositoryError>;

    /// Lists all records, oldest first.
    async fn list(&self) -> Result<Vec<RiskRecord>, RepositoryError>;
}

/// Storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("record already exists: {0}")]
    Duplicate(RiskRecordId),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
