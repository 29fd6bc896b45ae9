//! In-memory risk record repository.
//!
//! Keeps records in insertion order for the lifetime of the process.
//! Useful for development, tests, and single-instance deployments where
//! losing records on restart is acceptable.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::RiskRecordId;
use crate::domain::risk_record::RiskRecord;
use crate::ports::{RepositoryError, RiskRecordRepository};

/// In-memory implementation of the RiskRecordRepository port.
#[derive(Default)]
pub struct InMemoryRiskRecordRepository {
    records: Mutex<Vec<RiskRecord>>,
}

impl InMemoryRiskRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<RiskRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RiskRecordRepository for InMemoryRiskRecordRepository {
    async fn save(&self, record: &RiskRecord) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(RepositoryError::Duplicate(*record.id()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RiskRecordId) -> Result<Option<RiskRecord>, RepositoryError> {
        Ok(self.lock()?.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<RiskRecord>, RepositoryError> {
        Ok(self.lock()?.clone())
    }
}
