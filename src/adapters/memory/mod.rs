//! In-memory adapters.

mod in_memory_risk_record_repository;

pub use in_memory_risk_record_repository::InMemoryRiskRecordRepository;
