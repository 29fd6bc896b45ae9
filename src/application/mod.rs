//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (submit, save) are kept apart from query handlers (get, list).

pub mod handlers;

pub use handlers::intake::{
    PersistenceTask, SubmitError, SubmitIntakeCommand, SubmitIntakeHandler, SubmitIntakeResult,
};
pub use handlers::risk_record::{
    GetRiskRecordHandler, GetRiskRecordQuery, ListRiskRecordsHandler, SaveRiskRecordCommand,
    SaveRiskRecordError, SaveRiskRecordHandler, SaveRiskRecordResult,
};
