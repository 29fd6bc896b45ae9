//! Risk record handlers (storage service side).

mod get_risk_record;
mod list_risk_records;
mod save_risk_record;

pub use get_risk_record::{GetRiskRecordHandler, GetRiskRecordQuery};
pub use list_risk_records::ListRiskRecordsHandler;
pub use save_risk_record::{
    SaveRiskRecordCommand, SaveRiskRecordError, SaveRiskRecordHandler, SaveRiskRecordResult,
};
