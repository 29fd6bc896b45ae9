//! Risk record domain module.
//!
//! A risk record is what the persistence service keeps for each saved
//! submission: the readable field set plus the verdict the service computed
//! itself.

mod aggregate;

pub use aggregate::RiskRecord;
