//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `intake` - Intake fields, step validation, encoding, and the step state machine
//! - `risk_record` - Stored record produced by the persistence service

pub mod foundation;
pub mod intake;
pub mod risk_record;
