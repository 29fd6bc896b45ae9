//! Intake domain module.
//!
//! Collects cardiovascular risk factors over four steps and turns them into
//! the numeric record the scoring model consumes.
//!
//! # Components
//!
//! - `field` - Field and step vocabulary
//! - `record` - Raw string values as entered
//! - `validator` - Per-step presence check gating `advance`
//! - `encoder` - Raw values to [`EncodedRecord`]
//! - `session` - The step state machine
//! - `readable` - Word-encoded record used by the persistence service

mod encoded;
mod encoder;
mod field;
mod readable;
mod record;
mod session;
mod validator;

pub use encoded::{EncodedRecord, PredictionOutcome, Verdict};
pub use encoder::{encode, encode_sex, encode_yes_no, EncodingError};
pub use field::{IntakeField, IntakeStep};
pub use readable::ReadableRecord;
pub use record::IntakeRecord;
pub use session::{
    Advance, IgnoredReason, IntakeSession, TransitionState, DEFAULT_TRANSITION_DELAY,
};
pub use validator::{is_complete, is_step_complete};
