//! Step validator: decides whether the user may leave a step.
//!
//! Only presence is checked here. Ranges and number formats are left to
//! the encoder.

use super::field::IntakeStep;
use super::record::IntakeRecord;

/// True when every field of the numbered step is non-empty.
///
/// Unknown step numbers are never complete.
pub fn is_step_complete(fields: &IntakeRecord, step: u8) -> bool {
    IntakeStep::from_number(step).is_some_and(|step| is_complete(fields, step))
}

/// Typed variant of [`is_step_complete`].
pub fn is_complete(fields: &IntakeRecord, step: IntakeStep) -> bool {
    step.required_fields()
        .into_iter()
        .all(|field| fields.is_filled(field))
}
