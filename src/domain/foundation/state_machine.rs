//! State machine trait for status enums.
//!
//! Gives status enums (the intake transition state, for one) a single way to
//! validate and perform their transitions.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors say which moves are legal and get a checked
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for TransitionState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Idle, Transitioning) | (Transitioning, Idle))
///     }
/// }
///
/// let busy = TransitionState::Idle.transition_to(TransitionState::Transitioning)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
