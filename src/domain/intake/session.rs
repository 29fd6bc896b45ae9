//! Intake session - the step state machine.
//!
//! A session walks the user through the four intake steps. Leaving a step
//! is gated by the step validator and takes a fixed transition delay
//! (the visual fade between sections). While the delay runs the session is
//! `Transitioning` and further `advance` calls are ignored, so rapid
//! repeated input moves the user forward by exactly one step.
//!
//! # States
//!
//! ```text
//! Idle(step n) --advance, step n complete--> Transitioning(n -> n+1)
//! Transitioning --delay elapsed--> Idle(step n+1)
//! ```
//!
//! Time is passed in explicitly so the transition can be driven by a test
//! clock. Steps only move forward; there is no way back.

use std::time::Duration;

use tokio::time::Instant;

use crate::domain::foundation::StateMachine;

use super::field::{IntakeField, IntakeStep};
use super::record::IntakeRecord;
use super::validator;

/// Delay between accepting an advance and showing the next step.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(500);

/// Whether the session is between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Transitioning,
}

impl StateMachine for TransitionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TransitionState::*;
        matches!((self, target), (Idle, Transitioning) | (Transitioning, Idle))
    }
}

/// Result of calling [`IntakeSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The step change was accepted and lands at `ready_at`.
    Scheduled {
        from: IntakeStep,
        to: IntakeStep,
        ready_at: Instant,
    },
    /// The last step is complete; the caller should submit.
    ReadyToSubmit,
    /// Nothing changed.
    Ignored(IgnoredReason),
}

/// Why an advance was a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    /// A previous advance is still running.
    Transitioning,
    /// The current step still has empty fields.
    StepIncomplete { missing: Vec<IntakeField> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStep {
    target: IntakeStep,
    ready_at: Instant,
}

/// In-progress intake owned by a single user session.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    step: IntakeStep,
    fields: IntakeRecord,
    transition: TransitionState,
    pending: Option<PendingStep>,
    transition_delay: Duration,
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_DELAY)
    }
}

impl IntakeSession {
    /// Starts a session at step 1 with every field empty.
    pub fn new(transition_delay: Duration) -> Self {
        Self {
            step: IntakeStep::Demographic,
            fields: IntakeRecord::empty(),
            transition: TransitionState::Idle,
            pending: None,
            transition_delay,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Step currently shown to the user.
    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn fields(&self) -> &IntakeRecord {
        &self.fields
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition
    }

    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    /// Step the running transition will land on, if any.
    pub fn pending_step(&self) -> Option<IntakeStep> {
        self.pending.map(|p| p.target)
    }

    /// True when the current step has all its fields.
    pub fn is_current_step_complete(&self) -> bool {
        validator::is_complete(&self.fields, self.step)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Writes a field value. Allowed at any time, including mid-transition.
    pub fn set_field(&mut self, field: IntakeField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Requests the next step.
    ///
    /// Any transition whose delay has elapsed by `now` is settled first.
    pub fn advance(&mut self, now: Instant) -> Advance {
        self.settle(now);

        let Ok(busy) = self.transition.transition_to(TransitionState::Transitioning) else {
            return Advance::Ignored(IgnoredReason::Transitioning);
        };

        if !self.is_current_step_complete() {
            let missing = self
                .step
                .required_fields()
                .into_iter()
                .filter(|field| !self.fields.is_filled(*field))
                .collect();
            return Advance::Ignored(IgnoredReason::StepIncomplete { missing });
        }

        let Some(target) = self.step.next() else {
            return Advance::ReadyToSubmit;
        };

        let ready_at = now + self.transition_delay;
        self.transition = busy;
        self.pending = Some(PendingStep { target, ready_at });
        tracing::debug!(from = %self.step, to = %target, "Intake step transition scheduled");

        Advance::Scheduled {
            from: self.step,
            to: target,
            ready_at,
        }
    }

    /// Completes the running transition if its delay has elapsed.
    ///
    /// Returns the newly entered step when one was committed.
    pub fn settle(&mut self, now: Instant) -> Option<IntakeStep> {
        let pending = self.pending?;
        if now < pending.ready_at {
            return None;
        }

        self.transition = self
            .transition
            .transition_to(TransitionState::Idle)
            .unwrap_or(TransitionState::Idle);
        self.pending = None;
        self.step = pending.target;
        Some(self.step)
    }

    /// Waits out the running transition on the tokio clock.
    pub async fn finish_transition(&mut self) -> IntakeStep {
        if let Some(pending) = self.pending {
            tokio::time::sleep_until(pending.ready_at).await;
            self.settle(Instant::now());
        }
        self.step
    }

    /// Snapshot of the field values for submission.
    ///
    /// Only available on the last step, once it is complete and idle.
    pub fn submission_record(&self) -> Option<IntakeRecord> {
        let ready = self.step.is_last()
            && self.transition == TransitionState::Idle
            && self.is_current_step_complete();
        ready.then(|| self.fields.clone())
    }
}
