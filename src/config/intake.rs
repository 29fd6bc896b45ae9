//! Intake flow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::intake::IntakeSession;

const MAX_TRANSITION_DELAY_MS: u64 = 10_000;

/// Intake session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Delay between a successful Next and the step change, in milliseconds
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
}

impl IntakeConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Starts a fresh session at step 1 with the configured delay.
    pub fn new_session(&self) -> IntakeSession {
        IntakeSession::new(self.transition_delay())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.transition_delay_ms > MAX_TRANSITION_DELAY_MS {
            return Err(ValidationError::InvalidTransitionDelay);
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

fn default_transition_delay_ms() -> u64 {
    500
}
