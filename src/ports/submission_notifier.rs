//! Submission Notifier Port - one-shot user-facing notifications.
//!
//! Every submission outcome, success or failure, reaches the user exactly
//! once through this port. Nothing is dropped silently.

use crate::domain::intake::{IntakeField, Verdict};

/// Port for showing submission outcomes to the user.
pub trait SubmissionNotifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The prediction succeeded.
    Verdict(Verdict),
    /// A field could not be encoded; the user must correct it.
    EncodingFailed { field: IntakeField, message: String },
    /// The prediction call failed; nothing was saved.
    PredictionFailed { message: String },
    /// The record was saved.
    Saved { message: String },
    /// Saving failed; the verdict stands.
    SaveFailed { message: String },
}

impl Notification {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notification::Verdict(verdict) => format!("Prediction: {}", verdict.label()),
            Notification::EncodingFailed { message, .. } => message.clone(),
            Notification::PredictionFailed { message } => message.clone(),
            Notification::Saved { message } => format!("Data saved successfully: {}", message),
            Notification::SaveFailed { message } => message.clone(),
        }
    }

    /// True for the notifications that report a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notification::EncodingFailed { .. }
                | Notification::PredictionFailed { .. }
                | Notification::SaveFailed { .. }
        )
    }
}
