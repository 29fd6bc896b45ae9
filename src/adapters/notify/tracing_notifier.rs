//! Notifier that logs user notifications.

use crate::ports::{Notification, SubmissionNotifier};

/// Logs failures at `warn` and everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl SubmissionNotifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            tracing::warn!(notification = ?notification, "{}", notification.message());
        } else {
            tracing::info!(notification = ?notification, "{}", notification.message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Verdict;

    #[test]
    fn notify_does_not_panic_without_subscriber() {
        TracingNotifier.notify(Notification::Verdict(Verdict::AtRisk));
        TracingNotifier.notify(Notification::SaveFailed {
            message: "x".to_string(),
        });
    }
}
