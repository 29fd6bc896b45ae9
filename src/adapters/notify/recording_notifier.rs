//! Notifier that keeps every notification in memory.

use std::sync::{Arc, Mutex};

use crate::ports::{Notification, SubmissionNotifier};

/// Collects notifications in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl SubmissionNotifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Verdict;

    #[test]
    fn keeps_arrival_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::Verdict(Verdict::NoRisk));
        notifier.notify(Notification::Saved {
            message: "ok".to_string(),
        });

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification::Verdict(Verdict::NoRisk),
                Notification::Saved {
                    message: "ok".to_string()
                },
            ]
        );
    }
}
