//! Notification adapters.
//!
//! - `TracingNotifier` - Writes each notification to the log
//! - `RecordingNotifier` - Collects notifications for assertions in tests

mod recording_notifier;
mod tracing_notifier;

pub use recording_notifier::RecordingNotifier;
pub use tracing_notifier::TracingNotifier;
