//! SubmitIntakeHandler - Two-phase submission of a completed intake.
//!
//! 1. Encode the record snapshot (no network call on failure)
//! 2. Score it with the prediction service (nothing saved on failure)
//! 3. Show the verdict
//! 4. Save in the background; a save failure is a warning, not an error
//!
//! The storage service scores the record again before storing it, so one
//! submission reaches the scoring model twice. Both calls are kept.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::domain::foundation::ErrorCode;
use crate::domain::intake::{
    encode, EncodingError, IntakeRecord, PredictionOutcome, ReadableRecord, Verdict,
};
use crate::ports::{
    Notification, PersistenceClient, PredictionClient, PredictionError, SaveReceipt, SaveRequest,
    SubmissionError, SubmissionNotifier,
};

/// Command to submit a completed intake.
#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    /// Snapshot of the field values at submission time.
    pub record: IntakeRecord,
}

/// Result of a submission whose prediction succeeded.
#[derive(Debug)]
pub struct SubmitIntakeResult {
    /// Authoritative verdict, already shown to the user.
    pub outcome: PredictionOutcome,
    /// The background save. Awaiting it is optional.
    pub persistence: PersistenceTask,
}

/// Handle to the background save started by a submission.
#[derive(Debug)]
pub struct PersistenceTask {
    handle: JoinHandle<Result<SaveReceipt, SubmissionError>>,
}

impl PersistenceTask {
    /// Waits for the save to finish.
    pub async fn wait(self) -> Result<SaveReceipt, SubmissionError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(SubmissionError::Interrupted(e.to_string())),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Fatal submission errors. No verdict was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

impl SubmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitError::Encoding(_) => ErrorCode::EncodingFailed,
            SubmitError::Prediction(_) => ErrorCode::PredictionFailed,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Encoding(e) => e.user_message(),
            SubmitError::Prediction(e) => e.user_message(),
        }
    }
}

/// Handler for intake submissions.
pub struct SubmitIntakeHandler {
    prediction: Arc<dyn PredictionClient>,
    persistence: Arc<dyn PersistenceClient>,
    notifier: Arc<dyn SubmissionNotifier>,
}

impl SubmitIntakeHandler {
    pub fn new(
        prediction: Arc<dyn PredictionClient>,
        persistence: Arc<dyn PersistenceClient>,
        notifier: Arc<dyn SubmissionNotifier>,
    ) -> Self {
        Self {
            prediction,
            persistence,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: SubmitIntakeCommand) -> Result<SubmitIntakeResult, SubmitError> {
        // 1. Encode
        let encoded = encode(&cmd.record).map_err(|e| {
            tracing::warn!(field = %e.field, "Intake record failed to encode");
            self.notifier.notify(Notification::EncodingFailed {
                field: e.field,
                message: e.user_message(),
            });
            e
        })?;

        // 2. Predict
        let verdict = self.prediction.predict(&encoded).await.map_err(|e| {
            tracing::error!(error = %e, "Error making prediction");
            self.notifier.notify(Notification::PredictionFailed {
                message: e.user_message(),
            });
            e
        })?;

        // 3. Show the verdict
        tracing::info!(verdict = %verdict, "Prediction received");
        self.notifier.notify(Notification::Verdict(verdict));

        // 4. Save in the background
        let readable = ReadableRecord::from_submission(&cmd.record, &encoded);
        let request = SaveRequest::new(readable, verdict);
        let persistence = self.spawn_save(request, verdict);

        Ok(SubmitIntakeResult {
            outcome: PredictionOutcome::new(encoded, verdict),
            persistence,
        })
    }

    fn spawn_save(&self, request: SaveRequest, verdict: Verdict) -> PersistenceTask {
        let persistence = Arc::clone(&self.persistence);
        let notifier = Arc::clone(&self.notifier);

        let handle = tokio::spawn(async move {
            let result = persistence.save(&request).await;
            match &result {
                Ok(receipt) => {
                    if receipt.prediction != verdict {
                        tracing::warn!(
                            client_verdict = %verdict,
                            stored_verdict = %receipt.prediction,
                            "Storage service scored the record differently"
                        );
                    }
                    notifier.notify(Notification::Saved {
                        message: receipt.message.clone(),
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error saving data");
                    notifier.notify(Notification::SaveFailed {
                        message: e.user_message(),
                    });
                }
            }
            result
        });

        PersistenceTask { handle }
    }
}
