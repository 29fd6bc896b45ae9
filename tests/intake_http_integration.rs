//! End-to-end tests for the intake flow over real HTTP.
//!
//! A single in-process axum server plays both downstream services: a fake
//! scoring model on `/predict` and the real storage routes on `/save`. The
//! reqwest adapters talk to it over loopback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::time::Instant;

use cardio_intake::adapters::http::build_router;
use cardio_intake::adapters::memory::InMemoryRiskRecordRepository;
use cardio_intake::adapters::notify::RecordingNotifier;
use cardio_intake::adapters::persistence::{HttpPersistenceClient, HttpPersistenceConfig};
use cardio_intake::adapters::scoring::{HttpPredictionClient, HttpPredictionConfig};
use cardio_intake::application::handlers::intake::{SubmitIntakeCommand, SubmitIntakeHandler};
use cardio_intake::bootstrap::{store_handlers, IntakeApp};
use cardio_intake::config::{AppConfig, ServerConfig};
use cardio_intake::domain::intake::{
    Advance, EncodedRecord, IntakeField, IntakeSession, IntakeStep, Verdict,
};
use cardio_intake::ports::{
    Notification, PredictionClient, PredictionError, RiskRecordRepository, SubmissionError,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Fake scoring model: at risk from age 60 upwards.
async fn fake_predict(
    State(calls): State<Arc<AtomicUsize>>,
    Json(record): Json<EncodedRecord>,
) -> Json<Value> {
    calls.fetch_add(1, Ordering::SeqCst);
    let prediction = if record.age >= 60 { 1 } else { 0 };
    Json(json!({ "prediction": prediction }))
}

struct TestServer {
    base_url: String,
    predict_calls: Arc<AtomicUsize>,
    repository: Arc<InMemoryRiskRecordRepository>,
}

async fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let predict_calls = Arc::new(AtomicUsize::new(0));
    let repository = Arc::new(InMemoryRiskRecordRepository::new());

    let handlers = store_handlers(&config_for(&base_url), repository.clone()).unwrap();

    let predict = Router::new()
        .route("/predict", post(fake_predict))
        .with_state(predict_calls.clone());
    let app = build_router(handlers, &ServerConfig::default()).merge(predict);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url,
        predict_calls,
        repository,
    }
}

fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.prediction.base_url = base_url.to_string();
    config.persistence.base_url = base_url.to_string();
    config.intake.transition_delay_ms = 0;
    config
}

async fn slow_reply() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({ "prediction": 0 }))
}

/// Server whose `/predict` and `/save` both stall for two seconds.
async fn spawn_slow_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let app = Router::new()
        .route("/predict", post(slow_reply))
        .route("/save", post(slow_reply));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base_url
}

fn submit_handler(base_url: &str, notifier: Arc<RecordingNotifier>) -> SubmitIntakeHandler {
    SubmitIntakeHandler::new(
        Arc::new(HttpPredictionClient::new(HttpPredictionConfig::new(base_url)).unwrap()),
        Arc::new(HttpPersistenceClient::new(HttpPersistenceConfig::new(base_url)).unwrap()),
        notifier,
    )
}

fn fill(session: &mut IntakeSession, values: &[(IntakeField, &str)]) {
    for (field, value) in values {
        session.set_field(*field, *value);
    }
}

/// Walks a zero-delay session through all four steps.
fn completed_session() -> IntakeSession {
    let mut session = IntakeSession::new(Duration::ZERO);

    fill(
        &mut session,
        &[
            (IntakeField::Sex, "Male"),
            (IntakeField::Age, "61"),
            (IntakeField::Education, "3"),
        ],
    );
    assert!(matches!(session.advance(Instant::now()), Advance::Scheduled { .. }));

    fill(&mut session, &[(IntakeField::CigarettesPerDay, "10")]);
    assert!(matches!(session.advance(Instant::now()), Advance::Scheduled { .. }));

    fill(
        &mut session,
        &[
            (IntakeField::OnBpMedication, "Yes"),
            (IntakeField::HadStroke, "No"),
            (IntakeField::HasHypertension, "Yes"),
            (IntakeField::HasDiabetes, "No"),
        ],
    );
    assert!(matches!(session.advance(Instant::now()), Advance::Scheduled { .. }));

    fill(
        &mut session,
        &[
            (IntakeField::Cholesterol, "240"),
            (IntakeField::Bmi, "28.4"),
            (IntakeField::HeartRate, "80"),
            (IntakeField::Glucose, "110"),
            (IntakeField::PulsePressure, "55"),
        ],
    );
    session.settle(Instant::now());
    assert_eq!(session.step(), IntakeStep::MedicalCurrent);
    assert_eq!(session.advance(Instant::now()), Advance::ReadyToSubmit);
    session
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn completed_intake_is_scored_twice_and_stored() {
    let server = spawn_server().await;
    let notifier = Arc::new(RecordingNotifier::new());
    let handler = submit_handler(&server.base_url, notifier.clone());

    let record = completed_session().submission_record().unwrap();
    let result = handler.handle(SubmitIntakeCommand { record }).await.unwrap();

    assert_eq!(result.outcome.verdict, Verdict::AtRisk);
    assert_eq!(result.outcome.record.sex, 1);
    assert_eq!(result.outcome.record.bmi, 28.4);

    let receipt = result.persistence.wait().await.unwrap();
    assert_eq!(receipt.message, "Data saved successfully!");
    assert_eq!(receipt.prediction, Verdict::AtRisk);

    assert_eq!(server.predict_calls.load(Ordering::SeqCst), 2);

    let stored = server.repository.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields().sex, "Male");
    assert_eq!(stored[0].fields().blood_pressure_medications, "Yes");
    assert_eq!(stored[0].prediction(), Verdict::AtRisk);

    let notifications = notifier.notifications();
    assert_eq!(notifications[0], Notification::Verdict(Verdict::AtRisk));
    assert!(matches!(notifications[1], Notification::Saved { .. }));
}

#[tokio::test]
async fn unreachable_prediction_service_fails_without_saving() {
    let server = spawn_server().await;

    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let notifier = Arc::new(RecordingNotifier::new());
    let handler = SubmitIntakeHandler::new(
        Arc::new(HttpPredictionClient::new(HttpPredictionConfig::new(dead_url)).unwrap()),
        Arc::new(
            HttpPersistenceClient::new(HttpPersistenceConfig::new(server.base_url.clone()))
                .unwrap(),
        ),
        notifier.clone(),
    );

    let record = completed_session().submission_record().unwrap();
    let err = handler
        .handle(SubmitIntakeCommand { record })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        cardio_intake::application::SubmitError::Prediction(PredictionError::Network(_))
    ));
    assert_eq!(
        err.user_message(),
        "There was an error making the prediction. Please try again."
    );
    assert!(server.repository.list().await.unwrap().is_empty());
    assert!(notifications_are_errors(&notifier));
}

#[tokio::test]
async fn unreachable_storage_keeps_verdict() {
    let server = spawn_server().await;

    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let notifier = Arc::new(RecordingNotifier::new());
    let handler = SubmitIntakeHandler::new(
        Arc::new(
            HttpPredictionClient::new(HttpPredictionConfig::new(server.base_url.clone())).unwrap(),
        ),
        Arc::new(HttpPersistenceClient::new(HttpPersistenceConfig::new(dead_url)).unwrap()),
        notifier.clone(),
    );

    let record = completed_session().submission_record().unwrap();
    let result = handler.handle(SubmitIntakeCommand { record }).await.unwrap();

    assert_eq!(result.outcome.verdict, Verdict::AtRisk);
    let save = result.persistence.wait().await;
    assert!(matches!(save, Err(SubmissionError::Network(_))));

    let notifications = notifier.notifications();
    assert_eq!(notifications[0], Notification::Verdict(Verdict::AtRisk));
    assert!(matches!(notifications[1], Notification::SaveFailed { .. }));
}

#[tokio::test]
async fn storage_service_rejects_save_when_scoring_is_down() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let store: Arc<dyn RiskRecordRepository> = Arc::new(InMemoryRiskRecordRepository::new());
    let handlers = store_handlers(&config_for(&dead_url), store).unwrap();
    let app = build_router(handlers, &ServerConfig::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let persistence = HttpPersistenceClient::new(HttpPersistenceConfig::new(base_url)).unwrap();
    let record = completed_session().submission_record().unwrap();
    let encoded = cardio_intake::domain::intake::encode(&record).unwrap();
    let request = cardio_intake::ports::SaveRequest::new(
        cardio_intake::domain::intake::ReadableRecord::from_submission(&record, &encoded),
        Verdict::AtRisk,
    );

    let err = cardio_intake::ports::PersistenceClient::save(&persistence, &request)
        .await
        .unwrap_err();

    match err {
        SubmissionError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(
                serde_json::from_str::<Value>(&body).unwrap(),
                json!({"error": "Error saving data!"})
            );
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn configured_intake_app_submits_end_to_end() {
    let server = spawn_server().await;
    let app = IntakeApp::from_config(&config_for(&server.base_url)).unwrap();

    let mut session = app.new_session();
    assert_eq!(session.transition_delay(), Duration::ZERO);
    for field in IntakeField::ALL {
        let value = match field {
            IntakeField::Sex => "Female",
            IntakeField::Age => "45",
            f if f.is_yes_no() => "No",
            IntakeField::Bmi => "22.5",
            _ => "1",
        };
        session.set_field(field, value);
    }
    while session.advance(Instant::now()) != Advance::ReadyToSubmit {
        session.settle(Instant::now());
    }
    assert_eq!(session.step(), IntakeStep::MedicalCurrent);

    let record = session.submission_record().unwrap();
    let result = app
        .submitter()
        .handle(SubmitIntakeCommand { record })
        .await
        .unwrap();
    assert_eq!(result.outcome.verdict, Verdict::NoRisk);

    let receipt = result.persistence.wait().await.unwrap();
    assert_eq!(receipt.prediction, Verdict::NoRisk);

    let stored = server.repository.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields().sex, "Female");
    assert_eq!(stored[0].fields().age, 45);
}

#[tokio::test]
async fn sub_second_prediction_timeout_is_reported_in_millis() {
    let base_url = spawn_slow_server().await;
    let client = HttpPredictionClient::new(
        HttpPredictionConfig::new(base_url).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let record = completed_session().submission_record().unwrap();
    let encoded = cardio_intake::domain::intake::encode(&record).unwrap();
    let err = client.predict(&encoded).await.unwrap_err();

    assert_eq!(err, PredictionError::Timeout { timeout_ms: 200 });
    assert_eq!(err.to_string(), "request timed out after 200ms");
}

#[tokio::test]
async fn sub_second_save_timeout_is_reported_in_millis() {
    let base_url = spawn_slow_server().await;
    let persistence = HttpPersistenceClient::new(
        HttpPersistenceConfig::new(base_url).with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let record = completed_session().submission_record().unwrap();
    let encoded = cardio_intake::domain::intake::encode(&record).unwrap();
    let request = cardio_intake::ports::SaveRequest::new(
        cardio_intake::domain::intake::ReadableRecord::from_submission(&record, &encoded),
        Verdict::NoRisk,
    );
    let err = cardio_intake::ports::PersistenceClient::save(&persistence, &request)
        .await
        .unwrap_err();

    assert_eq!(err, SubmissionError::Timeout { timeout_ms: 200 });
}

fn notifications_are_errors(notifier: &RecordingNotifier) -> bool {
    let notifications = notifier.notifications();
    !notifications.is_empty() && notifications.iter().all(Notification::is_error)
}
