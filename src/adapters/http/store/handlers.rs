//! HTTP handlers for the storage service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::risk_record::{
    GetRiskRecordHandler, GetRiskRecordQuery, ListRiskRecordsHandler, SaveRiskRecordCommand,
    SaveRiskRecordHandler,
};
use crate::domain::foundation::{ErrorCode, RiskRecordId};
use crate::ports::SaveRequest;

use super::dto::{ErrorResponse, RiskRecordListResponse, SaveErrorResponse, SaveResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct StoreHandlers {
    save_handler: Arc<SaveRiskRecordHandler>,
    get_handler: Arc<GetRiskRecordHandler>,
    list_handler: Arc<ListRiskRecordsHandler>,
}

impl StoreHandlers {
    pub fn new(
        save_handler: Arc<SaveRiskRecordHandler>,
        get_handler: Arc<GetRiskRecordHandler>,
        list_handler: Arc<ListRiskRecordsHandler>,
    ) -> Self {
        Self {
            save_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Service banner
pub async fn home() -> &'static str {
    "Cardiovascular Risk Prediction API"
}

/// POST /save - Score and store a record
pub async fn save_record(
    State(handlers): State<StoreHandlers>,
    Json(req): Json<SaveRequest>,
) -> Response {
    let cmd = SaveRiskRecordCommand { request: req };

    match handlers.save_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SaveResponse::saved(result.record.prediction())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, code = %e.code(), "Error saving data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveErrorResponse::failed()),
            )
                .into_response()
        }
    }
}

/// GET /records - List stored records
pub async fn list_records(State(handlers): State<StoreHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(records) => {
            let response: RiskRecordListResponse = records.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
    }
}

/// GET /records/:id - Fetch one stored record
pub async fn get_record(
    State(handlers): State<StoreHandlers>,
    Path(record_id): Path<String>,
) -> Response {
    let record_id = match record_id.parse::<RiskRecordId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid record ID")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(GetRiskRecordQuery { record_id }).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) if e.code == ErrorCode::RecordNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Risk record", &record_id.to_string())),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.message)),
        )
            .into_response(),
    }
}
