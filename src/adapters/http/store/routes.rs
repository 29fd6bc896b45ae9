//! HTTP routes for the storage service.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_record, home, list_records, save_record, StoreHandlers};

/// Creates the storage service router.
///
/// # Routes
///
/// - `GET /` - Service banner
/// - `POST /save` - Score and store a submitted record
/// - `GET /records` - List stored records
/// - `GET /records/:id` - Fetch one stored record
pub fn store_routes(handlers: StoreHandlers) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/save", post(save_record))
        .route("/records", get(list_records))
        .route("/records/:id", get(get_record))
        .with_state(handlers)
}
