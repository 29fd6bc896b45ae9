//! Storage service HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, RiskRecordListResponse, SaveErrorResponse, SaveResponse};
pub use handlers::StoreHandlers;
pub use routes::store_routes;
