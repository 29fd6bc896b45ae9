//! Storage service entry point.
//!
//! Serves `POST /save` and the record read endpoints, scoring every saved
//! record with the configured prediction service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cardio_intake::adapters::http::build_router;
use cardio_intake::adapters::memory::InMemoryRiskRecordRepository;
use cardio_intake::bootstrap::store_handlers;
use cardio_intake::config::AppConfig;
use cardio_intake::ports::RiskRecordRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let repository: Arc<dyn RiskRecordRepository> = Arc::new(InMemoryRiskRecordRepository::new());
    let handlers = store_handlers(&config, repository)?;
    let app = build_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        prediction_url = %config.prediction.base_url,
        "Storage service listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
