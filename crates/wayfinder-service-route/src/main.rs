//! Facility wayfinding HTTP microservice.
//!
//! # Configuration
//!
//! - `WAYFINDER_TOPOLOGY_PATH` - Topology JSON file (default: built-in hospital layout)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `CORS_ALLOWED_ORIGINS` - Comma separated origins, `*` for any
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED`, `METRICS_PATH` - Prometheus endpoint

use std::net::SocketAddr;

use tracing::{error, info};

use wayfinder_service_route::{router, ServiceConfig, SERVICE_NAME};
use wayfinder_service_shared::{init_logging, init_metrics, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(SERVICE_NAME);
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();

    if let Err(e) = init_metrics(&config.metrics) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    info!(
        topology = ?config.topology_path,
        port = config.port,
        origins = ?config.cors.allowed_origins,
        "starting route service"
    );

    // Topology errors are fatal: never serve a partially built facility.
    let state = AppState::load(config.topology_path.as_deref()).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    let app = router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
