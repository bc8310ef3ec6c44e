//! eventlog-gateway server entry point.
//!
//! Starts the Axum HTTP server with the event log and status endpoints.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use eventlog_gateway::api;
use eventlog_gateway::app_state::AppState;
use eventlog_gateway::config::GatewayConfig;
use eventlog_gateway::monitor::BackupMonitor;
use eventlog_gateway::persistence::EventStore;
use eventlog_gateway::service::StatusService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting eventlog-gateway");

    // Storage: a failure here is retried by every request that needs it
    let event_store = EventStore::new(&config);
    match event_store.initialize().await {
        Ok(()) => tracing::info!(db = %event_store.db_path().display(), "storage ready"),
        Err(e) => tracing::warn!(error = %e, "storage not ready at startup"),
    }

    let monitor = Arc::new(BackupMonitor::new(&config)?);
    tracing::info!(
        dir = %monitor.dir().display(),
        pattern = %config.backup_pattern,
        "watching backups"
    );

    // Build service layer
    let status_service = StatusService::new(event_store.clone(), monitor);

    // Build application state
    let app_state = AppState {
        event_store: event_store.clone(),
        status_service,
    };

    let app = api::build_app(app_state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    event_store.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
