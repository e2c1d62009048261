//! CoursePredict API
//!
//! Serves `GET /course/?course=<name>` with the predicted course category.

use anyhow::Result;
use clap::Parser;
use coursepredict_api::{create_router, telemetry, ApiConfig, AppState, Cli};
use coursepredict_classifiers::SharedModel;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    telemetry::init_tracing(cli.verbose);

    info!("Starting CoursePredict API");

    // Load configuration
    let config = ApiConfig::load(&cli)?;
    info!("Model artifact: {:?}", config.model.path);
    info!("Load mode: {:?}", config.model.load_mode);
    info!("Reject empty course: {}", config.api.reject_empty_course);

    // Initialize metrics
    let metrics_handle = telemetry::init_metrics()?;

    // A missing or corrupt artifact stops the process here in startup mode
    let model = SharedModel::load(config.model.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load model {:?}: {}", config.model.path, e))?;

    let state = AppState::new(config, model, metrics_handle);

    let addr: SocketAddr = format!("{}:{}", cli.listen, cli.port).parse()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}
