//! Logging and metrics initialization

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("coursepredict_api=debug,coursepredict_classifiers=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("coursepredict_api=info,coursepredict_classifiers=info")
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "coursepredict_requests_total",
        "Total number of prediction requests received"
    );
    metrics::describe_counter!(
        "coursepredict_errors_total",
        "Total number of failed requests by error kind"
    );
    metrics::describe_histogram!(
        "coursepredict_prediction_latency_us",
        metrics::Unit::Microseconds,
        "Time spent resolving the model and predicting, in microseconds"
    );
    metrics::describe_counter!(
        "coursepredict_reloads_total",
        "Total number of successful model reloads"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
