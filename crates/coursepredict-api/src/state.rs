//! Application state

use coursepredict_classifiers::SharedModel;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::config::ApiConfig;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ApiConfig>,

    /// The model predictions run against
    pub model: SharedModel,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Bundle an already loaded model with its configuration
    pub fn new(config: ApiConfig, model: SharedModel, metrics_handle: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            model,
            metrics_handle,
        }
    }
}
