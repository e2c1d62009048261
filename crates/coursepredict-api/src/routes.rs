//! HTTP routes and handlers

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use coursepredict_core::Prediction;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/course/", get(predict_course))
        .route("/course", get(course_without_slash))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/model/reload", post(reload_model))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Query string of `GET /course/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    /// Course name to classify; missing is treated like empty
    pub course: Option<String>,
}

impl CourseQuery {
    /// Pick `course` out of decoded query pairs; the first occurrence wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            course: pairs
                .into_iter()
                .find(|(key, _)| key == "course")
                .map(|(_, value)| value),
        }
    }
}

/// Body of a successful `GET /course/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub course_name: String,
    pub predicted_category: String,
}

impl From<Prediction> for CourseResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            course_name: prediction.course_name,
            predicted_category: prediction.label,
        }
    }
}

/// Predict the category of one course name
async fn predict_course(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CourseResponse>, AppError> {
    metrics::counter!("coursepredict_requests_total").increment(1);

    let course = CourseQuery::from_pairs(pairs).course.unwrap_or_default();
    if course.is_empty() && state.config.api.reject_empty_course {
        return Err(coursepredict_core::Error::invalid_input(
            "query parameter 'course' must be a non-empty course name",
        )
        .into());
    }

    let start = Instant::now();
    let prediction = state.model.predict_one(&course).await?;
    metrics::histogram!("coursepredict_prediction_latency_us")
        .record(start.elapsed().as_micros() as f64);

    info!(
        course = %prediction.course_name,
        category = %prediction.label,
        "Served prediction"
    );

    Ok(Json(prediction.into()))
}

/// `/course` without the trailing slash redirects, keeping the query string
async fn course_without_slash(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("/course/?{}", query),
        None => "/course/".to_string(),
    };
    Redirect::permanent(&target)
}

/// Re-read the artifact and swap it in
async fn reload_model(State(state): State<AppState>) -> Result<Response, AppError> {
    let model = state.model.reload().await?;
    metrics::counter!("coursepredict_reloads_total").increment(1);

    let metadata = model.metadata();
    Ok(Json(json!({
        "status": "reloaded",
        "model": metadata.name,
        "classes": metadata.classes.len(),
    }))
    .into_response())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    InternalError(String),
}

impl From<coursepredict_core::Error> for AppError {
    fn from(err: coursepredict_core::Error) -> Self {
        metrics::counter!("coursepredict_errors_total", "kind" => err.kind()).increment(1);

        if err.is_client_error() {
            warn!("Rejected request: {}", err);
            AppError::InvalidRequest(err.to_string())
        } else {
            error!("Prediction failed: {}", err);
            AppError::InternalError(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error_type) = match self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg, "invalid_request_error")
            }
            AppError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "server_error")
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "type": error_type,
            }
        });

        (status, Json(body)).into_response()
    }
}
