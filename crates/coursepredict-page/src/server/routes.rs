use crate::server::page::{render_page, PageContent, PredictionTable};
use crate::state::PageState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info};

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Prediction page
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub course_name: Option<String>,
}

impl PageQuery {
    /// Pick `course_name` out of decoded query pairs; the first occurrence wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            course_name: pairs
                .into_iter()
                .find(|(key, _)| key == "course_name")
                .map(|(_, value)| value),
        }
    }
}

pub async fn index(
    State(state): State<PageState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let course_name = PageQuery::from_pairs(pairs).course_name.unwrap_or_default();

    if course_name.is_empty() {
        debug!("No course name entered");
        return Html(render_page("", &PageContent::MissingInput)).into_response();
    }

    match state.model.predict_one(&course_name).await {
        Ok(prediction) => {
            info!(
                course = %prediction.course_name,
                category = %prediction.label,
                "Rendered prediction table"
            );
            let table = PredictionTable::from(prediction);
            Html(render_page(&course_name, &PageContent::Table(table))).into_response()
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(&course_name, &PageContent::Failure(e.to_string()))),
            )
                .into_response()
        }
    }
}
