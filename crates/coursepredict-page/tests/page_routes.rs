//! Integration tests for the interactive prediction page

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use coursepredict_classifiers::{
    LoadMode, LoadedModel, ModelConfig, ModelMetadata, Predictor, SharedModel,
};
use coursepredict_core::Result;
use coursepredict_page::{build_app, PageConfig, PageState, MISSING_INPUT_MESSAGE, TABLE_CAPTION};
use proptest::prelude::*;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const SAMPLE: &str = include_str!("../../../LogisticRegressionModel.json");

fn addr() -> SocketAddr {
    "127.0.0.1:9100".parse().unwrap()
}

/// Answers a fixed label and counts calls
struct CountingPredictor {
    label: String,
    calls: AtomicU32,
}

#[async_trait]
impl Predictor for CountingPredictor {
    async fn predict(&self, inputs: &[String]) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(inputs.iter().map(|_| self.label.clone()).collect())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn counting_app(label: &str) -> (Router, Arc<CountingPredictor>) {
    let predictor = Arc::new(CountingPredictor {
        label: label.to_string(),
        calls: AtomicU32::new(0),
    });
    let metadata = ModelMetadata {
        name: "counting".to_string(),
        classes: vec![label.to_string()],
        vocabulary_size: 0,
        n_features: 0,
        source: None,
    };
    let model = SharedModel::from_loaded(
        ModelConfig::default(),
        LoadedModel::from_predictor(predictor.clone(), metadata),
    );
    let app = build_app(PageState::new(PageConfig::default(), model), addr());
    (app, predictor)
}

async fn artifact_app(dir: &tempfile::TempDir) -> Router {
    let path = dir.path().join("LogisticRegressionModel.json");
    std::fs::write(&path, SAMPLE).unwrap();
    let config = PageConfig {
        model: ModelConfig::from_local(path),
    };
    let model = SharedModel::load(config.model.clone()).await.unwrap();
    build_app(PageState::new(config, model), addr())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_first_visit_asks_for_a_name() {
    let (app, predictor) = counting_app("Design");

    let (status, html) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Course Keyword Prediction Page"));
    assert!(html.contains("Enter a course name"));
    assert!(html.contains(MISSING_INPUT_MESSAGE));
    assert!(!html.contains("<table"));
    assert_eq!(predictor.calls.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn test_empty_name_skips_prediction() {
    let (app, predictor) = counting_app("Design");

    let (status, html) = get(app, "/?course_name=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(MISSING_INPUT_MESSAGE));
    assert!(!html.contains(TABLE_CAPTION));
    assert_eq!(predictor.calls.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn test_name_renders_one_row() {
    let (app, predictor) = counting_app("Design");

    let (status, html) = get(app, "/?course_name=Graphic+Design+Basics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(TABLE_CAPTION));
    assert_eq!(html.matches("<tr><th>0</th>").count(), 1);
    assert!(html.contains("<td>Graphic Design Basics</td><td>Design</td>"));
    assert!(html.contains("value=\"Graphic Design Basics\""));
    assert!(!html.contains(MISSING_INPUT_MESSAGE));
    assert_eq!(predictor.calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn test_concrete_scenario_with_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let app = artifact_app(&dir).await;

    let (status, html) = get(app, "/?course_name=Intro%20to%20Machine%20Learning").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<td>Intro to Machine Learning</td><td>Data Science</td>"));
}

#[tokio::test]
async fn test_repeated_course_name_uses_first() {
    let dir = tempfile::tempdir().unwrap();
    let app = artifact_app(&dir).await;

    let (status, html) = get(
        app,
        "/?course_name=Intro%20to%20Machine%20Learning&course_name=Graphic%20Design",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("<tr><th>0</th>").count(), 1);
    assert!(html.contains("<td>Intro to Machine Learning</td><td>Data Science</td>"));
    assert!(!html.contains("Graphic Design"));
}

#[tokio::test]
async fn test_cors_allows_origin_on_bound_port() {
    let (app, _) = counting_app("Design");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:9100")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:9100"
    );
}

#[tokio::test]
async fn test_markup_in_name_is_escaped() {
    let (app, _) = counting_app("Development");

    let (_, html) = get(app, "/?course_name=%3Cb%3ERust%3C%2Fb%3E").await;
    assert!(!html.contains("<b>Rust</b>"));
    assert!(html.contains("<td>&lt;b&gt;Rust&lt;/b&gt;</td>"));
}

#[tokio::test]
async fn test_missing_artifact_renders_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let config = PageConfig {
        model: ModelConfig::from_local(dir.path().join("LogisticRegressionModel.json"))
            .with_load_mode(LoadMode::PerRequest),
    };
    let model = SharedModel::load(config.model.clone()).await.unwrap();
    let app = build_app(PageState::new(config, model), addr());

    let (status, html) = get(app, "/?course_name=Rust").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Prediction failed"));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn test_stylesheet_and_health() {
    let (app, _) = counting_app("Design");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

    assert_eq!(get(app.clone(), "/static/missing.js").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get(app.clone(), "/health").await.0, StatusCode::OK);
    assert_eq!(get(app, "/elsewhere").await.0, StatusCode::NOT_FOUND);
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_non_empty_name_gives_one_stable_row(course in "\\PC{1,40}") {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("/?course_name={}", encode(&course));

        let (first, second) = rt.block_on(async {
            let app = artifact_app(&dir).await;
            (get(app.clone(), &uri).await, get(app, &uri).await)
        });

        prop_assert_eq!(first.0, StatusCode::OK);
        prop_assert_eq!(first.1.matches("<tr><th>0</th>").count(), 1);
        prop_assert!(!first.1.contains(MISSING_INPUT_MESSAGE));
        prop_assert_eq!(first, second);
    }
}
