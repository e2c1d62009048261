use crate::server::{routes, static_files};
use crate::state::PageState;
use axum::{http::HeaderValue, routing::get, Router};
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the Axum application for a server bound to `addr`
pub fn build_app(state: PageState, addr: SocketAddr) -> Router {
    // CORS defaults to local origins; override only for explicit local use.
    let allow_any_origin = std::env::var("COURSEPREDICT_PAGE_ALLOW_ANY_ORIGIN")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let cors = if allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(local_origins(addr)))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/static/*path", get(static_files::serve_static))
        .fallback(static_files::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the server until SIGINT/SIGTERM
pub async fn run_server(state: PageState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state, addr);

    tracing::info!("Starting CoursePredict page on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Origins a browser reports for pages served from `addr`
pub fn local_origins(addr: SocketAddr) -> Vec<HeaderValue> {
    let port = addr.port();
    let mut hosts = vec!["localhost".to_string(), "127.0.0.1".to_string()];

    let ip = addr.ip();
    if !ip.is_loopback() && !ip.is_unspecified() {
        hosts.push(match ip {
            IpAddr::V4(v4) => v4.to_string(),
            IpAddr::V6(v6) => format!("[{}]", v6),
        });
    }

    hosts
        .into_iter()
        .filter_map(|host| HeaderValue::from_str(&format!("http://{}:{}", host, port)).ok())
        .collect()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::warn!("Shutdown signal received, stopping server...");
}
