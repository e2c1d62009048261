//! CoursePredict API
//!
//! A single-endpoint HTTP service: `GET /course/?course=<name>` answers with
//! the course name and its predicted category as JSON.
//!
//! The model is loaded once at startup into [`AppState`] and shared by every
//! request; `POST /model/reload` swaps in a fresh copy of the artifact.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use cli::Cli;
pub use config::{ApiConfig, ApiSettings};
pub use routes::{create_router, CourseResponse};
pub use state::AppState;
