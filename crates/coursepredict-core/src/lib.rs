//! CoursePredict Core
//!
//! Types and error handling shared by the CoursePredict crates.
//!
//! This crate provides:
//! - The workspace-wide `Error` type and `Result` alias
//! - The `Prediction` pair produced by every front-end

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Prediction;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::Prediction;
}
