//! CoursePredict interactive page
//!
//! A form asking for a course name; submitting it renders a one-row
//! prediction table underneath.

pub mod cli;
pub mod config;
pub mod server;
pub mod state;

pub use cli::*;
pub use config::*;
pub use server::*;
pub use state::*;
