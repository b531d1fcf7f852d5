//! Picto API Library
//!
//! This crate provides the HTTP handlers, error mapping and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
