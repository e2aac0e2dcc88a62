//! HTTP layer for the roster lookup service
//!
//! Routes, response shapes, and error-to-status mapping. The core query
//! semantics live in [`crate::roster`]; this module only extracts path
//! parameters, validates them, and encodes results as JSON.

mod config;
mod errors;
mod response;
mod server;

pub mod employee_routes;
pub mod health_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{HealthResponse, ListResponse, SingleResponse};
pub use server::HttpServer;
