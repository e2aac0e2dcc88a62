//! Observability for the roster service
//!
//! Structured JSON logging. Every lifecycle transition and query is a
//! discrete event with explicit fields.

mod logger;

pub use logger::{Logger, Severity};
