//! rosterd - A read-only employee roster lookup service
//!
//! Loads a pipe-delimited roster into memory once at startup, then answers
//! filtered lookups over HTTP.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod roster;
