//! # HTTP Server
//!
//! Axum server combining the employee and health routers.
//!
//! Construction takes a fully built [`RosterIndex`], so by the time the
//! listener binds, every record is loaded; no request can observe a
//! partially loaded roster.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::roster::RosterIndex;

use super::config::HttpServerConfig;
use super::employee_routes::{employee_routes, EmployeeState};
use super::health_routes::health_routes;

/// HTTP server for the roster lookup endpoints
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given roster snapshot
    pub fn new(config: HttpServerConfig, index: RosterIndex) -> Self {
        let router = Self::build_router(&config, index);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, index: RosterIndex) -> Router {
        let state = Arc::new(EmployeeState::new(index));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(state.clone()))
            .merge(employee_routes(state))
            .layer(cors)
    }

    /// The socket address string the server will bind
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::info("server_starting", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Employee, Track};

    fn sample_index() -> RosterIndex {
        RosterIndex::new(vec![Employee::new(
            "E1",
            "Ada",
            "Lovelace",
            "94105",
            "bio",
            Track::Engineering,
        )])
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), sample_index());
        assert_eq!(server.socket_addr(), "0.0.0.0:7171");
        let _router = server.router();
    }

    #[test]
    fn test_server_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, sample_index()).router();
    }
}
