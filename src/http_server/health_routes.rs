//! Health Routes
//!
//! Liveness endpoint at `/health`. The roster is loaded before the listener
//! binds, so a served health check implies the index is complete.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::employee_routes::EmployeeState;
use super::response::HealthResponse;

/// Create the health routes
pub fn health_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

/// Health check with the loaded record count
async fn health(State(state): State<Arc<EmployeeState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.index.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Employee, RosterIndex, Track};

    #[tokio::test]
    async fn test_health_reports_record_count() {
        let state = Arc::new(EmployeeState::new(RosterIndex::new(vec![Employee::new(
            "E1",
            "Ada",
            "Lovelace",
            "94105",
            "bio",
            Track::Engineering,
        )])));

        let response = health(State(state)).await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.employees, 1);
    }
}
