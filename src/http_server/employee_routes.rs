//! Employee HTTP Routes
//!
//! The five lookup endpoints over the roster snapshot:
//!
//! - `GET /employees` — all records, sorted by last name
//! - `GET /employees/lastname/{name}` — last-name substring matches
//! - `GET /employees/hometownzip/{zip}` — home-ZIP substring matches
//! - `GET /employees/track/{track}` — exact track matches
//! - `GET /employees/{id}` — one record by id
//!
//! Path parameters are trimmed before use; a blank parameter is rejected as
//! client input, never forwarded to the index.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::observability::Logger;
use crate::roster::{Employee, RosterIndex, Track};

use super::errors::{ApiError, ApiResult};
use super::response::{ListResponse, SingleResponse};

/// Shared state for the employee handlers
pub struct EmployeeState {
    /// The immutable roster snapshot, built before the server starts
    pub index: RosterIndex,
}

impl EmployeeState {
    pub fn new(index: RosterIndex) -> Self {
        Self { index }
    }
}

/// Create the employee routes
pub fn employee_routes(state: Arc<EmployeeState>) -> Router {
    Router::new()
        .route("/employees", get(get_all))
        .route("/employees/lastname/:lastname", get(get_by_last_name))
        .route("/employees/hometownzip/:zip", get(get_by_hometown_zip))
        .route("/employees/track/:track", get(get_by_track))
        .route("/employees/:id", get(get_by_id))
        .with_state(state)
}

/// Reject blank path parameters before they reach the index
fn require_param<'a>(name: &'static str, raw: &'a str) -> ApiResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BlankParam(name));
    }
    Ok(trimmed)
}

/// All employees, sorted ascending by last name
async fn get_all(
    State(state): State<Arc<EmployeeState>>,
) -> ApiResult<Json<ListResponse<Employee>>> {
    Logger::trace("get_all", &[]);
    Ok(Json(ListResponse::new(state.index.all_sorted())))
}

/// Employees whose last name contains the given substring
async fn get_by_last_name(
    State(state): State<Arc<EmployeeState>>,
    Path(lastname): Path<String>,
) -> ApiResult<Json<ListResponse<Employee>>> {
    let query = require_param("lastname", &lastname)?;
    Logger::trace("get_by_last_name", &[("query", query)]);

    Ok(Json(ListResponse::new(state.index.by_last_name(query))))
}

/// Employees whose home ZIP contains the given substring
async fn get_by_hometown_zip(
    State(state): State<Arc<EmployeeState>>,
    Path(zip): Path<String>,
) -> ApiResult<Json<ListResponse<Employee>>> {
    let query = require_param("hometownzip", &zip)?;
    Logger::trace("get_by_hometown_zip", &[("query", query)]);

    Ok(Json(ListResponse::new(state.index.by_hometown_zip(query))))
}

/// Employees on the given track
async fn get_by_track(
    State(state): State<Arc<EmployeeState>>,
    Path(track): Path<String>,
) -> ApiResult<Json<ListResponse<Employee>>> {
    let token = require_param("track", &track)?;
    Logger::trace("get_by_track", &[("track", token)]);

    let track: Track = token
        .parse()
        .map_err(|_| ApiError::UnknownTrack(token.to_string()))?;

    Ok(Json(ListResponse::new(state.index.by_track(track))))
}

/// One employee by exact id
async fn get_by_id(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse<Employee>>> {
    let id = require_param("id", &id)?;
    Logger::trace("get_by_id", &[("id", id)]);

    state
        .index
        .by_id(id)
        .map(|e| Json(SingleResponse::new(e)))
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> Arc<EmployeeState> {
        Arc::new(EmployeeState::new(RosterIndex::new(vec![
            Employee::new("E1", "Ada", "Lovelace", "94105", "bio", Track::Engineering),
            Employee::new("E2", "Grace", "Hopper", "20374", "bio", Track::Engineering),
            Employee::new("E3", "Don", "Draper", "10104", "bio", Track::Marketing),
        ])))
    }

    #[test]
    fn test_router_builds() {
        let _router = employee_routes(sample_state());
    }

    #[tokio::test]
    async fn test_get_all_sorted() {
        let response = get_all(State(sample_state())).await.unwrap();
        let names: Vec<&str> = response
            .0
            .data
            .iter()
            .map(|e| e.last_name.as_str())
            .collect();
        assert_eq!(names, vec!["Draper", "Hopper", "Lovelace"]);
        assert_eq!(response.0.count, 3);
    }

    #[tokio::test]
    async fn test_get_by_last_name_match() {
        let response = get_by_last_name(State(sample_state()), Path("ov".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.count, 1);
        assert_eq!(response.0.data[0].id, "E1");
    }

    #[tokio::test]
    async fn test_get_by_last_name_trims_whitespace() {
        let response = get_by_last_name(State(sample_state()), Path("  hopper  ".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.count, 1);
        assert_eq!(response.0.data[0].id, "E2");
    }

    #[tokio::test]
    async fn test_get_by_last_name_blank_is_client_error() {
        let err = get_by_last_name(State(sample_state()), Path("   ".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BlankParam("lastname")));
    }

    #[tokio::test]
    async fn test_get_by_last_name_no_match_is_empty_list() {
        let response = get_by_last_name(State(sample_state()), Path("zzz".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.count, 0);
    }

    #[tokio::test]
    async fn test_get_by_track_case_insensitive_token() {
        let response = get_by_track(State(sample_state()), Path("engineering".to_string()))
            .await
            .unwrap();
        let ids: Vec<&str> = response.0.data.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["E1", "E2"]);
    }

    #[tokio::test]
    async fn test_get_by_track_unknown_token_is_client_error() {
        let err = get_by_track(State(sample_state()), Path("ASTROLOGY".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnknownTrack(_)));
    }

    #[tokio::test]
    async fn test_get_by_track_no_members_is_empty_list() {
        let response = get_by_track(State(sample_state()), Path("SUPPORT".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.count, 0);
    }

    #[tokio::test]
    async fn test_get_by_hometown_zip() {
        let response = get_by_hometown_zip(State(sample_state()), Path("1010".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.count, 1);
        assert_eq!(response.0.data[0].id, "E3");
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let response = get_by_id(State(sample_state()), Path("E2".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0.data.first_name, "Grace");
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_not_found() {
        let err = get_by_id(State(sample_state()), Path("E9".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
