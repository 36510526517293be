//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for Kubernetes liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of locations in the facility graph (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_loaded: Option<usize>,

    /// Number of undirected corridors (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corridors_loaded: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: None,
            corridors_loaded: None,
        }
    }

    pub fn ready(service: &str, version: &str, locations: usize, corridors: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: Some(locations),
            corridors_loaded: Some(corridors),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            locations_loaded: None,
            corridors_loaded: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"wayfinder-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 503 when the facility graph has no locations.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"wayfinder-service-shared","version":"0.1.0","locations_loaded":11,"corridors_loaded":16}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let summary = state.service().summary();
    if !summary.loaded {
        let status = HealthStatus::not_ready(service, version, "no locations loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(
        service,
        version,
        summary.location_count,
        summary.corridor_count,
    );
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_state;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert!(status.locations_loaded.is_none());
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no data");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data"));
    }

    #[test]
    fn test_health_status_serialization_skips_counts() {
        let json = serde_json::to_string(&HealthStatus::alive("route", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("locations_loaded"));
    }

    #[tokio::test]
    async fn test_health_ready_reports_graph_size() {
        let response = health_ready(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_empty_graph_is_unavailable() {
        use wayfinder_lib::{Graph, LocationRegistry, QueryService};

        let service = QueryService::new(Graph::builder().build(), LocationRegistry::default());
        let state = AppState::from_service(service, "empty");
        let response = health_ready(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_health_status_ready_counts() {
        let status = HealthStatus::ready("svc", "0.1.0", 11, 16);
        assert_eq!(status.locations_loaded, Some(11));
        assert_eq!(status.corridors_loaded, Some(16));
    }
}
