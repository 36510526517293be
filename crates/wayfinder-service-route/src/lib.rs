//! Facility wayfinding HTTP microservice.
//!
//! # Endpoints
//!
//! - `GET /` - Service banner
//! - `POST /api/v1/path` - Shortest walking path between two locations
//! - `GET /api/v1/locations` - All locations, sorted by display name
//! - `GET /api/v1/locations/{id}/connections` - Direct corridors of a location
//! - `GET /api/v1/graph` - Location and corridor counts
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

use std::env;
use std::path::PathBuf;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};

use wayfinder_lib::{Connections, Error as LibError, GraphInfo, LocationSummary, PathResult};
use wayfinder_service_shared::{
    cors_layer, extract_or_generate_request_id, from_lib_error, health_live, health_ready,
    metrics_handler, record_locations_queried, record_path_calculated, record_path_failed,
    record_path_stops, AppState, CorsConfig, MetricsConfig, MetricsLayer, PathRequest,
    ProblemDetails, ServiceResponse, Validate,
};

/// Name used for metric labels and logs.
pub const SERVICE_NAME: &str = "route";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// `WAYFINDER_TOPOLOGY_PATH`; the built-in hospital layout when unset.
    pub topology_path: Option<PathBuf>,
    /// `SERVICE_PORT`.
    pub port: u16,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            topology_path: None,
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let topology_path = env::var("WAYFINDER_TOPOLOGY_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let port = match env::var("SERVICE_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid SERVICE_PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            topology_path,
            port,
            cors: CorsConfig::from_env(),
            metrics: MetricsConfig::from_env(),
        }
    }
}

/// Service banner returned from `GET /`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Banner {
    service: &'static str,
    version: &'static str,
    algorithm: &'static str,
    locations: usize,
    endpoints: Vec<&'static str>,
}

/// Location listing. Wrapped in an object so the response envelope can carry
/// `content_type` next to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocationList {
    locations: Vec<LocationSummary>,
    total_locations: usize,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the application router over a pre-built state.
pub fn router(state: AppState, config: &ServiceConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/path", post(path_handler))
        .route("/api/v1/locations", get(locations_handler))
        .route(
            "/api/v1/locations/{id}/connections",
            get(connections_handler),
        )
        .route("/api/v1/graph", get(graph_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if config.metrics.enabled {
        app = app.route(&config.metrics.path, get(metrics_handler));
    }

    app.layer(cors_layer(&config.cors))
        .layer(MetricsLayer)
        .with_state(state)
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(Banner {
        service: "wayfinder-service-route",
        version: env!("CARGO_PKG_VERSION"),
        algorithm: "dijkstra",
        locations: state.service().summary().location_count,
        endpoints: vec![
            "POST /api/v1/path",
            "GET /api/v1/locations",
            "GET /api/v1/locations/{id}/connections",
            "GET /api/v1/graph",
            "GET /health/live",
            "GET /health/ready",
        ],
    })
}

/// Handle POST /api/v1/path requests.
async fn path_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PathRequest>, JsonRejection>,
) -> Response<PathResult> {
    let request_id = extract_or_generate_request_id(&headers);

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            record_path_failed("validation_error", SERVICE_NAME);
            return Response::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id.as_str(),
            ));
        }
    };

    info!(
        request_id = %request_id,
        start = %request.start,
        end = %request.end,
        "handling path request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_path_failed("validation_error", SERVICE_NAME);
        return Response::Error(*problem);
    }

    let result = match state.service().find_path(&request.start, &request.end) {
        Ok(result) => result,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "path request rejected");
            let reason = match e {
                LibError::UnknownLocation { .. } => "unknown_location",
                _ => "validation_error",
            };
            record_path_failed(reason, SERVICE_NAME);
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
    };

    if result.valid {
        record_path_calculated(SERVICE_NAME);
        record_path_stops(result.path.len());
        info!(
            request_id = %request_id,
            distance = result.distance,
            stops = result.path.len(),
            "path computed"
        );
    } else {
        record_path_failed("no_path", SERVICE_NAME);
        info!(request_id = %request_id, "locations are not connected");
    }

    Response::Success(ServiceResponse::new(result))
}

async fn locations_handler(State(state): State<AppState>) -> Response<LocationList> {
    record_locations_queried("list", SERVICE_NAME);
    let locations = state.service().list_locations();
    Response::Success(ServiceResponse::new(LocationList {
        total_locations: locations.len(),
        locations,
    }))
}

/// Handle GET /api/v1/locations/{id}/connections. Unknown locations are 404.
async fn connections_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response<Connections> {
    let request_id = extract_or_generate_request_id(&headers);
    record_locations_queried("connections", SERVICE_NAME);

    match state.service().connections(&id) {
        Ok(connections) => Response::Success(ServiceResponse::new(connections)),
        Err(e) => {
            let problem = from_lib_error(&e, request_id.as_str());
            let problem = match e {
                LibError::UnknownLocation { .. } => problem.with_status(StatusCode::NOT_FOUND),
                _ => problem,
            };
            Response::Error(problem)
        }
    }
}

async fn graph_handler(State(state): State<AppState>) -> Response<GraphInfo> {
    record_locations_queried("graph", SERVICE_NAME);
    Response::Success(ServiceResponse::new(state.service().graph_info()))
}
