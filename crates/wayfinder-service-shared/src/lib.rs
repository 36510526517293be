//! Shared infrastructure for wayfinder HTTP microservices.
//!
//! This crate provides common functionality used by the HTTP front end:
//!
//! - [`AppState`]: Pre-built facility graph and query service shared by handlers
//! - [`health`]: Health check handlers for Kubernetes liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - [`cors`]: Cross-origin configuration for browser front ends
//! - Request types with validation for each endpoint
//!
//! # Architecture
//!
//! The service follows a thin-handler pattern where all navigation logic
//! resides in `wayfinder-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate parameters                                      │
//! │  - Call wayfinder-lib QueryService                          │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a ready-made state over the built-in
//! hospital layout. Enable the `test-utils` feature to access it from
//! dependent crates.

#![deny(warnings)]

pub mod cors;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cors::{cors_layer, CorsConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_locations_queried, record_path_calculated,
    record_path_failed, record_path_stops, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_UNKNOWN_LOCATION,
};
pub use request::{PathRequest, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};
