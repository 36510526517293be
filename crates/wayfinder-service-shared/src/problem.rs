//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use wayfinder_lib::Error as LibError;

/// Problem type URI for unknown location identifiers.
pub const PROBLEM_UNKNOWN_LOCATION: &str = "/problems/unknown-location";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// Provides a consistent format for error responses across all endpoints.
///
/// # Example
///
/// ```
/// use wayfinder_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_LOCATION};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_LOCATION,
///     "Unknown Location",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("Location 'LBA' not found. Did you mean: LAB?")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Identifiers from the request that are not registered locations.
    #[serde(
        rename = "invalidLocations",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub invalid_locations: Option<Vec<String>>,

    /// Every registered location identifier.
    #[serde(
        rename = "validLocations",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_locations: Option<Vec<String>>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            invalid_locations: None,
            valid_locations: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Override the HTTP status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status.as_u16();
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 400 Bad Request problem naming unknown locations.
    ///
    /// Path queries treat an unknown endpoint as invalid input; lookups of a
    /// single location should switch the status to 404 with
    /// [`ProblemDetails::with_status`].
    pub fn unknown_location(
        ids: &[String],
        valid: &[String],
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let quoted = ids
            .iter()
            .map(|id| format!("'{}'", id))
            .collect::<Vec<_>>()
            .join(", ");
        let mut detail = if ids.len() == 1 {
            format!("Location {} not found", quoted)
        } else {
            format!("Locations {} not found", quoted)
        };
        if !suggestions.is_empty() {
            detail.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
        }
        if !valid.is_empty() {
            detail.push_str(&format!(". Available locations: {}", valid.join(", ")));
        }

        let mut problem = Self::new(
            PROBLEM_UNKNOWN_LOCATION,
            "Unknown Location",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id);
        problem.invalid_locations = Some(ids.to_vec());
        problem.valid_locations = Some(valid.to_vec());
        problem
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Implement IntoResponse for axum to return ProblemDetails as HTTP responses.
impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownLocation {
            ids,
            valid,
            suggestions,
        } => ProblemDetails::unknown_location(ids, valid, suggestions, request_id),
        LibError::MalformedLocation { .. } => {
            ProblemDetails::bad_request(error.to_string(), request_id)
        }
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
