//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request for computing a walking path between two locations.
///
/// Both fields are location identifiers; they are trimmed and case-folded by
/// the query layer, so `" lab "` and `"LAB"` are equivalent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    /// Starting location identifier.
    pub start: String,

    /// Destination location identifier.
    pub end: String,
}

impl Validate for PathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'start' field is required and cannot be empty",
                request_id,
            )));
        }

        if self.end.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'end' field is required and cannot be empty",
                request_id,
            )));
        }

        Ok(())
    }
}
