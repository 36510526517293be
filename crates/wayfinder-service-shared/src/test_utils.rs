//! Test utilities for handler testing.
//!
//! Provides a shared [`AppState`] over the built-in hospital layout and the
//! identifiers of a few well-known locations in it.

use std::sync::OnceLock;

use wayfinder_lib::QueryService;

use crate::state::AppState;

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared test state over the built-in hospital layout.
///
/// # Panics
///
/// Panics if the built-in layout fails to build.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let service = QueryService::default_facility()
                .unwrap_or_else(|e| panic!("built-in topology failed to build: {}", e));
            AppState::from_service(service, "built-in")
        })
        .clone()
}

/// Locations of the built-in hospital layout used across tests.
pub mod fixture_locations {
    /// Parking Garage, one corridor to the Main Entrance.
    pub const PKG: &str = "PKG";

    /// Main Entrance, the hub with four corridors.
    pub const ME: &str = "ME";

    /// Emergency Room.
    pub const ER: &str = "ER";

    /// Laboratory, 290 m from the Parking Garage.
    pub const LAB: &str = "LAB";

    /// Cafeteria, 310 m from the Emergency Room.
    pub const CAF: &str = "CAF";
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}
