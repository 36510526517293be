//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the facility graph. The graph is built exactly once, before the
//! listener binds, and is never mutated afterwards.

use std::path::Path;
use std::sync::Arc;

use wayfinder_lib::{Error as LibError, QueryService, Topology};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The topology file could not be read or parsed.
    TopologyLoad(LibError),

    /// The topology was read but is inconsistent (dangling corridor,
    /// negative distance, self loop, ...).
    TopologyInvalid(LibError),

    /// Topology file not found.
    TopologyNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopologyLoad(e) => write!(f, "failed to load topology: {}", e),
            Self::TopologyInvalid(e) => write!(f, "refusing to start with invalid topology: {}", e),
            Self::TopologyNotFound(path) => write!(f, "topology file not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TopologyLoad(e) | Self::TopologyInvalid(e) => Some(e),
            Self::TopologyNotFound(_) => None,
        }
    }
}

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use wayfinder_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let locations = state.service().list_locations();
///     // ... render locations
/// }
///
/// let state = AppState::load(None::<&str>).unwrap();
/// let app = Router::new()
///     .route("/api/v1/locations", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: QueryService,
    source: String,
}

impl AppState {
    /// Build application state from an optional topology file.
    ///
    /// With `None` the built-in hospital layout is used. Any inconsistency in
    /// the topology is fatal.
    pub fn load(topology_path: Option<impl AsRef<Path>>) -> Result<Self, AppStateError> {
        let (topology, source) = match topology_path {
            Some(path) => {
                let path = path.as_ref();
                if !path.exists() {
                    return Err(AppStateError::TopologyNotFound(
                        path.display().to_string(),
                    ));
                }
                tracing::info!(path = %path.display(), "loading topology");
                let topology = Topology::from_path(path).map_err(AppStateError::TopologyLoad)?;
                (topology, path.display().to_string())
            }
            None => {
                tracing::info!("using built-in hospital topology");
                (Topology::hospital(), "built-in".to_string())
            }
        };

        let service =
            QueryService::from_topology(&topology).map_err(AppStateError::TopologyInvalid)?;
        tracing::info!(
            locations = service.location_count(),
            corridors = service.graph().edge_count(),
            source = %source,
            "facility graph built"
        );

        Ok(Self::from_service(service, source))
    }

    /// Create application state from a pre-built query service.
    ///
    /// This is useful for testing or when the topology is assembled in code.
    pub fn from_service(service: QueryService, source: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service,
                source: source.into(),
            }),
        }
    }

    /// Access the query service.
    pub fn service(&self) -> &QueryService {
        &self.inner.service
    }

    /// Where the topology came from ("built-in" or a file path).
    pub fn topology_source(&self) -> &str {
        &self.inner.source
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("location_count", &self.inner.service.location_count())
            .field("topology_source", &self.inner.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_app_state_builtin_topology() {
        let state = AppState::load(None::<&Path>).unwrap();
        assert_eq!(state.service().location_count(), 11);
        assert_eq!(state.topology_source(), "built-in");
    }

    #[test]
    fn test_app_state_clone_shares_graph() {
        let state1 = AppState::load(None::<&Path>).unwrap();
        let state2 = state1.clone();
        assert!(Arc::ptr_eq(&state1.inner, &state2.inner));
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::load(None::<&Path>).unwrap();
        let debug = format!("{:?}", state);

        assert!(debug.contains("AppState"));
        assert!(debug.contains("location_count"));
        assert!(debug.contains("built-in"));
    }

    #[test]
    fn test_app_state_load_nonexistent() {
        let result = AppState::load(Some("/nonexistent/path/to/topology.json"));
        match result.unwrap_err() {
            AppStateError::TopologyNotFound(path) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_app_state_rejects_dangling_corridor() {
        let path = std::env::temp_dir().join(format!(
            "wayfinder-dangling-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"locations":[{{"id":"A"}}],"edges":[{{"from":"A","to":"B","distance":1}}]}}"#
        )
        .unwrap();

        let result = AppState::load(Some(&path));
        let _ = std::fs::remove_file(&path);

        match result.unwrap_err() {
            AppStateError::TopologyInvalid(LibError::UnregisteredEndpoint { missing, .. }) => {
                assert_eq!(missing, "B");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_app_state_error_display() {
        let err = AppStateError::TopologyNotFound("/path/to/topology.json".to_string());
        assert!(err.to_string().contains("/path/to/topology.json"));
        assert!(err.to_string().contains("not found"));
    }
}
