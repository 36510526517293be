//! Query layer between callers and the path finder.
//!
//! [`QueryService`] owns the immutable graph and registry, normalizes
//! caller-supplied identifiers, validates them, and shapes results into the
//! transport-agnostic types exposed by the CLI and HTTP service.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::LocationId;
use crate::path::find_shortest_path;
use crate::registry::LocationRegistry;
use crate::topology::Topology;

/// Average walking speed used for time estimates, in meters per minute.
pub const WALKING_SPEED_M_PER_MIN: f64 = 80.0;

/// Result of a path query.
///
/// `valid == false` with an empty path and zero distance means the two
/// locations exist but no corridor sequence connects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    pub distance: f64,
    pub path: Vec<String>,
    pub path_names: Vec<String>,
    pub valid: bool,
    pub estimated_time_minutes: u64,
}

impl PathResult {
    fn unreachable() -> Self {
        Self {
            distance: 0.0,
            path: Vec::new(),
            path_names: Vec::new(),
            valid: false,
            estimated_time_minutes: 0,
        }
    }
}

/// A location together with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub full_name: String,
}

/// Direct neighbour of a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connections {
    pub location: String,
    pub location_name: String,
    pub connections: Vec<Connection>,
    pub total_connections: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInfo {
    pub locations: Vec<LocationSummary>,
    pub total_locations: usize,
    pub total_connections: usize,
}

/// Size of the loaded facility, for banners and health probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub location_count: usize,
    pub corridor_count: usize,
    pub loaded: bool,
}

/// Estimated walking time for `distance` meters, rounded to the nearest
/// minute with ties going to the even minute. Any positive distance takes at
/// least one minute.
pub fn estimate_walking_minutes(distance: f64) -> u64 {
    if distance <= 0.0 {
        return 0;
    }
    let minutes = (distance / WALKING_SPEED_M_PER_MIN).round_ties_even() as u64;
    minutes.max(1)
}

fn round_distance(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}

/// Read-only query facade over a facility graph.
#[derive(Debug, Clone)]
pub struct QueryService {
    graph: Graph,
    registry: LocationRegistry,
}

impl QueryService {
    pub fn new(graph: Graph, registry: LocationRegistry) -> Self {
        Self { graph, registry }
    }

    /// Validate and build a service from a topology definition.
    pub fn from_topology(topology: &Topology) -> Result<Self> {
        let (graph, registry) = topology.build()?;
        Ok(Self::new(graph, registry))
    }

    /// Service over the built-in hospital layout.
    pub fn default_facility() -> Result<Self> {
        Self::from_topology(&Topology::hospital())
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn location_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn summary(&self) -> ServiceSummary {
        ServiceSummary {
            location_count: self.graph.vertex_count(),
            corridor_count: self.graph.edge_count(),
            loaded: !self.graph.is_empty(),
        }
    }

    /// Normalize a caller-supplied identifier (trim, case-fold).
    pub fn normalize(raw: &str) -> Result<LocationId> {
        LocationId::parse(raw)
    }

    /// Compute the shortest walking path between two locations.
    pub fn find_path(&self, start: &str, end: &str) -> Result<PathResult> {
        let start = Self::normalize(start)?;
        let end = Self::normalize(end)?;

        let mut missing = Vec::new();
        if !self.graph.contains(start.as_str()) {
            missing.push(start.to_string());
        }
        if !self.graph.contains(end.as_str()) && end != start {
            missing.push(end.to_string());
        }
        if !missing.is_empty() {
            return Err(self.graph.unknown_location(missing));
        }

        if start == end {
            let name = self.registry.display_name(&start).to_string();
            return Ok(PathResult {
                distance: 0.0,
                path: vec![start.to_string()],
                path_names: vec![name],
                valid: true,
                estimated_time_minutes: 0,
            });
        }

        let Some(found) = find_shortest_path(&self.graph, &start, &end)? else {
            debug!(start = %start, end = %end, "locations are not connected");
            return Ok(PathResult::unreachable());
        };

        let path_names = found
            .path
            .iter()
            .map(|id| self.registry.display_name(id).to_string())
            .collect();

        Ok(PathResult {
            distance: round_distance(found.distance),
            path: found.path.iter().map(LocationId::to_string).collect(),
            path_names,
            valid: true,
            estimated_time_minutes: estimate_walking_minutes(found.distance),
        })
    }

    /// Every registered location with metadata, sorted by display name.
    pub fn list_locations(&self) -> Vec<LocationSummary> {
        let mut locations: Vec<LocationSummary> =
            self.graph.vertices().map(|id| self.summarize(id)).collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        locations
    }

    /// Direct corridors leaving `location`.
    ///
    /// An identifier that can never name a vertex is reported as unknown,
    /// the same as a well-formed identifier that is not registered.
    pub fn connections(&self, location: &str) -> Result<Connections> {
        let id = match Self::normalize(location) {
            Ok(id) => id,
            Err(Error::MalformedLocation { .. }) => {
                return Err(self.graph.unknown_location(vec![location.trim().to_string()]));
            }
            Err(e) => return Err(e),
        };
        let edges = self.graph.neighbors(id.as_str())?;

        let connections: Vec<Connection> = edges
            .iter()
            .map(|edge| Connection {
                id: edge.target.to_string(),
                name: self.registry.display_name(&edge.target).to_string(),
                icon: self.registry.icon(&edge.target).to_string(),
                distance: edge.distance,
            })
            .collect();

        Ok(Connections {
            location_name: self.registry.display_name(&id).to_string(),
            location: id.to_string(),
            total_connections: connections.len(),
            connections,
        })
    }

    /// Vertex and undirected corridor counts plus the location list in
    /// declaration order.
    pub fn graph_info(&self) -> GraphInfo {
        let locations: Vec<LocationSummary> =
            self.graph.vertices().map(|id| self.summarize(id)).collect();
        GraphInfo {
            total_locations: locations.len(),
            total_connections: self.graph.edge_count(),
            locations,
        }
    }

    fn summarize(&self, id: &LocationId) -> LocationSummary {
        let meta = self.registry.describe(id);
        LocationSummary {
            id: id.to_string(),
            name: meta.name,
            icon: meta.icon,
            full_name: meta.full_name,
        }
    }
}
