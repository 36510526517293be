//! Wayfinder library entry points.
//!
//! This crate holds the facility navigation engine: the location registry,
//! the immutable corridor graph, Dijkstra shortest-path search, and the query
//! layer that validates caller input and shapes results. Higher-level
//! consumers (CLI, HTTP service) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod location;
pub mod path;
pub mod query;
pub mod registry;
pub mod topology;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder};
pub use location::LocationId;
pub use path::{find_shortest_path, ShortestPath};
pub use query::{
    estimate_walking_minutes, Connection, Connections, GraphInfo, LocationSummary, PathResult,
    QueryService, ServiceSummary, WALKING_SPEED_M_PER_MIN,
};
pub use registry::{LocationMetadata, LocationRegistry, DEFAULT_ICON};
pub use topology::{EdgeSpec, LocationSpec, Topology};
