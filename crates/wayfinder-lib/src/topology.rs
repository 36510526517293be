//! Facility topology definitions.
//!
//! A [`Topology`] is the fixed configuration the engine is built from: the
//! declared locations with their display metadata and the weighted corridors
//! between them. The built-in hospital layout is available through
//! [`Topology::hospital`]; an alternative layout can be supplied as a JSON
//! file and loaded with [`Topology::from_path`].
//!
//! [`Topology::build`] is the only place untrusted topology data is turned
//! into a [`Graph`]. It is strict: a corridor that references an undeclared
//! location, a negative or non-finite distance, or a self loop aborts the
//! build rather than being dropped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::LocationId;
use crate::registry::{LocationMetadata, LocationRegistry, DEFAULT_ICON};

/// Declared location with optional display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl LocationSpec {
    fn metadata(&self) -> Option<LocationMetadata> {
        let name = self.name.clone()?;
        Some(LocationMetadata {
            icon: self.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
            full_name: self.full_name.clone().unwrap_or_else(|| name.clone()),
            name,
        })
    }
}

/// Undirected corridor between two declared locations, weighted in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Complete facility layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub locations: Vec<LocationSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

const HOSPITAL_LOCATIONS: &[(&str, &str, &str, &str)] = &[
    ("PKG", "Parking Garage", "🅿️", "Parking Garage"),
    ("ME", "Main Entrance", "🚪", "Main Entrance & Reception"),
    ("ER", "Emergency Room", "🚑", "Emergency Room"),
    ("OPC", "Outpatient Clinic", "🏥", "Outpatient Clinic"),
    ("RAD", "Radiology", "🩻", "Radiology & Imaging Center"),
    ("LAB", "Laboratory", "🧪", "Laboratory"),
    ("SUR", "Surgical Center", "🔬", "Surgical Center"),
    ("IWA", "Inpatient Ward A", "🛏️", "Inpatient Ward A"),
    ("IWB", "Inpatient Ward B", "🏨", "Inpatient Ward B"),
    ("PHR", "Pharmacy", "💊", "Pharmacy"),
    ("CAF", "Cafeteria", "🍽️", "Cafeteria"),
];

const HOSPITAL_EDGES: &[(&str, &str, f64)] = &[
    ("PKG", "ME", 100.0),
    ("ME", "OPC", 120.0),
    ("ME", "CAF", 50.0),
    ("ME", "IWA", 150.0),
    ("ER", "RAD", 60.0),
    ("ER", "SUR", 90.0),
    ("OPC", "LAB", 70.0),
    ("OPC", "PHR", 80.0),
    ("RAD", "LAB", 40.0),
    ("RAD", "IWA", 110.0),
    ("RAD", "IWB", 130.0),
    ("LAB", "PHR", 50.0),
    ("IWA", "IWB", 80.0),
    ("IWA", "SUR", 100.0),
    ("IWB", "SUR", 70.0),
    ("CAF", "IWA", 140.0),
];

impl Topology {
    /// The built-in hospital layout: 11 locations joined by 16 corridors.
    pub fn hospital() -> Self {
        Self {
            locations: HOSPITAL_LOCATIONS
                .iter()
                .map(|&(id, name, icon, full_name)| LocationSpec {
                    id: id.to_string(),
                    name: Some(name.to_string()),
                    icon: Some(icon.to_string()),
                    full_name: Some(full_name.to_string()),
                })
                .collect(),
            edges: HOSPITAL_EDGES
                .iter()
                .map(|&(from, to, distance)| EdgeSpec {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
                .collect(),
        }
    }

    /// Parse a topology from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::TopologyJson {
            message: e.to_string(),
        })
    }

    /// Load a topology from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let topology = Self::from_json_str(&contents).map_err(|e| match e {
            Error::TopologyJson { message } => Error::TopologyParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        info!(path = %path.display(), "loaded topology file");
        Ok(topology)
    }

    /// Validate the layout and build the immutable graph and registry.
    pub fn build(&self) -> Result<(Graph, LocationRegistry)> {
        if self.locations.is_empty() {
            return Err(Error::EmptyTopology);
        }

        let mut builder = Graph::builder();
        let mut metadata = Vec::new();
        for spec in &self.locations {
            let id = LocationId::parse(&spec.id)?;
            if !builder.add_vertex(id.clone()) {
                debug!(location = %id, "location declared more than once");
            }
            if let Some(meta) = spec.metadata() {
                metadata.push((id, meta));
            }
        }

        for edge in &self.edges {
            let from = LocationId::parse(&edge.from)?;
            let to = LocationId::parse(&edge.to)?;
            for endpoint in [&from, &to] {
                if !builder.contains(endpoint.as_str()) {
                    return Err(Error::UnregisteredEndpoint {
                        from: from.to_string(),
                        to: to.to_string(),
                        missing: endpoint.to_string(),
                    });
                }
            }
            builder.add_edge(&from, &to, edge.distance)?;
        }

        let graph = builder.build();
        let registry = LocationRegistry::from_entries(metadata);
        debug!(
            locations = graph.vertex_count(),
            corridors = graph.edge_count(),
            described = registry.len(),
            "topology built"
        );
        Ok((graph, registry))
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::hospital()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hospital_topology_builds() {
        let (graph, registry) = Topology::hospital().build().unwrap();
        assert_eq!(graph.vertex_count(), 11);
        assert_eq!(graph.edge_count(), 16);
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn spec_without_name_has_no_metadata() {
        let spec = LocationSpec {
            id: "GYM".to_string(),
            name: None,
            icon: Some("x".to_string()),
            full_name: None,
        };
        assert!(spec.metadata().is_none());
    }

    #[test]
    fn spec_fills_missing_icon_and_full_name() {
        let spec = LocationSpec {
            id: "GYM".to_string(),
            name: Some("Gym".to_string()),
            icon: None,
            full_name: None,
        };
        let meta = spec.metadata().unwrap();
        assert_eq!(meta.icon, DEFAULT_ICON);
        assert_eq!(meta.full_name, "Gym");
    }
}
