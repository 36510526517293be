use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::location::LocationId;

/// Minimum similarity score for an identifier to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// Maximum number of suggestions attached to an unknown-location error.
const MAX_SUGGESTIONS: usize = 3;

/// Directed arc within the corridor graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    /// Walking distance in meters.
    pub distance: f64,
}

/// Immutable corridor graph used by the path finder.
///
/// Every undirected corridor is stored as two arcs with identical weight, and
/// every arc target is itself a registered vertex. The adjacency table is
/// behind an `Arc`, so clones are cheap and share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Arc<Vec<LocationId>>,
    adjacency: Arc<HashMap<LocationId, Vec<Edge>>>,
}

impl Graph {
    /// Start building a new graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Whether `id` is a registered vertex.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Return the graph-owned copy of a vertex identifier.
    pub fn vertex(&self, id: &str) -> Option<&LocationId> {
        self.adjacency.get_key_value(id).map(|(key, _)| key)
    }

    /// Return the arcs leaving `id`, or an unknown-location error if the
    /// vertex is not registered.
    pub fn neighbors(&self, id: &str) -> Result<&[Edge]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| self.unknown_location(vec![id.to_string()]))
    }

    /// Arcs leaving a vertex already known to be registered.
    pub(crate) fn adjacent(&self, id: &LocationId) -> &[Edge] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Registered vertices in the order they were declared.
    pub fn vertices(&self) -> impl Iterator<Item = &LocationId> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected corridors, counting each bidirectional pair once.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Build an unknown-location error that names `ids`, lists every valid
    /// identifier and offers close matches.
    pub fn unknown_location(&self, ids: Vec<String>) -> Error {
        let suggestions = self.suggestions_for(&ids);
        Error::UnknownLocation {
            ids,
            valid: self.order.iter().map(|id| id.to_string()).collect(),
            suggestions,
        }
    }

    fn suggestions_for(&self, ids: &[String]) -> Vec<String> {
        let mut scored: Vec<(f64, &LocationId)> = Vec::new();
        for raw in ids {
            let needle = raw.trim().to_ascii_uppercase();
            for candidate in self.order.iter() {
                let score = strsim::normalized_damerau_levenshtein(&needle, candidate.as_str());
                if score >= SUGGESTION_THRESHOLD {
                    scored.push((score, candidate));
                }
            }
        }
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let mut suggestions: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
            if !suggestions.iter().any(|s| s == candidate.as_str()) {
                suggestions.push(candidate.to_string());
            }
        }
        suggestions
    }
}

/// Mutable staging area for a [`Graph`].
///
/// Once [`GraphBuilder::build`] is called the topology is frozen; no
/// add/remove operations exist on the finished graph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    order: Vec<LocationId>,
    adjacency: HashMap<LocationId, Vec<Edge>>,
    total_distance: f64,
}

impl GraphBuilder {
    /// Register a vertex with an empty adjacency list. Idempotent; returns
    /// `true` when the vertex was newly added.
    pub fn add_vertex(&mut self, id: LocationId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Add an undirected corridor as two arcs of identical weight.
    ///
    /// Negative, NaN and infinite weights are rejected, as are self loops.
    /// The sum of all corridor distances must stay finite, so no path cost
    /// can overflow to infinity during a search.
    /// If either endpoint is not registered the call is a no-op and returns
    /// `Ok(false)`; callers that need referential integrity enforced must
    /// check [`GraphBuilder::contains`] first.
    pub fn add_edge(&mut self, a: &LocationId, b: &LocationId, distance: f64) -> Result<bool> {
        if !distance.is_finite() {
            return Err(Error::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                distance,
            });
        }
        if distance < 0.0 {
            return Err(Error::NegativeWeight {
                from: a.to_string(),
                to: b.to_string(),
                distance,
            });
        }
        if a == b {
            return Err(Error::SelfLoop { id: a.to_string() });
        }
        if !self.contains(a.as_str()) || !self.contains(b.as_str()) {
            debug!(from = %a, to = %b, "skipping corridor with unregistered endpoint");
            return Ok(false);
        }
        let total_distance = self.total_distance + distance;
        if !total_distance.is_finite() {
            return Err(Error::DistanceOverflow {
                from: a.to_string(),
                to: b.to_string(),
            });
        }
        self.total_distance = total_distance;

        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.push(Edge {
                target: b.clone(),
                distance,
            });
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.push(Edge {
                target: a.clone(),
                distance,
            });
        }
        Ok(true)
    }

    /// Freeze the staged topology.
    pub fn build(self) -> Graph {
        Graph {
            order: Arc::new(self.order),
            adjacency: Arc::new(self.adjacency),
        }
    }
}
