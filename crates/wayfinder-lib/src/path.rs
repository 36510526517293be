use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::location::LocationId;

/// Lowest-cost route between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Sum of the corridor weights along `path`, in meters.
    pub distance: f64,
    /// Ordered stops from start to end, both inclusive.
    pub path: Vec<LocationId>,
}

impl ShortestPath {
    /// Number of corridors walked.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm from `start` and stop as soon as `end` is settled.
///
/// Precondition: every corridor weight is non-negative and the sum of all
/// weights is finite. [`crate::GraphBuilder`] enforces both at construction
/// time, so neither is re-checked here.
///
/// Returns `Ok(None)` when `end` is unreachable from `start`, and an
/// unknown-location error when either endpoint is not a registered vertex.
/// Equal-distance queue entries pop in identifier order; callers must not
/// depend on which of several equally short paths is returned.
pub fn find_shortest_path(
    graph: &Graph,
    start: &LocationId,
    end: &LocationId,
) -> Result<Option<ShortestPath>> {
    let (start, end) = match (graph.vertex(start.as_str()), graph.vertex(end.as_str())) {
        (Some(start), Some(end)) => (start, end),
        (start_vertex, end_vertex) => {
            let mut missing = Vec::new();
            if start_vertex.is_none() {
                missing.push(start.to_string());
            }
            if end_vertex.is_none() && end != start {
                missing.push(end.to_string());
            }
            return Err(graph.unknown_location(missing));
        }
    };

    let mut distances: HashMap<&LocationId, f64> =
        graph.vertices().map(|id| (id, f64::INFINITY)).collect();
    let mut previous: HashMap<&LocationId, &LocationId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(QueueEntry { node, cost }) = queue.pop() {
        let best = distances.get(node).copied().unwrap_or(f64::INFINITY);
        if cost.0 > best {
            continue;
        }

        if node == end {
            break;
        }

        for edge in graph.adjacent(node) {
            let candidate = cost.0 + edge.distance;
            let recorded = distances.entry(&edge.target).or_insert(f64::INFINITY);
            if candidate < *recorded {
                *recorded = candidate;
                previous.insert(&edge.target, node);
                queue.push(QueueEntry::new(&edge.target, candidate));
            }
        }
    }

    let distance = distances.get(end).copied().unwrap_or(f64::INFINITY);
    if distance.is_infinite() {
        debug!(start = %start, end = %end, "no path between locations");
        return Ok(None);
    }

    let path = reconstruct_path(&previous, start, end);
    debug!(
        start = %start,
        end = %end,
        distance,
        stops = path.len(),
        "shortest path found"
    );
    Ok(Some(ShortestPath { distance, path }))
}

fn reconstruct_path(
    previous: &HashMap<&LocationId, &LocationId>,
    start: &LocationId,
    end: &LocationId,
) -> Vec<LocationId> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match previous.get(current) {
            Some(&parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Priority-queue record: tentative distance to `node`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a LocationId,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a LocationId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn id(raw: &str) -> LocationId {
        LocationId::parse(raw).unwrap()
    }

    fn graph(vertices: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut builder = Graph::builder();
        for v in vertices {
            builder.add_vertex(id(v));
        }
        for (a, b, w) in edges {
            assert!(builder.add_edge(&id(a), &id(b), *w).unwrap());
        }
        builder.build()
    }

    #[test]
    fn queue_pops_smallest_cost_first() {
        let a = id("A");
        let b = id("B");
        let c = id("C");
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(&a, 5.0));
        queue.push(QueueEntry::new(&b, 1.0));
        queue.push(QueueEntry::new(&c, 3.0));

        let order: Vec<&str> = std::iter::from_fn(|| queue.pop())
            .map(|entry| entry.node.as_str())
            .collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn queue_ties_break_on_identifier() {
        let a = id("A");
        let b = id("B");
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(&b, 2.0));
        queue.push(QueueEntry::new(&a, 2.0));
        assert_eq!(queue.pop().unwrap().node.as_str(), "A");
    }

    #[test]
    fn prefers_longer_hop_count_when_cheaper() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "D", 10.0), ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)],
        );
        let found = find_shortest_path(&g, &id("A"), &id("D")).unwrap().unwrap();
        assert_eq!(found.distance, 3.0);
        assert_eq!(found.path, vec![id("A"), id("B"), id("C"), id("D")]);
        assert_eq!(found.hop_count(), 3);
    }

    #[test]
    fn same_start_and_end_is_trivial() {
        let g = graph(&["A", "B"], &[("A", "B", 4.0)]);
        let found = find_shortest_path(&g, &id("B"), &id("B")).unwrap().unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.path, vec![id("B")]);
    }

    #[test]
    fn isolated_target_has_no_path() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 4.0)]);
        assert!(find_shortest_path(&g, &id("A"), &id("C")).unwrap().is_none());
    }

    #[test]
    fn zero_weight_corridors_are_traversed() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 0.0), ("B", "C", 0.0)]);
        let found = find_shortest_path(&g, &id("A"), &id("C")).unwrap().unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.path.len(), 3);
    }

    #[test]
    fn unknown_endpoints_are_reported_together() {
        let g = graph(&["A"], &[]);
        match find_shortest_path(&g, &id("X"), &id("Y")) {
            Err(Error::UnknownLocation { ids, .. }) => {
                assert_eq!(ids, vec!["X".to_string(), "Y".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_self_query_names_id_once() {
        let g = graph(&["A"], &[]);
        match find_shortest_path(&g, &id("Q"), &id("Q")) {
            Err(Error::UnknownLocation { ids, .. }) => assert_eq!(ids, vec!["Q".to_string()]),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
