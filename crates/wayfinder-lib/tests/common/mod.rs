#![allow(dead_code)]

use wayfinder_lib::{Graph, LocationId, Topology};

pub fn id(raw: &str) -> LocationId {
    LocationId::parse(raw).expect("valid identifier")
}

/// Graph built from the default hospital layout.
pub fn hospital_graph() -> Graph {
    Topology::hospital().build().expect("hospital topology builds").0
}

/// Build a graph from literal vertices and corridors.
pub fn graph_from(vertices: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut builder = Graph::builder();
    for v in vertices {
        builder.add_vertex(id(v));
    }
    for (a, b, w) in edges {
        assert!(
            builder.add_edge(&id(a), &id(b), *w).expect("valid corridor"),
            "corridor {a} <-> {b} references unknown vertex"
        );
    }
    builder.build()
}

/// Weight of the corridor between `a` and `b`, if one exists.
pub fn corridor_weight(graph: &Graph, a: &LocationId, b: &LocationId) -> Option<f64> {
    graph
        .neighbors(a.as_str())
        .ok()?
        .iter()
        .filter(|edge| &edge.target == b)
        .map(|edge| edge.distance)
        .min_by(|x, y| x.total_cmp(y))
}

/// Cheapest simple path cost by exhaustive depth-first enumeration.
pub fn brute_force_distance(graph: &Graph, start: &LocationId, end: &LocationId) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: &LocationId,
        end: &LocationId,
        visited: &mut Vec<LocationId>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == end {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for edge in graph.neighbors(current.as_str()).expect("registered vertex") {
            if visited.contains(&edge.target) {
                continue;
            }
            visited.push(edge.target.clone());
            walk(graph, &edge.target, end, visited, cost + edge.distance, best);
            visited.pop();
        }
    }

    let mut best = None;
    let mut visited = vec![start.clone()];
    walk(graph, start, end, &mut visited, 0.0, &mut best);
    best
}
