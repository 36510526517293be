use std::fs;

use tempfile::tempdir;
use wayfinder_lib::{EdgeSpec, Error, LocationSpec, Topology};

fn location(id: &str) -> LocationSpec {
    LocationSpec {
        id: id.to_string(),
        name: None,
        icon: None,
        full_name: None,
    }
}

fn edge(from: &str, to: &str, distance: f64) -> EdgeSpec {
    EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        distance,
    }
}

#[test]
fn corridor_to_undeclared_location_aborts_build() {
    let topology = Topology {
        locations: vec![location("A")],
        edges: vec![edge("A", "B", 5.0)],
    };
    match topology.build() {
        Err(Error::UnregisteredEndpoint { missing, .. }) => assert_eq!(missing, "B"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn negative_distance_aborts_build() {
    let topology = Topology {
        locations: vec![location("A"), location("B")],
        edges: vec![edge("A", "B", -3.0)],
    };
    assert!(matches!(
        topology.build(),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn self_loop_aborts_build() {
    let topology = Topology {
        locations: vec![location("A")],
        edges: vec![edge("a", "A", 1.0)],
    };
    assert!(matches!(topology.build(), Err(Error::SelfLoop { .. })));
}

#[test]
fn empty_topology_is_rejected() {
    let topology = Topology {
        locations: Vec::new(),
        edges: Vec::new(),
    };
    assert!(matches!(topology.build(), Err(Error::EmptyTopology)));
}

#[test]
fn malformed_location_id_is_rejected() {
    let topology = Topology {
        locations: vec![location("main entrance")],
        edges: Vec::new(),
    };
    assert!(matches!(
        topology.build(),
        Err(Error::MalformedLocation { .. })
    ));
}

#[test]
fn duplicate_declarations_are_merged() {
    let topology = Topology {
        locations: vec![location("A"), location("a"), location("B")],
        edges: vec![edge("A", "B", 1.0)],
    };
    let (graph, _) = topology.build().unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn loads_topology_from_json_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("clinic.json");
    fs::write(
        &path,
        r#"{
            "locations": [
                {"id": "LOB", "name": "Lobby", "icon": "🚪", "fullName": "Main Lobby"},
                {"id": "XR", "name": "X-Ray"}
            ],
            "edges": [{"from": "lob", "to": "xr", "distance": 42}]
        }"#,
    )
    .expect("write topology");

    let topology = Topology::from_path(&path).unwrap();
    let (graph, registry) = topology.build().unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(registry.get("LOB").unwrap().full_name, "Main Lobby");
    assert_eq!(registry.get("XR").unwrap().full_name, "X-Ray");
}

#[test]
fn unparsable_file_reports_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write topology");

    match Topology::from_path(&path) {
        Err(Error::TopologyParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unparsable_text_has_no_path() {
    let error = Topology::from_json_str("{ not json").unwrap_err();
    assert!(matches!(error, Error::TopologyJson { .. }));
    assert!(error.to_string().starts_with("failed to parse topology: "));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let result = Topology::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn hospital_topology_round_trips_through_json() {
    let json = serde_json::to_string(&Topology::hospital()).unwrap();
    assert!(json.contains("\"fullName\":\"Main Entrance & Reception\""));
    assert_eq!(Topology::from_json_str(&json).unwrap(), Topology::hospital());
}

#[test]
fn overflowing_corridor_lengths_are_rejected() {
    let topology = Topology::from_json_str(
        r#"{
            "locations": [{"id": "A"}, {"id": "B"}, {"id": "C"}],
            "edges": [
                {"from": "A", "to": "B", "distance": 1e308},
                {"from": "B", "to": "C", "distance": 1e308}
            ]
        }"#,
    )
    .unwrap();
    assert!(matches!(
        topology.build(),
        Err(Error::DistanceOverflow { .. })
    ));
}
