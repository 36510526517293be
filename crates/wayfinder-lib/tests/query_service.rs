use wayfinder_lib::{Error, LocationSpec, QueryService, Topology, DEFAULT_ICON};

fn service() -> QueryService {
    QueryService::default_facility().expect("hospital topology builds")
}

#[test]
fn find_path_shapes_names_and_time() {
    let result = service().find_path("PKG", "LAB").unwrap();

    assert!(result.valid);
    assert_eq!(result.distance, 290.0);
    assert_eq!(result.path, vec!["PKG", "ME", "OPC", "LAB"]);
    assert_eq!(
        result.path_names,
        vec![
            "Parking Garage",
            "Main Entrance",
            "Outpatient Clinic",
            "Laboratory"
        ]
    );
    assert_eq!(result.estimated_time_minutes, 4);
}

#[test]
fn half_minute_walk_rounds_to_even() {
    let result = service().find_path("PHR", "IWA").unwrap();
    assert_eq!(result.distance, 200.0);
    assert_eq!(result.path, vec!["PHR", "LAB", "RAD", "IWA"]);
    assert_eq!(result.estimated_time_minutes, 2);
}

#[test]
fn identifiers_are_case_insensitive_and_trimmed() {
    let result = service().find_path("  er ", "caf").unwrap();
    assert_eq!(result.distance, 310.0);
    assert_eq!(result.path, vec!["ER", "RAD", "IWA", "CAF"]);
}

#[test]
fn same_location_is_zero_distance_single_stop() {
    let result = service().find_path("me", "ME").unwrap();
    assert!(result.valid);
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.path, vec!["ME"]);
    assert_eq!(result.path_names, vec!["Main Entrance"]);
    assert_eq!(result.estimated_time_minutes, 0);
}

#[test]
fn unknown_endpoints_are_all_reported() {
    let error = service().find_path("ZZZ", "QQQ").unwrap_err();
    match error {
        Error::UnknownLocation { ids, valid, .. } => {
            assert_eq!(ids, vec!["ZZZ".to_string(), "QQQ".to_string()]);
            assert_eq!(valid.first().map(String::as_str), Some("PKG"));
            assert_eq!(valid.len(), 11);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_destination_suggests_close_identifier() {
    let error = service().find_path("PKG", "LBA").unwrap_err();
    assert!(error.is_caller_error());
    let message = error.to_string();
    assert!(message.contains("unknown location: LBA"), "{message}");
    assert!(message.contains("'LAB'"), "{message}");
}

#[test]
fn malformed_identifier_is_rejected() {
    let error = service().find_path("   ", "ME").unwrap_err();
    assert!(matches!(error, Error::MalformedLocation { .. }));
}

#[test]
fn disconnected_locations_report_unreachable() {
    let topology = Topology::from_json_str(
        r#"{
            "locations": [
                {"id": "A", "name": "Annex"},
                {"id": "B"},
                {"id": "C", "name": "Clinic"}
            ],
            "edges": [{"from": "A", "to": "B", "distance": 12.5}]
        }"#,
    )
    .unwrap();
    let service = QueryService::from_topology(&topology).unwrap();

    let result = service.find_path("A", "C").unwrap();
    assert!(!result.valid);
    assert_eq!(result.distance, 0.0);
    assert!(result.path.is_empty());
    assert!(result.path_names.is_empty());
    assert_eq!(result.estimated_time_minutes, 0);

    let connected = service.find_path("a", "b").unwrap();
    assert_eq!(connected.path_names, vec!["Annex", "B"]);
    assert_eq!(connected.estimated_time_minutes, 1);
}

#[test]
fn list_locations_is_sorted_by_display_name() {
    let locations = service().list_locations();
    assert_eq!(locations.len(), 11);

    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(locations[0].id, "CAF");
    assert_eq!(locations[0].icon, "🍽️");
}

#[test]
fn connections_list_direct_neighbours() {
    let connections = service().connections("me").unwrap();
    assert_eq!(connections.location, "ME");
    assert_eq!(connections.location_name, "Main Entrance");
    assert_eq!(connections.total_connections, 4);

    let neighbours: Vec<(&str, f64)> = connections
        .connections
        .iter()
        .map(|c| (c.id.as_str(), c.distance))
        .collect();
    assert_eq!(
        neighbours,
        vec![("PKG", 100.0), ("OPC", 120.0), ("CAF", 50.0), ("IWA", 150.0)]
    );
}

#[test]
fn connections_for_unknown_location_is_not_found() {
    let error = service().connections("XYZ").unwrap_err();
    assert!(matches!(error, Error::UnknownLocation { .. }));
}

#[test]
fn connections_for_malformed_identifier_is_not_found() {
    match service().connections(" a b ").unwrap_err() {
        Error::UnknownLocation { ids, valid, .. } => {
            assert_eq!(ids, vec!["a b".to_string()]);
            assert_eq!(valid.len(), 11);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn graph_info_counts_undirected_corridors_once() {
    let info = service().graph_info();
    assert_eq!(info.total_locations, 11);
    assert_eq!(info.total_connections, 16);
    assert_eq!(info.locations[0].id, "PKG");
}

#[test]
fn locations_without_metadata_use_fallback() {
    let topology = Topology {
        locations: vec![LocationSpec {
            id: "gym".to_string(),
            name: None,
            icon: None,
            full_name: None,
        }],
        edges: Vec::new(),
    };
    let service = QueryService::from_topology(&topology).unwrap();
    let locations = service.list_locations();
    assert_eq!(locations[0].id, "GYM");
    assert_eq!(locations[0].name, "GYM");
    assert_eq!(locations[0].full_name, "GYM");
    assert_eq!(locations[0].icon, DEFAULT_ICON);
}
