//! File-based inputs: graph and harness config loaded from disk.

use std::io::Write;

use waypoint_harness::config::{ConfigError, HarnessConfig, HeuristicKind};
use waypoint_harness::report::Comparison;
use waypoint_harness::runner::{all_pairs, run_queries};
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::load::graph_from_json;
use waypoint_kernel::graph::GraphError;
use waypoint_search::cost::UnitCost;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn graph_and_config_from_files_drive_a_comparison() {
    let graph_file = write_temp(r#"{"x": ["y", "z"], "y": ["z"], "z": ["x"]}"#);
    let config_file = write_temp(r#"{"heuristic": "landmark", "landmarks": 1, "max_finalized": 10}"#);

    let bytes = std::fs::read(graph_file.path()).unwrap();
    let graph = graph_from_json(&bytes).unwrap();
    let resolved = HarnessConfig::from_file(config_file.path())
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(resolved.heuristic, HeuristicKind::Landmark);

    let table = LandmarkTable::select(&graph, resolved.landmarks);
    let pairs = all_pairs(&graph);
    let records = run_queries("file", &graph, &UnitCost, &table, &pairs, &resolved.policy).unwrap();
    let comparison = Comparison::from_records("file", records);

    // Strongly connected: every ordered pair has a route.
    assert_eq!(comparison.total_cases(), 9);
    assert_eq!(comparison.failed(), 0);

    let json = comparison.to_json();
    assert_eq!(json["total_cases"], serde_json::json!(9));
    assert_eq!(json["longest"]["path"].as_array().map(Vec::len), Some(3));
}

#[test]
fn malformed_graph_file_is_a_typed_error() {
    let graph_file = write_temp(r#"{"x": "y"}"#);
    let bytes = std::fs::read(graph_file.path()).unwrap();
    let err = graph_from_json(&bytes).unwrap_err();
    assert!(matches!(err, GraphError::NeighborsNotArray { .. }), "got {err:?}");
}

#[test]
fn malformed_config_file_is_a_typed_error() {
    let config_file = write_temp(r#"{"sample_count": "many"}"#);
    let err = HarnessConfig::from_file(config_file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "sample_count"));
}
