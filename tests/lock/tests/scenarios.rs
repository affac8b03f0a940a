//! End-to-end scenario locks through the public kernel and search APIs.
//!
//! Each scenario starts from the JSON adjacency format, so identifiers are
//! strings here.

use waypoint_kernel::embed::coords::{assign_coordinates, PseudoCoordinate};
use waypoint_kernel::embed::error::LookupError;
use waypoint_kernel::embed::heuristic::EuclideanHeuristic;
use waypoint_kernel::graph::load::graph_from_json;
use waypoint_search::cost::UnitCost;
use waypoint_search::error::SearchError;
use waypoint_search::heuristic::ZeroHeuristic;
use waypoint_search::outcome::TerminationReason;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::{astar, find_route};

fn s(id: &str) -> String {
    id.to_string()
}

#[test]
fn diamond_reaches_goal_and_maps_every_node() {
    let graph = graph_from_json(br#"{"1": [2, 3], "2": [4], "3": [4], "4": [5]}"#).unwrap();
    let coords = assign_coordinates(&graph);

    assert_eq!(coords.get(&s("1")), Some(PseudoCoordinate::ORIGIN));
    let mut mapped: Vec<&String> = coords.iter().map(|(n, _)| n).collect();
    mapped.sort();
    assert_eq!(mapped, vec!["1", "2", "3", "4", "5"]);

    let h = EuclideanHeuristic::new(&coords);
    let route = find_route(&graph, &h, &s("1"), &s("5")).unwrap().unwrap();
    assert_eq!(route.finalized.last(), Some(&s("5")));
    assert_eq!(route.path.first(), Some(&s("1")));
    assert_eq!(route.path.len(), 4);
}

#[test]
fn isolated_node_has_no_coordinate() {
    let graph =
        graph_from_json(br#"{"1": [2, 3], "2": [4], "3": [4], "4": [5], "6": []}"#).unwrap();
    let coords = assign_coordinates(&graph);
    let h = EuclideanHeuristic::new(&coords);

    assert_eq!(
        h.estimate(&s("6"), &s("5")),
        Err(LookupError::MissingCoordinate { node: s("6") })
    );

    // Inside a search the same miss aborts the call.
    let err = astar(
        &graph,
        &UnitCost,
        &h,
        &s("1"),
        &s("6"),
        &SearchPolicy::default(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::Lookup(LookupError::MissingCoordinate { .. })));
}

#[test]
fn disconnected_goal_exhausts_the_frontier() {
    let graph = graph_from_json(br#"{"1": [2], "3": [4]}"#).unwrap();
    let result = astar(
        &graph,
        &UnitCost,
        &ZeroHeuristic,
        &s("1"),
        &s("3"),
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    assert_eq!(result.termination, TerminationReason::FrontierExhausted);
    assert!(result.path.is_none());
    assert!(find_route(&graph, &ZeroHeuristic, &s("1"), &s("3")).unwrap().is_none());
}

#[test]
fn start_equal_goal_on_a_cycle() {
    let graph = graph_from_json(br#"{"1": [2], "2": [1]}"#).unwrap();
    let coords = assign_coordinates(&graph);
    let h = EuclideanHeuristic::new(&coords);
    let result = astar(
        &graph,
        &UnitCost,
        &h,
        &s("1"),
        &s("1"),
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    assert_eq!(result.finalized, vec![s("1")]);
    assert_eq!(result.path, Some(vec![s("1")]));
    assert_eq!(result.stats.expansions, 0);
}

#[test]
fn empty_graph_is_absence_not_error() {
    let graph = graph_from_json(b"{}").unwrap();
    assert!(assign_coordinates(&graph).is_empty());
    let result = astar(
        &graph,
        &UnitCost,
        &ZeroHeuristic,
        &s("1"),
        &s("2"),
        &SearchPolicy::default(),
        None,
    )
    .unwrap();
    assert_eq!(result.termination, TerminationReason::EmptyGraph);
}
