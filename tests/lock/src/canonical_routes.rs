//! Single source of truth for the canonical route fixture.
//!
//! Used by both the `route_fixture` binary and the determinism integration
//! tests. Any change here changes both, so the cross-process output and the
//! in-process expectation cannot drift apart.
//!
//! Graph: a small DAG with a rejoining branch (`d` is reachable through both
//! `b` and `c`) and a node `g` that no other node reaches.

use waypoint_harness::config::{HarnessConfig, HeuristicKind};
use waypoint_harness::runner::run_world;
use waypoint_harness::worlds::grid::Grid;
use waypoint_kernel::embed::coords::{assign_coordinates, CoordinateMap};
use waypoint_kernel::embed::heuristic::EuclideanHeuristic;
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::adjacency::AdjacencyGraph;
use waypoint_kernel::graph::load::graph_from_json;
use waypoint_search::cost::UnitCost;
use waypoint_search::heuristic::{Heuristic, ZeroHeuristic};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::{astar, SearchResult};

/// Adjacency of the canonical graph, as a JSON object.
pub const CANONICAL_GRAPH_JSON: &str =
    r#"{"a": ["b", "c"], "b": ["d"], "c": ["d", "e"], "d": ["f"], "e": ["f"], "f": [], "g": ["a"]}"#;

/// Queries run against the canonical graph. None touches `g`, which has no
/// coordinate.
pub const CANONICAL_QUERIES: [(&str, &str); 4] = [("a", "f"), ("a", "a"), ("f", "a"), ("b", "e")];

/// Landmarks used for the landmark heuristic rows.
pub const CANONICAL_LANDMARKS: usize = 2;

/// Parse [`CANONICAL_GRAPH_JSON`].
///
/// # Panics
///
/// Panics if the constant stops parsing (a fixture bug, not a usage error).
#[must_use]
pub fn canonical_graph() -> AdjacencyGraph<String> {
    graph_from_json(CANONICAL_GRAPH_JSON.as_bytes()).expect("canonical graph parses")
}

/// Run one canonical query under the named heuristic.
///
/// # Panics
///
/// Panics if the search fails; every canonical query is known-good.
#[must_use]
pub fn canonical_search(
    graph: &AdjacencyGraph<String>,
    coords: &CoordinateMap<String>,
    kind: HeuristicKind,
    start: &str,
    goal: &str,
) -> SearchResult<String> {
    let euclidean = EuclideanHeuristic::new(coords);
    let landmarks;
    let heuristic: &dyn Heuristic<String> = match kind {
        HeuristicKind::Euclidean => &euclidean,
        HeuristicKind::Landmark => {
            landmarks = LandmarkTable::select(graph, CANONICAL_LANDMARKS);
            &landmarks
        }
        HeuristicKind::Zero => &ZeroHeuristic,
    };
    astar(
        graph,
        &UnitCost,
        heuristic,
        &start.to_string(),
        &goal.to_string(),
        &SearchPolicy::default(),
        None,
    )
    .expect("canonical query succeeds")
}

/// Every `key=value` line the fixture binary prints, in order.
///
/// # Panics
///
/// Panics if any canonical query or the grid run fails.
#[must_use]
pub fn fixture_lines() -> Vec<String> {
    let graph = canonical_graph();
    let coords = assign_coordinates(&graph);
    let widths: Vec<String> = coords.layer_widths().iter().map(ToString::to_string).collect();

    let mut lines = vec![
        format!("coordinate_digest={}", coords.digest()),
        format!("layer_widths={}", widths.join(",")),
    ];

    for kind in [HeuristicKind::Euclidean, HeuristicKind::Landmark, HeuristicKind::Zero] {
        for (start, goal) in CANONICAL_QUERIES {
            let result = canonical_search(&graph, &coords, kind, start, goal);
            let route = result
                .path
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.join(","));
            lines.push(format!(
                "query={start}->{goal} heuristic={kind} termination={} route={route} finalized={} digest={}",
                result.termination,
                result.finalized.len(),
                result.outcome_digest(),
            ));
        }
    }

    let config = HarnessConfig {
        sample_count: Some(25),
        seed: Some(11),
        heuristic: Some(HeuristicKind::Landmark),
        ..HarnessConfig::default()
    };
    let comparison = run_world(&Grid::new(6, 6), &config).expect("grid run succeeds");
    lines.push(format!("grid_comparison_digest={}", comparison.digest()));
    lines
}
