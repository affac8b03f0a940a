//! Route-quality locks on larger fixtures.
//!
//! With an admissible heuristic (zero or landmark) the route's node count
//! equals the BFS hop distance plus one. The pseudo-coordinate heuristic is
//! only checked for connectivity and endpoint correctness.

use waypoint_harness::runner::{all_pairs, sample_pairs};
use waypoint_harness::worlds::grid::Grid;
use waypoint_harness::worlds::GraphWorld;
use waypoint_kernel::embed::coords::assign_coordinates;
use waypoint_kernel::embed::heuristic::EuclideanHeuristic;
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::adjacency::AdjacencyGraph;
use waypoint_search::heuristic::{Heuristic, ZeroHeuristic};
use waypoint_search::search::find_route;

fn assert_connected(graph: &AdjacencyGraph<u32>, path: &[u32]) {
    for pair in path.windows(2) {
        let neighbors = graph.neighbors(&pair[0]).expect("route node is in graph");
        assert!(neighbors.contains(&pair[1]), "no edge {} -> {}", pair[0], pair[1]);
    }
}

fn assert_optimal(graph: &AdjacencyGraph<u32>, heuristic: &dyn Heuristic<u32>, pairs: &[(u32, u32)]) {
    for (start, goal) in pairs {
        let hops = graph.hop_distances_from(start);
        let route = find_route(graph, heuristic, start, goal).unwrap();
        match (hops.get(goal), route) {
            (Some(&d), Some(route)) => {
                assert_eq!(route.path.len() as u32, d + 1, "{start} -> {goal}");
                assert_connected(graph, &route.path);
            }
            (None, None) => {}
            (expected, got) => panic!("{start} -> {goal}: bfs {expected:?}, search {got:?}"),
        }
    }
}

/// Grid with a wall down column 3 except at the bottom row, forcing detours.
fn walled_grid() -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();
    let (w, h) = (7u32, 6u32);
    for id in 0..w * h {
        graph.add_node(id);
    }
    let open = |r: u32, c: u32| c != 3 || r == h - 1;
    for r in 0..h {
        for c in 0..w {
            if !open(r, c) {
                continue;
            }
            let id = r * w + c;
            if c + 1 < w && open(r, c + 1) {
                graph.add_undirected_edge(id, id + 1);
            }
            if r + 1 < h && open(r + 1, c) {
                graph.add_undirected_edge(id, id + w);
            }
        }
    }
    graph
}

#[test]
fn zero_heuristic_is_optimal_on_grid() {
    let graph = Grid::new(6, 5).graph();
    assert_optimal(&graph, &ZeroHeuristic, &all_pairs(&graph));
}

#[test]
fn landmark_heuristic_is_optimal_on_walled_grid() {
    let graph = walled_grid();
    let table = LandmarkTable::select(&graph, 4);
    assert_optimal(&graph, &table, &sample_pairs(&graph, 200, 5));
}

#[test]
fn landmark_heuristic_is_optimal_on_directed_ring() {
    let mut graph = AdjacencyGraph::new();
    for i in 0..12u32 {
        graph.add_edge(i, (i + 1) % 12);
    }
    graph.add_edge(0, 6);
    let table = LandmarkTable::select(&graph, 2);
    assert_optimal(&graph, &table, &all_pairs(&graph));
}

#[test]
fn euclidean_routes_are_connected_on_walled_grid() {
    let graph = walled_grid();
    let coords = assign_coordinates(&graph);
    let h = EuclideanHeuristic::new(&coords);
    for (start, goal) in sample_pairs(&graph, 200, 9) {
        // Wall cells are isolated and have no coordinate; skip them.
        if !coords.contains(&start) || !coords.contains(&goal) {
            continue;
        }
        let route = find_route(&graph, &h, &start, &goal)
            .unwrap()
            .expect("open cells are connected");
        assert_eq!(route.path.first(), Some(&start));
        assert_eq!(route.path.last(), Some(&goal));
        assert_eq!(route.finalized.last(), Some(&goal));
        assert_connected(&graph, &route.path);
    }
}
