//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::runner::sample_pairs;
use waypoint_harness::worlds::grid::Grid;
use waypoint_harness::worlds::GraphWorld;
use waypoint_kernel::embed::coords::{assign_coordinates, CoordinateMap};
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::adjacency::AdjacencyGraph;

/// Landmarks built for every grid setup.
pub const BENCH_LANDMARKS: usize = 4;

/// Everything a timed search needs, built once outside the measured loop.
pub struct GridSetup {
    pub graph: AdjacencyGraph<u32>,
    pub coords: CoordinateMap<u32>,
    pub landmarks: LandmarkTable<u32>,
    /// Seeded query pairs over the grid.
    pub pairs: Vec<(u32, u32)>,
}

/// Build a `side` x `side` grid with its embedding, landmark table and
/// `queries` seeded pairs.
#[must_use]
pub fn prepare_grid(side: u32, queries: usize, seed: u64) -> GridSetup {
    let graph = Grid::new(side, side).graph();
    let coords = assign_coordinates(&graph);
    let landmarks = LandmarkTable::select(&graph, BENCH_LANDMARKS);
    let pairs = sample_pairs(&graph, queries, seed);
    GridSetup {
        graph,
        coords,
        landmarks,
        pairs,
    }
}

/// Opposite corners of a `side` x `side` grid: the longest query it has.
#[must_use]
pub fn corner_pair(side: u32) -> (u32, u32) {
    (0, side * side - 1)
}
