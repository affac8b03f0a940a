//! Fixture graphs for the harness runner.
//!
//! Worlds provide graph data only. Embedding, heuristic choice and query
//! sampling belong to the runner.

pub mod grid;
pub mod scenarios;

use waypoint_kernel::graph::adjacency::AdjacencyGraph;

/// A named fixture graph.
pub trait GraphWorld {
    /// Unique world identifier (e.g., `"diamond"`).
    fn world_id(&self) -> &str;

    /// Build the world's graph. Must return the same graph on every call.
    fn graph(&self) -> AdjacencyGraph<u32>;
}
