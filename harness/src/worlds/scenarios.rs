//! The small hand-written graphs the core's behaviour is pinned against.

use waypoint_kernel::graph::adjacency::AdjacencyGraph;

use super::GraphWorld;

/// `{1:[2,3], 2:[4], 3:[4], 4:[5]}`: two equal-length branches rejoining.
///
/// With `isolated` set, node 6 is added with no edges so lookups for it miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diamond {
    pub isolated: bool,
}

impl GraphWorld for Diamond {
    fn world_id(&self) -> &str {
        if self.isolated {
            "diamond_isolated"
        } else {
            "diamond"
        }
    }

    fn graph(&self) -> AdjacencyGraph<u32> {
        let mut graph = AdjacencyGraph::from_adjacency([
            (1, vec![2, 3]),
            (2, vec![4]),
            (3, vec![4]),
            (4, vec![5]),
        ]);
        if self.isolated {
            graph.add_node(6);
        }
        graph
    }
}

/// `{1:[2]}` and `{3:[4]}`: no route between the components.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoComponents;

impl GraphWorld for TwoComponents {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "two_components"
    }

    fn graph(&self) -> AdjacencyGraph<u32> {
        AdjacencyGraph::from_adjacency([(1, vec![2]), (3, vec![4])])
    }
}

/// `{1:[2], 2:[1]}`: the smallest cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoCycle;

impl GraphWorld for TwoCycle {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "two_cycle"
    }

    fn graph(&self) -> AdjacencyGraph<u32> {
        AdjacencyGraph::from_adjacency([(1, vec![2]), (2, vec![1])])
    }
}
