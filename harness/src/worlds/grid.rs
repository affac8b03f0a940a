//! Parameterised 4-connected grid, the macro benchmark and sampling fixture.

use waypoint_kernel::graph::adjacency::AdjacencyGraph;

use super::GraphWorld;

/// `width` x `height` grid with undirected edges between orthogonal
/// neighbours. Node ids are `row * width + col`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    id: String,
}

impl Grid {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            id: format!("grid_{width}x{height}"),
        }
    }

    /// Node id at `(row, col)`.
    #[must_use]
    pub fn node(&self, row: u32, col: u32) -> u32 {
        row * self.width + col
    }

    /// Hop distance between two cells; exact on this graph.
    #[must_use]
    pub fn manhattan(&self, a: u32, b: u32) -> u32 {
        let (ar, ac) = (a / self.width, a % self.width);
        let (br, bc) = (b / self.width, b % self.width);
        ar.abs_diff(br) + ac.abs_diff(bc)
    }
}

impl GraphWorld for Grid {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn graph(&self) -> AdjacencyGraph<u32> {
        let mut graph = AdjacencyGraph::new();
        for id in 0..self.width * self.height {
            graph.add_node(id);
        }
        for row in 0..self.height {
            for col in 0..self.width {
                let id = self.node(row, col);
                if col + 1 < self.width {
                    graph.add_undirected_edge(id, id + 1);
                }
                if row + 1 < self.height {
                    graph.add_undirected_edge(id, id + self.width);
                }
            }
        }
        graph
    }
}
