//! Insertion-ordered adjacency storage.
//!
//! The node set keeps the order in which identifiers were first seen. That
//! order is the graph's natural iteration order: the default embedding root
//! is the first node, and every traversal enumerates neighbors in the order
//! the adjacency lists declare them.

use std::collections::{HashMap, VecDeque};

use crate::graph::NodeId;

/// An unweighted adjacency mapping from node to an ordered neighbor list.
///
/// Direction is whatever the lists encode. A neighbor that is never declared
/// as a key is still a node of the graph, with no outgoing edges.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N: NodeId> {
    order: Vec<N>,
    index: HashMap<N, usize>,
    neighbors: Vec<Vec<N>>,
}

impl<N: NodeId> AdjacencyGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
            neighbors: Vec::new(),
        }
    }

    /// Build a graph from `(node, neighbors)` pairs.
    ///
    /// Keys are registered in iteration order, then their neighbors. A key
    /// that appears twice has its neighbor lists concatenated.
    #[must_use]
    pub fn from_adjacency<I, J>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            for neighbor in neighbors {
                graph.add_edge(node.clone(), neighbor);
            }
        }
        graph
    }

    /// Register a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node.clone(), self.order.len());
        self.order.push(node);
        self.neighbors.push(Vec::new());
        true
    }

    /// Append a directed edge `from -> to`, registering both endpoints.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        let slot = self.index[&from];
        self.neighbors[slot].push(to);
    }

    /// Append edges in both directions.
    pub fn add_undirected_edge(&mut self, a: N, b: N) {
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    /// Ordered neighbor list of `node`, or `None` if it is not in the graph.
    #[must_use]
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        self.index
            .get(node)
            .map(|&slot| self.neighbors[slot].as_slice())
    }

    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> std::slice::Iter<'_, N> {
        self.order.iter()
    }

    /// The first registered node (default embedding root).
    #[must_use]
    pub fn first_node(&self) -> Option<&N> {
        self.order.first()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of adjacency entries (parallel edges counted separately).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Unit-cost hop distances from `source` to every node it reaches.
    ///
    /// Returns an empty map if `source` is not in the graph.
    #[must_use]
    pub fn hop_distances_from(&self, source: &N) -> HashMap<N, u32> {
        let mut distances = HashMap::new();
        if !self.contains(source) {
            return distances;
        }
        distances.insert(source.clone(), 0);
        let mut queue = VecDeque::from([source.clone()]);
        while let Some(node) = queue.pop_front() {
            let next = distances[&node] + 1;
            for neighbor in self.neighbors(&node).unwrap_or_default() {
                if !distances.contains_key(neighbor) {
                    distances.insert(neighbor.clone(), next);
                    queue.push_back(neighbor.clone());
                }
            }
        }
        distances
    }
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
