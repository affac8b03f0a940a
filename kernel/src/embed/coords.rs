//! Breadth-first pseudo-coordinate embedding.
//!
//! Every node reachable from a root is placed at `(layer, index)`: `layer` is
//! its breadth-first depth and `index` its position among the undiscovered
//! neighbors of the parent that first dequeued it.
//!
//! `index` is relative to the parent, not to the whole layer, so two nodes in
//! different branches can share a coordinate. The embedding is a topology
//! proxy, not a layout; callers must not assume coordinates are unique.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::embed::error::{EmbedError, LookupError};
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::NodeId;
use crate::proof::canon::CanonicalFrame;
use crate::proof::hash::{ContentHash, DOMAIN_COORDINATE_MAP};

/// A synthetic `(layer, index)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PseudoCoordinate {
    /// Breadth-first depth from the embedding root.
    pub layer: u32,
    /// Position within the parent's undiscovered-neighbor enumeration.
    pub index: u32,
}

impl PseudoCoordinate {
    /// The root's coordinate.
    pub const ORIGIN: Self = Self { layer: 0, index: 0 };

    /// Straight-line distance `sqrt(Δlayer² + Δindex²)`.
    #[must_use]
    pub fn euclidean(self, other: Self) -> f64 {
        let dl = f64::from(self.layer) - f64::from(other.layer);
        let di = f64::from(self.index) - f64::from(other.index);
        dl.hypot(di)
    }
}

/// Immutable node → coordinate lookup table.
#[derive(Debug, Clone)]
pub struct CoordinateMap<N: NodeId> {
    root: Option<N>,
    coords: HashMap<N, PseudoCoordinate>,
    /// Nodes in assignment (dequeue) order.
    order: Vec<N>,
}

impl<N: NodeId> CoordinateMap<N> {
    fn empty() -> Self {
        Self {
            root: None,
            coords: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The embedding root, `None` for an empty graph.
    #[must_use]
    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn get(&self, node: &N) -> Option<PseudoCoordinate> {
        self.coords.get(node).copied()
    }

    /// Look up a coordinate, failing explicitly if the node was never placed.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingCoordinate`] for nodes unreachable from
    /// the root (or not in the graph at all).
    pub fn require(&self, node: &N) -> Result<PseudoCoordinate, LookupError> {
        self.get(node).ok_or_else(|| LookupError::MissingCoordinate {
            node: node.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.coords.contains_key(node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(node, coordinate)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, PseudoCoordinate)> + '_ {
        self.order.iter().map(|n| (n, self.coords[n]))
    }

    /// Number of placed nodes per layer, indexed by layer.
    #[must_use]
    pub fn layer_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        for coord in self.coords.values() {
            let layer = coord.layer as usize;
            if widths.len() <= layer {
                widths.resize(layer + 1, 0);
            }
            widths[layer] += 1;
        }
        widths
    }

    /// Digest of the full table in assignment order.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut frame = CanonicalFrame::new();
        frame.u64(self.order.len() as u64);
        for (node, coord) in self.iter() {
            frame
                .text(&node.to_string())
                .u64(u64::from(coord.layer))
                .u64(u64::from(coord.index));
        }
        frame.digest(DOMAIN_COORDINATE_MAP)
    }
}

/// Embed the graph from its first node.
///
/// An empty graph yields an empty map.
#[must_use]
pub fn assign_coordinates<N: NodeId>(graph: &AdjacencyGraph<N>) -> CoordinateMap<N> {
    match graph.first_node() {
        Some(root) => embed_from(graph, root),
        None => CoordinateMap::empty(),
    }
}

/// Embed the graph from an explicit root.
///
/// # Errors
///
/// Returns [`EmbedError::UnknownRoot`] if `root` is not in the graph.
pub fn assign_coordinates_from<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    root: &N,
) -> Result<CoordinateMap<N>, EmbedError> {
    if !graph.contains(root) {
        return Err(EmbedError::UnknownRoot {
            node: root.to_string(),
        });
    }
    Ok(embed_from(graph, root))
}

fn embed_from<N: NodeId>(graph: &AdjacencyGraph<N>, root: &N) -> CoordinateMap<N> {
    let mut coords: HashMap<N, PseudoCoordinate> = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([(root.clone(), PseudoCoordinate::ORIGIN)]);

    while let Some((node, coord)) = queue.pop_front() {
        // Several parents may enqueue the same child; first dequeue wins.
        if coords.contains_key(&node) {
            continue;
        }
        coords.insert(node.clone(), coord);

        let mut seen = HashSet::new();
        let mut index = 0u32;
        for child in graph.neighbors(&node).unwrap_or_default() {
            if coords.contains_key(child) || !seen.insert(child) {
                continue;
            }
            queue.push_back((
                child.clone(),
                PseudoCoordinate {
                    layer: coord.layer + 1,
                    index,
                },
            ));
            index += 1;
        }
        order.push(node);
    }

    debug!(
        root = %root,
        placed = order.len(),
        graph_nodes = graph.node_count(),
        "pseudo-coordinate embedding complete"
    );

    CoordinateMap {
        root: Some(root.clone()),
        coords,
        order,
    }
}
