//! Landmark lower bounds: an admissible alternative to the pseudo-embedding.
//!
//! For each landmark `L` the table stores true unit-cost hop distances
//! `d(L, ·)`. By the triangle inequality `d(L, goal) <= d(L, n) + d(n, goal)`,
//! so `d(L, goal) - d(L, n)` never overestimates `d(n, goal)`, even on
//! directed graphs. A landmark that cannot reach both endpoints contributes 0.

use std::collections::HashMap;

use tracing::debug;

use crate::embed::error::EmbedError;
use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::NodeId;

/// Immutable table of hop distances from a fixed set of landmarks.
#[derive(Debug, Clone)]
pub struct LandmarkTable<N: NodeId> {
    landmarks: Vec<N>,
    distances: Vec<HashMap<N, u32>>,
}

impl<N: NodeId> LandmarkTable<N> {
    /// Build the table for the given landmarks.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::UnknownLandmark`] if any landmark is not in the graph.
    pub fn build(graph: &AdjacencyGraph<N>, landmarks: &[N]) -> Result<Self, EmbedError> {
        if let Some(unknown) = landmarks.iter().find(|l| !graph.contains(l)) {
            return Err(EmbedError::UnknownLandmark {
                node: unknown.to_string(),
            });
        }
        let distances = landmarks
            .iter()
            .map(|l| graph.hop_distances_from(l))
            .collect();
        Ok(Self {
            landmarks: landmarks.to_vec(),
            distances,
        })
    }

    /// Pick up to `count` landmarks by farthest-point selection.
    ///
    /// The first landmark is the graph's first node. Each next landmark is the
    /// node whose hop distance to the nearest chosen landmark is largest
    /// (earliest in node order on ties), among nodes the chosen landmarks
    /// reach. Selection stops early once every reached node is a landmark.
    #[must_use]
    pub fn select(graph: &AdjacencyGraph<N>, count: usize) -> Self {
        let mut table = Self {
            landmarks: Vec::new(),
            distances: Vec::new(),
        };
        let Some(first) = graph.first_node() else {
            return table;
        };
        if count == 0 {
            return table;
        }

        let mut nearest: HashMap<N, u32> = HashMap::new();
        let mut next = Some(first.clone());
        while let Some(landmark) = next.take() {
            let reach = graph.hop_distances_from(&landmark);
            for (node, &d) in &reach {
                nearest
                    .entry(node.clone())
                    .and_modify(|cur| *cur = (*cur).min(d))
                    .or_insert(d);
            }
            table.landmarks.push(landmark);
            table.distances.push(reach);
            if table.landmarks.len() == count {
                break;
            }

            let mut best: Option<(&N, u32)> = None;
            for node in graph.nodes() {
                if let Some(&d) = nearest.get(node) {
                    if d > 0 && best.is_none_or(|(_, b)| d > b) {
                        best = Some((node, d));
                    }
                }
            }
            next = best.map(|(node, _)| node.clone());
        }

        debug!(
            landmarks = table.landmarks.len(),
            requested = count,
            "landmark selection complete"
        );
        table
    }

    #[must_use]
    pub fn landmarks(&self) -> &[N] {
        &self.landmarks
    }

    /// Hop distance from landmark number `i` to `node`, if reachable.
    #[must_use]
    pub fn distance(&self, i: usize, node: &N) -> Option<u32> {
        self.distances.get(i)?.get(node).copied()
    }

    /// Admissible lower bound on the hop distance `node => goal`.
    #[must_use]
    pub fn lower_bound(&self, node: &N, goal: &N) -> f64 {
        let mut bound = 0u32;
        for table in &self.distances {
            if let (Some(&dn), Some(&dg)) = (table.get(node), table.get(goal)) {
                bound = bound.max(dg.saturating_sub(dn));
            }
        }
        f64::from(bound)
    }
}
