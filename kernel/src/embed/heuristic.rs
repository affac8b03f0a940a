//! Euclidean distance estimate over the pseudo-coordinate embedding.
//!
//! The estimate is best-effort: pseudo-coordinates are a topology proxy, so
//! the straight-line distance between two of them can exceed the true hop
//! distance. It is NOT admissible in general, and search guided by it is
//! best-first without an optimality guarantee. Use
//! [`crate::embed::landmark::LandmarkTable`] when optimal routes matter.

use crate::embed::coords::CoordinateMap;
use crate::embed::error::LookupError;
use crate::graph::NodeId;

/// Read-only Euclidean heuristic over a borrowed [`CoordinateMap`].
#[derive(Debug, Clone, Copy)]
pub struct EuclideanHeuristic<'a, N: NodeId> {
    coords: &'a CoordinateMap<N>,
}

impl<'a, N: NodeId> EuclideanHeuristic<'a, N> {
    #[must_use]
    pub fn new(coords: &'a CoordinateMap<N>) -> Self {
        Self { coords }
    }

    /// The table this heuristic reads from.
    #[must_use]
    pub fn coordinates(&self) -> &'a CoordinateMap<N> {
        self.coords
    }

    /// Straight-line distance between the two nodes' pseudo-coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingCoordinate`] naming the first node that
    /// has no coordinate.
    pub fn estimate(&self, node: &N, goal: &N) -> Result<f64, LookupError> {
        let from = self.coords.require(node)?;
        let to = self.coords.require(goal)?;
        Ok(from.euclidean(to))
    }
}
