//! Remaining-distance capability and its implementations over kernel tables.

use waypoint_kernel::embed::error::LookupError;
use waypoint_kernel::embed::heuristic::EuclideanHeuristic;
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::NodeId;

/// Trait for remaining-distance estimates.
///
/// Implementations must be pure and deterministic. Admissibility is NOT
/// required; an inadmissible heuristic still terminates, it only loses the
/// optimal-route guarantee.
pub trait Heuristic<N: NodeId> {
    /// Estimate the remaining cost from `node` to `goal`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if either node is missing from the
    /// implementation's table. Missing data is never defaulted.
    fn estimate(&self, node: &N, goal: &N) -> Result<f64, LookupError>;
}

/// Estimates 0 everywhere, which turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N: NodeId> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> Result<f64, LookupError> {
        Ok(0.0)
    }
}

impl<N: NodeId> Heuristic<N> for EuclideanHeuristic<'_, N> {
    fn estimate(&self, node: &N, goal: &N) -> Result<f64, LookupError> {
        EuclideanHeuristic::estimate(self, node, goal)
    }
}

impl<N: NodeId> Heuristic<N> for LandmarkTable<N> {
    fn estimate(&self, node: &N, goal: &N) -> Result<f64, LookupError> {
        Ok(self.lower_bound(node, goal))
    }
}

/// Adapter turning a closure into a [`Heuristic`].
#[derive(Debug, Clone, Copy)]
pub struct FnHeuristic<F>(pub F);

impl<N, F> Heuristic<N> for FnHeuristic<F>
where
    N: NodeId,
    F: Fn(&N, &N) -> Result<f64, LookupError>,
{
    fn estimate(&self, node: &N, goal: &N) -> Result<f64, LookupError> {
        (self.0)(node, goal)
    }
}
