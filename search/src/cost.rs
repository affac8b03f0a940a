//! Step-cost capability.

use waypoint_kernel::embed::error::LookupError;
use waypoint_kernel::graph::NodeId;

/// Trait for edge step costs.
///
/// Implementations must be deterministic: the same `(from, to)` pair always
/// yields the same cost. Costs must be finite and non-negative; search
/// rejects anything else with [`crate::error::SearchError::InvalidCost`].
pub trait CostFn<N: NodeId> {
    /// Cost of stepping from `from` to its neighbor `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the cost depends on data the
    /// implementation does not have for one of the nodes.
    fn cost(&self, from: &N, to: &N) -> Result<f64, LookupError>;
}

/// Default cost: every edge costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl<N: NodeId> CostFn<N> for UnitCost {
    fn cost(&self, _from: &N, _to: &N) -> Result<f64, LookupError> {
        Ok(1.0)
    }
}

/// Adapter turning a closure into a [`CostFn`].
#[derive(Debug, Clone, Copy)]
pub struct FnCost<F>(pub F);

impl<N, F> CostFn<N> for FnCost<F>
where
    N: NodeId,
    F: Fn(&N, &N) -> Result<f64, LookupError>,
{
    fn cost(&self, from: &N, to: &N) -> Result<f64, LookupError> {
        (self.0)(from, to)
    }
}
