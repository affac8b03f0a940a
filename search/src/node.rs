//! Frontier entry and ordering key.

use std::cmp::Ordering;

use waypoint_kernel::graph::NodeId;

/// A partial search state waiting in the frontier.
///
/// Ordering for frontier extraction uses [`FrontierKey`]: `(f_cost, g_cost,
/// sequence)` where `f_cost = g_cost + h`. Node and predecessor identifiers
/// never take part in ordering.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N: NodeId> {
    pub key: FrontierKey,
    /// Node this entry was pushed from (`None` for the start entry).
    pub predecessor: Option<N>,
    pub node: N,
}

/// The frontier ordering key: `(f_cost, g_cost, sequence)`.
///
/// Lower `f_cost` first, then lower `g_cost`, then older `sequence`. Costs
/// are compared with IEEE-754 total ordering so the key is a total order even
/// if a capability produced an infinity.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    /// Priority: accumulated cost plus heuristic estimate.
    pub f_cost: f64,
    /// Accumulated cost from the start.
    pub g_cost: f64,
    /// Monotonic push counter for deterministic tie-breaking.
    pub sequence: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.g_cost.total_cmp(&other.g_cost))
            .then(self.sequence.cmp(&other.sequence))
    }
}
