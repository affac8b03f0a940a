//! Search outcome types: termination reasons and counters.

/// Why the search terminated.
///
/// Only [`TerminationReason::GoalReached`] carries a route; every other
/// reason is the absence marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The goal was finalized.
    GoalReached,
    /// The frontier emptied before the goal was finalized.
    FrontierExhausted,
    /// The graph has no nodes; nothing was searched.
    EmptyGraph,
    /// The finalization budget ran out.
    FinalizeBudgetExceeded { limit: u64 },
    /// The cancellation token was tripped.
    Cancelled,
}

impl TerminationReason {
    /// Stable identifier used in digests and reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::EmptyGraph => "empty_graph",
            Self::FinalizeBudgetExceeded { .. } => "finalize_budget_exceeded",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinalizeBudgetExceeded { limit } => {
                write!(f, "{} (limit {limit})", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes whose neighbors were pushed.
    pub expansions: u64,
    /// Frontier entries pushed, the start entry included.
    pub pushes: u64,
    /// Popped entries discarded because their node was already finalized.
    pub stale_discards: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}
