//! Search entry point and A* loop.

use std::collections::HashMap;

use tracing::{debug, trace};

use waypoint_kernel::graph::adjacency::AdjacencyGraph;
use waypoint_kernel::graph::NodeId;
use waypoint_kernel::proof::canon::CanonicalFrame;
use waypoint_kernel::proof::hash::{ContentHash, DOMAIN_SEARCH_OUTCOME};

use crate::cancel::CancellationToken;
use crate::cost::{CostFn, UnitCost};
use crate::error::SearchError;
use crate::frontier::LazyFrontier;
use crate::heuristic::Heuristic;
use crate::outcome::{SearchStats, TerminationReason};
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// `finalized` is always populated with the nodes accepted in order, even
/// when no route was found. Check [`SearchResult::is_goal_reached`] or
/// inspect `termination` to determine the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<N: NodeId> {
    pub termination: TerminationReason,
    /// Nodes in the order they were finalized.
    pub finalized: Vec<N>,
    /// Start-to-goal route rebuilt from predecessors (goal reached only).
    pub path: Option<Vec<N>>,
    pub stats: SearchStats,
}

impl<N: NodeId> SearchResult<N> {
    /// Returns `true` if the search terminated because the goal was finalized.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Split into a [`Route`], or `None` for every absence outcome.
    #[must_use]
    pub fn into_route(self) -> Option<Route<N>> {
        let path = self.path?;
        Some(Route {
            path,
            finalized: self.finalized,
        })
    }

    /// Digest over termination reason, finalize order and route.
    ///
    /// Two runs with identical inputs produce identical digests.
    #[must_use]
    pub fn outcome_digest(&self) -> ContentHash {
        let mut frame = CanonicalFrame::new();
        frame
            .text(self.termination.as_str())
            .sequence(&self.finalized)
            .optional_sequence(self.path.as_ref());
        frame.digest(DOMAIN_SEARCH_OUTCOME)
    }
}

/// A successful search: the edge-connected route and the exploration order
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N: NodeId> {
    /// Start-to-goal node sequence; consecutive nodes are joined by an edge.
    pub path: Vec<N>,
    /// Every node finalized, in order; ends with the goal.
    pub finalized: Vec<N>,
}

/// Run A* from `start` to `goal`.
///
/// Each call owns its frontier, finalize list and predecessor map; nothing is
/// shared between calls. Entries are pushed for every neighbor without a
/// finalized check; stale entries are discarded when popped.
///
/// An empty graph returns [`TerminationReason::EmptyGraph`] without
/// consulting any capability.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::UnknownNode`] if `start` or `goal` is not in a non-empty graph.
/// - [`SearchError::Lookup`] if a capability cannot look a node up; the
///   search is aborted immediately.
/// - [`SearchError::InvalidCost`] / [`SearchError::InvalidEstimate`] if a
///   capability returns a value the frontier cannot order meaningfully.
pub fn astar<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    cost: &dyn CostFn<N>,
    heuristic: &dyn Heuristic<N>,
    start: &N,
    goal: &N,
    policy: &SearchPolicy,
    cancel: Option<&CancellationToken>,
) -> Result<SearchResult<N>, SearchError> {
    policy.validate()?;

    let mut stats = SearchStats::default();
    if graph.is_empty() {
        debug!("empty graph; returning absence without searching");
        return Ok(SearchResult {
            termination: TerminationReason::EmptyGraph,
            finalized: Vec::new(),
            path: None,
            stats,
        });
    }
    for endpoint in [start, goal] {
        if !graph.contains(endpoint) {
            return Err(SearchError::UnknownNode {
                node: endpoint.to_string(),
            });
        }
    }

    let mut frontier = LazyFrontier::new();
    let mut finalized: Vec<N> = Vec::new();
    // Doubles as the finalized-membership record.
    let mut predecessors: HashMap<N, Option<N>> = HashMap::new();

    let h_start = checked_estimate(heuristic, start, goal)?;
    frontier.push(h_start, 0.0, None, start.clone());

    let termination = loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            break TerminationReason::Cancelled;
        }

        let Some(entry) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        if predecessors.contains_key(&entry.node) {
            stats.stale_discards += 1;
            continue;
        }

        if let Some(limit) = policy.max_finalized {
            if finalized.len() as u64 >= limit {
                break TerminationReason::FinalizeBudgetExceeded { limit };
            }
        }

        trace!(
            node = %entry.node,
            f = entry.key.f_cost,
            g = entry.key.g_cost,
            sequence = entry.key.sequence,
            "finalize"
        );
        predecessors.insert(entry.node.clone(), entry.predecessor);
        finalized.push(entry.node.clone());

        if entry.node == *goal {
            break TerminationReason::GoalReached;
        }

        stats.expansions += 1;
        for neighbor in graph.neighbors(&entry.node).unwrap_or_default() {
            let step = checked_cost(cost, &entry.node, neighbor)?;
            let g_cost = entry.key.g_cost + step;
            let f_cost = g_cost + checked_estimate(heuristic, neighbor, goal)?;
            frontier.push(f_cost, g_cost, Some(entry.node.clone()), neighbor.clone());
        }
    };

    stats.pushes = frontier.pushes();
    stats.frontier_high_water = frontier.high_water();

    let path = (termination == TerminationReason::GoalReached)
        .then(|| reconstruct_path(&predecessors, goal));

    debug!(
        start = %start,
        goal = %goal,
        termination = %termination,
        finalized = finalized.len(),
        expansions = stats.expansions,
        pushes = stats.pushes,
        stale_discards = stats.stale_discards,
        "search finished"
    );

    Ok(SearchResult {
        termination,
        finalized,
        path,
        stats,
    })
}

/// Unit-cost, unbounded search returning the route or the absence marker.
///
/// # Errors
///
/// Same as [`astar`].
pub fn find_route<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    heuristic: &dyn Heuristic<N>,
    start: &N,
    goal: &N,
) -> Result<Option<Route<N>>, SearchError> {
    let result = astar(
        graph,
        &UnitCost,
        heuristic,
        start,
        goal,
        &SearchPolicy::default(),
        None,
    )?;
    Ok(result.into_route())
}

/// Walk predecessor pointers back from `goal` and return the route start-first.
///
/// Every predecessor was finalized strictly before its successor, so the
/// walk always ends at the start node.
#[must_use]
pub fn reconstruct_path<N: NodeId>(predecessors: &HashMap<N, Option<N>>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(Some(prev)) = predecessors.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}

fn checked_cost<N: NodeId>(cost: &dyn CostFn<N>, from: &N, to: &N) -> Result<f64, SearchError> {
    let value = cost.cost(from, to)?;
    if !value.is_finite() || value < 0.0 {
        return Err(SearchError::InvalidCost {
            from: from.to_string(),
            to: to.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn checked_estimate<N: NodeId>(
    heuristic: &dyn Heuristic<N>,
    node: &N,
    goal: &N,
) -> Result<f64, SearchError> {
    let value = heuristic.estimate(node, goal)?;
    // +inf is allowed: such entries sort after every finite one.
    if value.is_nan() || value < 0.0 {
        return Err(SearchError::InvalidEstimate {
            node: node.to_string(),
            goal: goal.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}
