//! Harness runner: times search queries and packages their outcomes.
//!
//! The runner uses ONLY the public search and embedding APIs. It never
//! inspects frontier state.
//!
//! # Pipeline
//!
//! ```text
//! HarnessConfig::resolve() → world.graph() → sample_pairs()
//!   → build heuristic → [run_query() × N] → Comparison::from_records()
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use waypoint_kernel::embed::coords::assign_coordinates;
use waypoint_kernel::embed::heuristic::EuclideanHeuristic;
use waypoint_kernel::embed::landmark::LandmarkTable;
use waypoint_kernel::graph::adjacency::AdjacencyGraph;
use waypoint_kernel::graph::NodeId;
use waypoint_search::cost::{CostFn, UnitCost};
use waypoint_search::error::SearchError;
use waypoint_search::heuristic::{Heuristic, ZeroHeuristic};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::{astar, SearchResult};

use crate::config::{ConfigError, HarnessConfig, HeuristicKind};
use crate::report::Comparison;
use crate::worlds::GraphWorld;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("query {start} => {goal} failed: {source}")]
    Search {
        start: String,
        goal: String,
        #[source]
        source: SearchError,
    },
}

/// One timed query and everything the report needs about it.
#[derive(Debug, Clone)]
pub struct QueryRecord<N: NodeId> {
    /// Name of the configuration that produced this record.
    pub label: String,
    pub start: N,
    pub goal: N,
    pub outcome: SearchResult<N>,
    /// Finalize-sequence length when a route was found, else 0.
    pub visited: usize,
    pub total_nodes: usize,
    /// `visited / total_nodes`, or 0 for an empty graph.
    pub coverage: f64,
    pub elapsed: Duration,
}

impl<N: NodeId> QueryRecord<N> {
    /// The route, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&[N]> {
        self.outcome.path.as_deref()
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.outcome.path.is_some()
    }

    /// `a => b => c`, or `Not found`.
    #[must_use]
    pub fn path_display(&self) -> String {
        match self.path() {
            Some(path) => path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" => "),
            None => "Not found".to_string(),
        }
    }

    /// `visited / total nodes (pct%)`.
    #[must_use]
    pub fn visited_display(&self) -> String {
        format!(
            "{} / {} nodes ({:.1}%)",
            self.visited,
            self.total_nodes,
            self.coverage * 100.0
        )
    }
}

impl<N: NodeId> fmt::Display for QueryRecord<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} => {}:", self.label, self.start, self.goal)?;
        writeln!(f, "Path: {}", self.path_display())?;
        writeln!(f, "Visited: {}", self.visited_display())?;
        writeln!(f, "Elapsed time: {:?}", self.elapsed)
    }
}

/// Time a single search and build its [`QueryRecord`].
///
/// # Errors
///
/// Returns [`RunError::Search`] if the search itself fails (unknown node,
/// missing coordinate, invalid capability value).
pub fn run_query<N: NodeId>(
    label: &str,
    graph: &AdjacencyGraph<N>,
    cost: &dyn CostFn<N>,
    heuristic: &dyn Heuristic<N>,
    start: &N,
    goal: &N,
    policy: &SearchPolicy,
) -> Result<QueryRecord<N>, RunError> {
    let began = Instant::now();
    let outcome = astar(graph, cost, heuristic, start, goal, policy, None).map_err(|source| {
        RunError::Search {
            start: start.to_string(),
            goal: goal.to_string(),
            source,
        }
    })?;
    let elapsed = began.elapsed();

    let total_nodes = graph.node_count();
    let visited = if outcome.path.is_some() {
        outcome.finalized.len()
    } else {
        0
    };
    #[allow(clippy::cast_precision_loss)]
    let coverage = if total_nodes == 0 {
        0.0
    } else {
        visited as f64 / total_nodes as f64
    };

    Ok(QueryRecord {
        label: label.to_string(),
        start: start.clone(),
        goal: goal.clone(),
        outcome,
        visited,
        total_nodes,
        coverage,
        elapsed,
    })
}

/// Run every pair in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`RunError`] raised by [`run_query`].
pub fn run_queries<N: NodeId>(
    label: &str,
    graph: &AdjacencyGraph<N>,
    cost: &dyn CostFn<N>,
    heuristic: &dyn Heuristic<N>,
    pairs: &[(N, N)],
    policy: &SearchPolicy,
) -> Result<Vec<QueryRecord<N>>, RunError> {
    pairs
        .iter()
        .map(|(start, goal)| run_query(label, graph, cost, heuristic, start, goal, policy))
        .collect()
}

/// Every ordered `(start, goal)` pair, `start == goal` included, in node
/// insertion order.
#[must_use]
pub fn all_pairs<N: NodeId>(graph: &AdjacencyGraph<N>) -> Vec<(N, N)> {
    let mut pairs = Vec::with_capacity(graph.node_count() * graph.node_count());
    for start in graph.nodes() {
        for goal in graph.nodes() {
            pairs.push((start.clone(), goal.clone()));
        }
    }
    pairs
}

/// `count` pairs drawn uniformly (with replacement) from the node set.
///
/// The same graph, count and seed always yield the same pairs. An empty
/// graph yields no pairs.
#[must_use]
pub fn sample_pairs<N: NodeId>(graph: &AdjacencyGraph<N>, count: usize, seed: u64) -> Vec<(N, N)> {
    let nodes: Vec<&N> = graph.nodes().collect();
    if nodes.is_empty() {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::new();
    for _ in 0..count {
        let start = nodes[rng.random_range(0..nodes.len())];
        let goal = nodes[rng.random_range(0..nodes.len())];
        pairs.push((start.clone(), goal.clone()));
    }
    pairs
}

/// Sample queries on a world's graph, run them with the configured
/// heuristic and unit cost, and aggregate the results.
///
/// The comparison is named `<world_id>/<heuristic>`.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the config does not resolve, or
/// [`RunError::Search`] for the first failing query. With the Euclidean
/// heuristic, any sampled node unreachable from the graph's first node fails
/// its query with a missing coordinate.
pub fn run_world(
    world: &dyn GraphWorld,
    config: &HarnessConfig,
) -> Result<Comparison<u32>, RunError> {
    let resolved = config.resolve()?;
    let graph = world.graph();
    let pairs = sample_pairs(&graph, resolved.sample_count, resolved.seed);
    let label = format!("{}/{}", world.world_id(), resolved.heuristic);

    let coords;
    let euclidean;
    let landmarks;
    let heuristic: &dyn Heuristic<u32> = match resolved.heuristic {
        HeuristicKind::Euclidean => {
            coords = assign_coordinates(&graph);
            euclidean = EuclideanHeuristic::new(&coords);
            &euclidean
        }
        HeuristicKind::Landmark => {
            landmarks = LandmarkTable::select(&graph, resolved.landmarks);
            &landmarks
        }
        HeuristicKind::Zero => &ZeroHeuristic,
    };

    let records = run_queries(&label, &graph, &UnitCost, heuristic, &pairs, &resolved.policy)?;
    debug!(
        world = world.world_id(),
        heuristic = %resolved.heuristic,
        queries = records.len(),
        "world run finished"
    );
    Ok(Comparison::from_records(&label, records))
}
