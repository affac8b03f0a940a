//! Typed search errors.
//!
//! `SearchError` represents failures that abort a search: pre-flight
//! validation and capability lookups. Reaching no route is NOT an error;
//! it is expressed via [`crate::outcome::TerminationReason`] on an `Ok` result.

use waypoint_kernel::embed::error::LookupError;

/// Typed failure for a search call. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy selects a configuration that cannot run.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Start or goal is not a node of a non-empty graph.
    #[error("node {node} is not in the graph")]
    UnknownNode { node: String },
    /// A cost or heuristic capability could not look a node up.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// A cost capability returned a negative or non-finite step cost.
    #[error("step cost {from} => {to} must be finite and non-negative, got {value}")]
    InvalidCost {
        from: String,
        to: String,
        value: String,
    },
    /// A heuristic capability returned a negative or NaN estimate.
    #[error("heuristic estimate {node} => {goal} must be non-negative, got {value}")]
    InvalidEstimate {
        node: String,
        goal: String,
        value: String,
    },
}
