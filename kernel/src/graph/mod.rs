//! Graph module: node identifiers, adjacency storage, and the JSON loading boundary.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod adjacency;
pub mod load;

use std::fmt;
use std::hash::Hash;

/// Bound satisfied by every node identifier.
///
/// Identifiers need equality and hashing for membership checks, and
/// `Display` so errors and digests can name them. No ordering is required:
/// frontier ties are broken by insertion sequence, never by identifier.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Typed failure while building a graph from an external payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The payload bytes are not valid JSON.
    #[error("adjacency payload is not valid JSON: {detail}")]
    InvalidJson { detail: String },
    /// The top-level JSON value is not an object.
    #[error("adjacency payload must be a JSON object, found {found}")]
    NotAnObject { found: String },
    /// A node's neighbor list is not a JSON array.
    #[error("neighbors of node {node} must be an array, found {found}")]
    NeighborsNotArray { node: String, found: String },
    /// A neighbor entry is neither a string nor an integer.
    #[error("neighbor of node {node} must be a string or integer, found {found}")]
    InvalidIdentifier { node: String, found: String },
}
