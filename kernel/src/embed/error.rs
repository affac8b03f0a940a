//! Typed embedding and lookup errors.
//!
//! `EmbedError` covers failures while *building* a table. `LookupError` covers
//! failures while *reading* one; it is the error type of every cost and
//! heuristic capability, so search can abort on it without knowing which
//! table produced it.

/// Failure while building a distance table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    /// The requested embedding root is not a node of the graph.
    #[error("embedding root {node} is not a node of the graph")]
    UnknownRoot { node: String },
    /// A requested landmark is not a node of the graph.
    #[error("landmark {node} is not a node of the graph")]
    UnknownLandmark { node: String },
}

/// Failure while reading a distance table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The node was never assigned a pseudo-coordinate (unreachable from the
    /// embedding root). Never defaulted to zero or infinity.
    #[error("no pseudo-coordinate assigned to node {node}; it is unreachable from the embedding root")]
    MissingCoordinate { node: String },
}
