//! Embed module: precomputed distance tables over a graph.
//!
//! Depends on `graph` (and `proof` for digests). Every table here is computed
//! once per graph and immutable afterwards; search consumes them through
//! read-only lookups.

pub mod coords;
pub mod error;
pub mod heuristic;
pub mod landmark;
