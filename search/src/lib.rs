//! Waypoint Search: deterministic A* over an adjacency graph.
//!
//! This crate provides the search layer. It depends only on
//! `waypoint_kernel`; it does NOT depend on `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (graph, embed)      (frontier, A*)       (runner, report)
//! ```
//!
//! # Key types
//!
//! - [`FrontierEntry`](node::FrontierEntry): `(f, g, predecessor, node)` plus insertion sequence
//! - [`LazyFrontier`](frontier::LazyFrontier): min-priority queue with lazy deletion
//! - [`CostFn`](cost::CostFn) / [`Heuristic`](heuristic::Heuristic): injected capabilities
//! - [`SearchPolicy`](policy::SearchPolicy): step budget
//! - [`SearchResult`](search::SearchResult): finalize order, route, termination reason

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
