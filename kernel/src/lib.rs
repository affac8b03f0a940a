//! Waypoint Kernel: graph storage and the precomputed distance tables that
//! guide search.
//!
//! # API Surface
//!
//! - [`graph::adjacency::AdjacencyGraph`] -- insertion-ordered adjacency mapping
//! - [`graph::load::graph_from_json`] -- compile a JSON adjacency payload into a graph
//! - [`embed::coords::assign_coordinates`] -- breadth-first pseudo-coordinate embedding
//! - [`embed::heuristic::EuclideanHeuristic`] -- distance estimate over the embedding
//! - [`embed::landmark::LandmarkTable`] -- admissible landmark lower bounds
//! - [`proof::hash::canonical_hash`] -- domain-separated content hashing
//!
//! # Module Dependency Direction
//!
//! `graph` ← `embed`, and `proof` stands alone.
//!
//! One-way only. No cycles. `embed` depends on `graph`; `graph` depends on
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod embed;
pub mod graph;
pub mod proof;
