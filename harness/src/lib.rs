//! Waypoint Harness: timed query batches and comparison reports.
//!
//! The harness runs `(start, goal)` queries through the search crate's
//! public API, records route, visited count, coverage and elapsed time, and
//! aggregates the records into a [`Comparison`](report::Comparison).
//!
//! The harness does NOT implement search logic; it delegates to
//! `waypoint_search`. Worlds provide graphs only; the runner owns embedding,
//! heuristic choice and sampling.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod report;
pub mod runner;
pub mod worlds;
