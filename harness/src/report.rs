//! Aggregated comparison over a batch of [`QueryRecord`]s.

use std::fmt;
use std::time::Duration;

use serde_json::{json, Value};

use waypoint_kernel::graph::NodeId;
use waypoint_kernel::proof::canon::CanonicalFrame;
use waypoint_kernel::proof::hash::{ContentHash, DOMAIN_COMPARISON};

use crate::runner::QueryRecord;

/// Indices into the found records plus timing totals.
#[derive(Debug, Clone, Copy)]
struct Summary {
    shortest: usize,
    longest: usize,
    fastest: usize,
    slowest: usize,
    average_coverage: f64,
    total_elapsed: Duration,
    average_elapsed: Duration,
}

/// Statistics over a named batch of queries.
///
/// Only queries that found a route feed the statistics; the rest are counted
/// as failed. Ties keep the earliest record.
#[derive(Debug, Clone)]
pub struct Comparison<N: NodeId> {
    name: String,
    records: Vec<QueryRecord<N>>,
    found: Vec<usize>,
    summary: Option<Summary>,
}

impl<N: NodeId> Comparison<N> {
    #[must_use]
    pub fn from_records(name: &str, records: Vec<QueryRecord<N>>) -> Self {
        let found: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_found())
            .map(|(i, _)| i)
            .collect();
        let summary = summarize(&records, &found);
        Self {
            name: name.to_string(),
            records,
            found,
            summary,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn records(&self) -> &[QueryRecord<N>] {
        &self.records
    }

    /// Number of queries that found a route.
    #[must_use]
    pub fn total_cases(&self) -> usize {
        self.found.len()
    }

    /// Number of queries that did not find a route.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.records.len() - self.found.len()
    }

    /// Found query with the fewest route nodes.
    #[must_use]
    pub fn shortest(&self) -> Option<&QueryRecord<N>> {
        self.summary.map(|s| &self.records[s.shortest])
    }

    #[must_use]
    pub fn longest(&self) -> Option<&QueryRecord<N>> {
        self.summary.map(|s| &self.records[s.longest])
    }

    #[must_use]
    pub fn fastest(&self) -> Option<&QueryRecord<N>> {
        self.summary.map(|s| &self.records[s.fastest])
    }

    #[must_use]
    pub fn slowest(&self) -> Option<&QueryRecord<N>> {
        self.summary.map(|s| &self.records[s.slowest])
    }

    #[must_use]
    pub fn average_coverage(&self) -> Option<f64> {
        self.summary.map(|s| s.average_coverage)
    }

    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        self.summary.map_or(Duration::ZERO, |s| s.total_elapsed)
    }

    #[must_use]
    pub fn average_elapsed(&self) -> Duration {
        self.summary.map_or(Duration::ZERO, |s| s.average_elapsed)
    }

    /// Machine-readable summary. Keys keep insertion order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let entry = |record: Option<&QueryRecord<N>>| match record {
            Some(r) => json!({
                "start": r.start.to_string(),
                "goal": r.goal.to_string(),
                "path": r.path().map(|p| p.iter().map(ToString::to_string).collect::<Vec<_>>()),
                "visited": r.visited,
                "elapsed_secs": r.elapsed.as_secs_f64(),
            }),
            None => Value::Null,
        };
        json!({
            "name": self.name,
            "total_cases": self.total_cases(),
            "failed": self.failed(),
            "shortest": entry(self.shortest()),
            "longest": entry(self.longest()),
            "fastest": entry(self.fastest()),
            "slowest": entry(self.slowest()),
            "average_coverage": self.average_coverage(),
            "average_elapsed_secs": self.average_elapsed().as_secs_f64(),
            "total_elapsed_secs": self.total_elapsed().as_secs_f64(),
            "digest": self.digest().as_str(),
        })
    }

    /// Digest over the name and every record's endpoints and outcome.
    ///
    /// Timings are excluded, so reruns of the same batch agree.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut frame = CanonicalFrame::new();
        frame.text(&self.name).u64(self.records.len() as u64);
        for record in &self.records {
            frame
                .text(&record.label)
                .text(&record.start.to_string())
                .text(&record.goal.to_string())
                .text(record.outcome.outcome_digest().as_str());
        }
        frame.digest(DOMAIN_COMPARISON)
    }
}

fn summarize<N: NodeId>(records: &[QueryRecord<N>], found: &[usize]) -> Option<Summary> {
    let (&first, rest) = found.split_first()?;
    let route_len = |i: usize| records[i].path().map_or(0, <[N]>::len);

    let mut summary = Summary {
        shortest: first,
        longest: first,
        fastest: first,
        slowest: first,
        average_coverage: 0.0,
        total_elapsed: Duration::ZERO,
        average_elapsed: Duration::ZERO,
    };
    for &i in rest {
        if route_len(i) < route_len(summary.shortest) {
            summary.shortest = i;
        }
        if route_len(i) > route_len(summary.longest) {
            summary.longest = i;
        }
        if records[i].elapsed < records[summary.fastest].elapsed {
            summary.fastest = i;
        }
        if records[i].elapsed > records[summary.slowest].elapsed {
            summary.slowest = i;
        }
    }

    let coverage_sum: f64 = found.iter().map(|&i| records[i].coverage).sum();
    summary.total_elapsed = found.iter().map(|&i| records[i].elapsed).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = found.len() as f64;
    summary.average_coverage = coverage_sum / count;
    let divisor = u32::try_from(found.len()).unwrap_or(u32::MAX);
    summary.average_elapsed = summary.total_elapsed / divisor;
    Some(summary)
}

fn write_entry<N: NodeId>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    record: &QueryRecord<N>,
    with_path: bool,
) -> fmt::Result {
    writeln!(f, "{title}: {}: {} => {}", record.label, record.start, record.goal)?;
    if with_path {
        writeln!(f, "Path: {}", record.path_display())?;
        writeln!(f, "Visited: {}", record.visited_display())?;
    } else {
        writeln!(f, "Elapsed time: {:?}", record.elapsed)?;
    }
    writeln!(f)
}

impl<N: NodeId> fmt::Display for Comparison<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------------------------")?;
        writeln!(f, "Comparison {} results:", self.name)?;
        writeln!(f, "Total test cases: {}", self.total_cases())?;
        writeln!(f)?;

        if let Some(summary) = self.summary {
            write_entry(f, "Shortest path", &self.records[summary.shortest], true)?;
            write_entry(f, "Longest path", &self.records[summary.longest], true)?;
            write_entry(f, "Fastest search", &self.records[summary.fastest], false)?;
            write_entry(f, "Slowest search", &self.records[summary.slowest], false)?;

            writeln!(
                f,
                "Average coverage: {:.1}%",
                summary.average_coverage * 100.0
            )?;
            writeln!(f, "Average search time: {:?}", summary.average_elapsed)?;
            writeln!(f, "Total search time: {:?}", summary.total_elapsed)?;

            if self.failed() > 0 {
                writeln!(f)?;
                writeln!(f, "Failed tests amount: {}", self.failed())?;
            }
        }

        writeln!(f, "----------------------------")
    }
}
