//! Min-priority frontier with lazy deletion.
//!
//! Entries are never removed when a cheaper route to the same node is found;
//! the search discards stale entries when they surface at pop time. The
//! frontier itself therefore holds no visited set, only the heap and a push
//! counter. Total pushes are bounded by the number of edges expanded.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use waypoint_kernel::graph::NodeId;

use crate::node::{FrontierEntry, FrontierKey};

/// A heap slot wrapping an entry with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct HeapSlot<N: NodeId> {
    key: Reverse<FrontierKey>,
    entry: FrontierEntry<N>,
}

impl<N: NodeId> PartialEq for HeapSlot<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N: NodeId> Eq for HeapSlot<N> {}

impl<N: NodeId> PartialOrd for HeapSlot<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: NodeId> Ord for HeapSlot<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Per-search frontier. Owned exclusively by one search call.
pub struct LazyFrontier<N: NodeId> {
    heap: BinaryHeap<HeapSlot<N>>,
    next_sequence: u64,
    high_water: u64,
}

impl<N: NodeId> LazyFrontier<N> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Push an entry, stamping it with the next sequence number.
    ///
    /// Returns the sequence number assigned.
    pub fn push(&mut self, f_cost: f64, g_cost: f64, predecessor: Option<N>, node: N) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        let key = FrontierKey {
            f_cost,
            g_cost,
            sequence,
        };
        self.heap.push(HeapSlot {
            key: Reverse(key),
            entry: FrontierEntry {
                key,
                predecessor,
                node,
            },
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        sequence
    }

    /// Pop the entry with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop().map(|slot| slot.entry)
    }

    /// Current frontier size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total entries ever pushed.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_sequence
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<N: NodeId> Default for LazyFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
