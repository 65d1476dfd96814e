use core::cmp::Ordering;
use std::collections::BinaryHeap;

use seeker_core::Cell;

#[derive(Debug)]
struct Entry {
    priority: u32,
    cell: Cell,
    seq: u64,
}

impl Entry {
    fn key(&self) -> (u32, Cell, u64) {
        (self.priority, self.cell, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Min-priority queue of `(priority, cell)` pairs.
///
/// Ties on priority pop the smaller cell first, then the earlier insertion. The same
/// cell may be queued several times; callers decide which entries are stale.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    pub fn push(&mut self, priority: u32, cell: Cell) {
        self.heap.push(Entry {
            priority,
            cell,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Smallest entry, or `None` once the frontier is exhausted.
    pub fn pop_min(&mut self) -> Option<(u32, Cell)> {
        self.heap.pop().map(|e| (e.priority, e.cell))
    }

    pub fn peek_min(&self) -> Option<(u32, Cell)> {
        self.heap.peek().map(|e| (e.priority, e.cell))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}
