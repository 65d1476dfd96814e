#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use seeker_core::{Cell, PathResult};

/// One search as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathRecord {
    pub tick: u64,
    pub start: Cell,
    pub goal: Cell,
    pub path: PathResult,
}

impl PathRecord {
    pub fn new(tick: u64, start: Cell, goal: Cell, path: PathResult) -> Self {
        Self {
            tick,
            start,
            goal,
            path,
        }
    }
}

/// Append-only log of every computed path, one entry per controller tick.
///
/// Failed searches are recorded too, so `len()` always equals the number of ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathHistoryLog {
    records: Vec<PathRecord>,
}

impl PathHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PathRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&PathRecord> {
        self.records.last()
    }

    /// Logged paths in order; the shape external plotters consume.
    pub fn paths(&self) -> impl Iterator<Item = &PathResult> + '_ {
        self.records.iter().map(|r| &r.path)
    }

    pub fn found_count(&self) -> usize {
        self.paths().filter(|p| p.is_found()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.len() - self.found_count()
    }
}

impl<'a> IntoIterator for &'a PathHistoryLog {
    type Item = &'a PathRecord;
    type IntoIter = std::slice::Iter<'a, PathRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
