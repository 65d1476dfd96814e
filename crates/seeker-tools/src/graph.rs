use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use seeker_core::{Cell, PathResult};

use crate::PathHistoryLog;

/// Cumulative search activity as an undirected graph.
///
/// Nodes are every cell of a `width x height` grid; edges are the cell pairs that
/// appeared consecutively in at least one logged path. Edges are stored with the
/// smaller cell first so `(a, b)` and `(b, a)` collapse.
///
/// `start` and `food` mark the agent's spawn cell and the last target, drawn on top
/// of the edges by plotting tools.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisitGraph {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<Cell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub food: Option<Cell>,
    pub edges: BTreeSet<(Cell, Cell)>,
}

impl VisitGraph {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            start: None,
            food: None,
            edges: BTreeSet::new(),
        }
    }

    pub fn with_markers(mut self, start: Cell, food: Cell) -> Self {
        self.start = Some(start);
        self.food = Some(food);
        self
    }

    pub fn from_history(width: i32, height: i32, log: &PathHistoryLog) -> Self {
        let mut graph = Self::new(width, height);
        for path in log.paths() {
            graph.add_path(path);
        }
        graph
    }

    pub fn add_path(&mut self, path: &PathResult) {
        for (a, b) in path.edges() {
            self.edges.insert(normalize(a, b));
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_edge(&self, a: Cell, b: Cell) -> bool {
        self.edges.contains(&normalize(a, b))
    }

    pub fn degree(&self, cell: Cell) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| *a == cell || *b == cell)
            .count()
    }

    /// Cells touched by at least one edge.
    pub fn visited_cells(&self) -> BTreeSet<Cell> {
        self.edges.iter().flat_map(|&(a, b)| [a, b]).collect()
    }

    /// Every grid cell, row-major, including those never visited.
    pub fn nodes(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

fn normalize(a: Cell, b: Cell) -> (Cell, Cell) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
