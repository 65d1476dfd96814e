use crate::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single path search.
///
/// A `Found` path always runs from the requested start to the requested goal,
/// both inclusive, with every consecutive pair being grid neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "cells", rename_all = "snake_case"))]
pub enum PathResult {
    Found(Vec<Cell>),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    /// Cells of the path; empty when nothing was found.
    pub fn cells(&self) -> &[Cell] {
        match self {
            PathResult::Found(cells) => cells,
            PathResult::NotFound => &[],
        }
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// Number of moves along the path (`len - 1`), `None` when nothing was found.
    pub fn steps(&self) -> Option<usize> {
        match self {
            PathResult::Found(cells) => Some(cells.len().saturating_sub(1)),
            PathResult::NotFound => None,
        }
    }

    /// The cell after the start, if the path has one.
    pub fn next_cell(&self) -> Option<Cell> {
        self.cells().get(1).copied()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells().first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells().last().copied()
    }

    /// Consecutive cell pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells().windows(2).map(|w| (w[0], w[1]))
    }
}
