use seeker_core::{Cell, PathResult};

use crate::error::Result;
use crate::{search_with, Grid, Heuristic};

/// Path provider consumed by the replanning controller.
pub trait Navigator {
    fn grid(&self) -> &Grid;

    fn find_path(&self, start: Cell, goal: Cell) -> PathResult;

    /// Boundary check for callers that want an error instead of a silent `NotFound`.
    fn validate(&self, cell: Cell) -> Result<Cell> {
        self.grid().validate(cell)
    }
}

/// A* over a [`Grid`] with a fixed heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStar {
    grid: Grid,
    heuristic: Heuristic,
}

impl AStar {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            heuristic: Heuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Navigator for AStar {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn find_path(&self, start: Cell, goal: Cell) -> PathResult {
        search_with(&self.grid, start, goal, self.heuristic)
    }
}
