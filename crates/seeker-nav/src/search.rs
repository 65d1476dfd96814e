use std::collections::HashMap;

use seeker_core::{Cell, PathResult};

use crate::{Frontier, Grid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance estimate guiding the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// `|dx| + |dy|` on raw coordinates.
    ///
    /// Not admissible on a wrapping grid: it overestimates whenever the wrapped route
    /// is shorter, so returned paths can be longer than the true shortest path.
    #[default]
    Manhattan,
    /// `min(|dx|, w - |dx|) + min(|dy|, h - |dy|)`. Admissible on every topology.
    Toroidal,
}

impl Heuristic {
    pub fn estimate(self, grid: &Grid, from: Cell, goal: Cell) -> u32 {
        match self {
            Heuristic::Manhattan => from.manhattan(goal),
            Heuristic::Toroidal => grid.distance(from, goal),
        }
    }
}

impl core::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "toroidal" | "torus" | "wrap" => Ok(Heuristic::Toroidal),
            other => Err(format!("unknown heuristic `{other}`")),
        }
    }
}

/// A* from `start` to `goal` with the raw Manhattan heuristic.
pub fn search(grid: &Grid, start: Cell, goal: Cell) -> PathResult {
    search_with(grid, start, goal, Heuristic::Manhattan)
}

/// A* with unit edge costs.
///
/// Out-of-bounds endpoints and an exhausted frontier both yield
/// [`PathResult::NotFound`]; this function never panics.
pub fn search_with(grid: &Grid, start: Cell, goal: Cell, heuristic: Heuristic) -> PathResult {
    if !grid.contains(start) || !grid.contains(goal) {
        tracing::debug!(%start, %goal, "search endpoints outside grid");
        return PathResult::NotFound;
    }

    let mut state = SearchState::new(grid, heuristic, goal);
    state.run(start)
}

/// Per-call bookkeeping; dropped once the path is reconstructed.
struct SearchState<'g> {
    grid: &'g Grid,
    heuristic: Heuristic,
    goal: Cell,
    cost_so_far: HashMap<Cell, u32>,
    came_from: HashMap<Cell, Cell>,
    frontier: Frontier,
}

impl<'g> SearchState<'g> {
    fn new(grid: &'g Grid, heuristic: Heuristic, goal: Cell) -> Self {
        Self {
            grid,
            heuristic,
            goal,
            cost_so_far: HashMap::new(),
            came_from: HashMap::new(),
            frontier: Frontier::new(),
        }
    }

    fn h(&self, cell: Cell) -> u32 {
        self.heuristic.estimate(self.grid, cell, self.goal)
    }

    fn run(&mut self, start: Cell) -> PathResult {
        self.cost_so_far.insert(start, 0);
        self.frontier.push(self.h(start), start);

        let mut expanded = 0usize;
        while let Some((priority, current)) = self.frontier.pop_min() {
            if current == self.goal {
                tracing::trace!(expanded, "search reached goal");
                return self.reconstruct(start);
            }

            let Some(&cost) = self.cost_so_far.get(&current) else {
                continue;
            };
            if priority != cost.saturating_add(self.h(current)) {
                // Stale entry: a cheaper route to `current` was queued later.
                continue;
            }
            expanded += 1;

            let tentative = cost.saturating_add(1);
            for next in self.grid.neighbors(current) {
                let improves = self
                    .cost_so_far
                    .get(&next)
                    .map_or(true, |&known| tentative < known);
                if !improves {
                    continue;
                }
                self.cost_so_far.insert(next, tentative);
                self.came_from.insert(next, current);
                let priority = tentative.saturating_add(self.h(next));
                self.frontier.push(priority, next);
            }
        }

        tracing::trace!(expanded, "search frontier exhausted");
        PathResult::NotFound
    }

    fn reconstruct(&self, start: Cell) -> PathResult {
        let limit = self.grid.cell_count();
        let mut current = self.goal;
        let mut cells = vec![current];
        while current != start {
            let Some(&prev) = self.came_from.get(&current) else {
                return PathResult::NotFound;
            };
            if cells.len() > limit {
                return PathResult::NotFound;
            }
            current = prev;
            cells.push(current);
        }
        cells.reverse();
        PathResult::Found(cells)
    }
}
