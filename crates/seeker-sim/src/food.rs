use seeker_core::{Cell, DeterministicRng};
use seeker_nav::{ControllerState, Grid};

/// The moving target. Placed at random on free cells and relocated when eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Random cell not covered by the agent. Falls back to any cell when the body
    /// fills the grid.
    pub fn random<R: DeterministicRng>(grid: &Grid, rng: &mut R, agent: &ControllerState) -> Self {
        let free: Vec<Cell> = grid.cells().filter(|&c| !agent.occupies(c)).collect();
        let position = match rng.pick(&free) {
            Some(&cell) => cell,
            None => {
                let all: Vec<Cell> = grid.cells().collect();
                rng.pick(&all).copied().unwrap_or_default()
            }
        };
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn set_position(&mut self, position: Cell) {
        self.position = position;
    }
}
