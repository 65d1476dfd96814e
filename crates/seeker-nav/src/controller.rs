use std::collections::VecDeque;

use seeker_core::{Cell, Direction, PathResult};
use seeker_tools::{PathHistoryLog, PathRecord};

use crate::error::{NavError, Result};
use crate::{Grid, Navigator};

/// Agent state carried between ticks: body (head first), facing, pending growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_growth: usize,
}

impl ControllerState {
    pub fn new(
        grid: &Grid,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Result<Self> {
        let body = body
            .into_iter()
            .map(|cell| grid.validate(cell))
            .collect::<Result<VecDeque<_>>>()?;
        if body.is_empty() {
            return Err(NavError::EmptyBody);
        }
        Ok(Self {
            body,
            direction,
            pending_growth: 0,
        })
    }

    /// Body of `length` cells with the tail trailing behind `head`, opposite to
    /// `direction`. On a bounded grid the tail stacks at the edge.
    pub fn spawn(grid: &Grid, head: Cell, length: usize, direction: Direction) -> Result<Self> {
        let head = grid.validate(head)?;
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);
        let mut last = head;
        for _ in 1..length {
            last = grid.step(last, direction.opposite()).unwrap_or(last);
            body.push(last);
        }
        Self::new(grid, body, direction)
    }

    pub fn head(&self) -> Cell {
        // Never empty: both constructors reject empty bodies and moves keep length.
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Externally requested turn. Rejected when it exactly reverses the current facing.
    pub fn override_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Extend the body by `segments` over the next moves.
    pub fn grow(&mut self, segments: usize) {
        self.pending_growth = self.pending_growth.saturating_add(segments);
    }

    /// Move one step in the current direction. Returns `false` if a bounded grid
    /// blocked the move.
    fn advance(&mut self, grid: &Grid) -> bool {
        let Some(next) = grid.step(self.head(), self.direction) else {
            return false;
        };
        self.body.push_front(next);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }
        true
    }
}

/// What one tick decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub direction: Direction,
    pub position: Cell,
    pub path: PathResult,
    pub moved: bool,
}

/// Replan from the current head to `target`, turn toward the first step, advance.
///
/// When the path has fewer than two cells (already on target, or nothing found) the
/// previous direction is kept. Search-derived turns bypass the reversal guard.
pub fn tick<N>(navigator: &N, state: &mut ControllerState, target: Cell) -> TickOutcome
where
    N: Navigator + ?Sized,
{
    let grid = navigator.grid();
    let head = state.head();
    let path = navigator.find_path(head, target);

    if let Some(next) = path.next_cell() {
        if let Some(direction) = grid.direction_between(head, next) {
            state.direction = direction;
        }
    }

    let moved = state.advance(grid);
    TickOutcome {
        direction: state.direction,
        position: state.head(),
        path,
        moved,
    }
}

/// Replanning controller: agent state plus the history of every path it computed.
#[derive(Debug, Clone)]
pub struct Controller<N> {
    navigator: N,
    state: ControllerState,
    history: PathHistoryLog,
    ticks: u64,
}

impl<N: Navigator> Controller<N> {
    pub fn new(navigator: N, state: ControllerState) -> Self {
        Self {
            navigator,
            state,
            history: PathHistoryLog::new(),
            ticks: 0,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn history(&self) -> &PathHistoryLog {
        &self.history
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn override_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.override_direction(direction);
        if !accepted {
            tracing::debug!(
                requested = %direction,
                current = %self.state.direction,
                "rejected reversing override"
            );
        }
        accepted
    }

    pub fn grow(&mut self, segments: usize) {
        self.state.grow(segments);
    }

    pub fn tick(&mut self, target: Cell) -> TickOutcome {
        let start = self.state.head();
        let outcome = tick(&self.navigator, &mut self.state, target);

        match outcome.path.steps() {
            Some(steps) => tracing::debug!(
                tick = self.ticks,
                %start,
                %target,
                steps,
                direction = %outcome.direction,
                "replanned"
            ),
            None => tracing::warn!(
                tick = self.ticks,
                %start,
                %target,
                direction = %outcome.direction,
                "no path found, holding direction"
            ),
        }
        if !outcome.moved {
            tracing::debug!(tick = self.ticks, %start, "move blocked by grid edge");
        }

        self.history.push(PathRecord::new(
            self.ticks,
            start,
            target,
            outcome.path.clone(),
        ));
        self.ticks += 1;
        outcome
    }
}
