use seeker_core::{Cell, Direction};

use crate::error::{NavError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-size grid with optional wraparound.
///
/// With `wrap` on (the default), stepping off an edge reappears on the opposite edge
/// and every cell has exactly four neighbors. Degenerate 1xN grids yield self-loops,
/// which are not special-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    wrap: bool,
}

impl Grid {
    /// Wraparound grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_wrap(width, height, true)
    }

    pub fn with_wrap(width: u32, height: u32, wrap: bool) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(NavError::EmptyGrid {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            wrap,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn validate(&self, cell: Cell) -> Result<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(NavError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// One step from `cell` in `direction`, or `None` when a non-wrapping grid ends.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = cell.offset(direction);
        if self.wrap {
            Some(Cell::new(
                next.x.rem_euclid(self.width),
                next.y.rem_euclid(self.height),
            ))
        } else if self.contains(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Neighbors in canonical direction order: right, left, down, up.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(cell, d))
    }

    /// Direction whose single step from `from` lands on `to`, honoring wraparound.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(from, d) == Some(to))
    }

    pub fn are_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.direction_between(a, b).is_some()
    }

    /// True step count between two in-bounds cells on this topology.
    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        let dx = (a.x - b.x).unsigned_abs();
        let dy = (a.y - b.y).unsigned_abs();
        if self.wrap {
            let w = self.width as u32;
            let h = self.height as u32;
            dx.min(w.saturating_sub(dx)) + dy.min(h.saturating_sub(dy))
        } else {
            dx + dy
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}
