//! Grid navigation: wraparound topology, a min-priority frontier, A* search and the
//! replanning controller that turns each fresh path into a single move.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod navigator;
pub mod search;

pub use controller::{tick, Controller, ControllerState, TickOutcome};
pub use error::NavError;
pub use frontier::Frontier;
pub use grid::Grid;
pub use navigator::{AStar, Navigator};
pub use search::{search, search_with, Heuristic};

pub use seeker_core::{Cell, Direction, PathResult};
