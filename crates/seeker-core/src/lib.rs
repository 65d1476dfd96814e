//! Deterministic value types for grid navigation: cells, directions, path results.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod path;
pub mod rng;

pub use cell::{Cell, Direction};
pub use path::PathResult;
pub use rng::{DeterministicRng, SplitMix64};
