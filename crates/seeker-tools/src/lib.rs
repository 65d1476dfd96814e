//! Diagnostics primitives for seeker.
//!
//! Everything here is plain data recorded during simulation and consumed later by
//! tooling (plotters, inspectors). Nothing in this crate draws.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod graph;
pub mod history;

pub use graph::VisitGraph;
pub use history::{PathHistoryLog, PathRecord};
