//! Seeker simulation driver.
//!
//! Plays the roles the navigation core leaves to collaborators: it loads the
//! configuration, places and relocates the food the agent chases, keeps score,
//! decides when a run is over and exports the path history for plotting.

pub mod config;
pub mod export;
pub mod food;
pub mod sim;

pub use config::SimConfig;
pub use food::Food;
pub use sim::{RunSummary, Simulation, StepReport, StopReason};
