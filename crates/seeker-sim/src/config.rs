//! Simulation configuration loading and validation.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use seeker_core::{Cell, Direction};
use seeker_nav::{Grid, Heuristic};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "seeker.yaml";

/// Top-level simulation configuration, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid dimensions and topology
    pub grid: GridConfig,

    /// Agent spawn parameters
    pub agent: AgentConfig,

    /// Initial food placement
    pub food: FoodConfig,

    /// Search heuristic (`manhattan` or `toroidal`)
    pub heuristic: Heuristic,

    /// Seed for food placement and the random initial direction
    pub seed: u64,

    /// Stop after this many ticks
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Stop once this much food has been eaten; 0 disables the limit
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_true")]
    pub wrap: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Head position at spawn
    pub start: Cell,

    /// Body segments at spawn, head included
    #[serde(default = "default_body_length")]
    pub body_length: usize,

    /// Facing at spawn; random (seeded) when absent
    pub initial_direction: Option<Direction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    /// First food position; random (seeded, off the agent's body) when absent
    pub position: Option<Cell>,
}

fn default_width() -> u32 {
    20
}
fn default_height() -> u32 {
    10
}
fn default_true() -> bool {
    true
}
fn default_body_length() -> usize {
    2
}
fn default_max_ticks() -> u64 {
    500
}
fn default_max_score() -> u32 {
    1
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            wrap: default_true(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            start: Cell::new(0, 0),
            body_length: default_body_length(),
            initial_direction: None,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            agent: AgentConfig::default(),
            food: FoodConfig::default(),
            heuristic: Heuristic::default(),
            seed: 0,
            max_ticks: default_max_ticks(),
            max_score: default_max_score(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the grid described by this config
    pub fn build_grid(&self) -> Result<Grid> {
        Grid::with_wrap(self.grid.width, self.grid.height, self.grid.wrap)
            .context("Invalid grid dimensions")
    }

    pub fn validate(&self) -> Result<()> {
        let grid = self.build_grid()?;
        grid.validate(self.agent.start)
            .context("agent.start is outside the grid")?;
        if let Some(food) = self.food.position {
            grid.validate(food).context("food.position is outside the grid")?;
        }
        if self.agent.body_length == 0 {
            bail!("agent.body_length must be at least 1");
        }
        Ok(())
    }

    /// Commented YAML written by `seeker init`
    pub fn template() -> &'static str {
        r#"# Seeker simulation configuration

grid:
  width: 20
  height: 10
  wrap: true

agent:
  start: { x: 0, y: 0 }
  body_length: 2
  initial_direction: null   # up | down | left | right; random when null

food:
  position: null   # e.g. { x: 12, y: 7 }; random when null

# manhattan reproduces the classic behaviour (not admissible with wrap);
# toroidal takes wraparound into account and always finds shortest paths.
heuristic: manhattan

seed: 0
max_ticks: 500
# 0 keeps running until max_ticks
max_score: 1
"#
    }
}
