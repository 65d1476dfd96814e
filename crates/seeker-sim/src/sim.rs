use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use seeker_core::{Cell, DeterministicRng, Direction, SplitMix64};
use seeker_nav::{AStar, Controller, ControllerState, Grid, Navigator, TickOutcome};
use seeker_tools::{PathHistoryLog, VisitGraph};

use crate::export::HistoryHeader;
use crate::{Food, SimConfig};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    ScoreReached,
    TickLimit,
}

/// Result of a single simulation tick.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub tick: u64,
    pub target: Cell,
    pub outcome: TickOutcome,
    pub ate: bool,
}

/// End-of-run summary, printed by the CLI and exported as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub ticks: u64,
    pub score: u32,
    pub stop_reason: Option<StopReason>,
    pub paths_found: usize,
    pub paths_not_found: usize,
    pub final_head: Cell,
    pub final_direction: Direction,
    pub food: Cell,
}

/// Single-agent simulation: the controller chases food that relocates once eaten.
pub struct Simulation {
    config: SimConfig,
    controller: Controller<AStar>,
    food: Food,
    rng: SplitMix64,
    score: u32,
    started_at: DateTime<Utc>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.build_grid()?;
        let mut rng = SplitMix64::new(config.seed);

        let direction = match config.agent.initial_direction {
            Some(direction) => direction,
            None => *rng.pick(&Direction::ALL).unwrap_or(&Direction::Right),
        };
        let state = ControllerState::spawn(
            &grid,
            config.agent.start,
            config.agent.body_length,
            direction,
        )
        .context("Failed to spawn agent")?;

        let food = match config.food.position {
            Some(position) => Food::new(position),
            None => Food::random(&grid, &mut rng, &state),
        };

        let navigator = AStar::new(grid).with_heuristic(config.heuristic);
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            wrap = grid.wraps(),
            heuristic = ?config.heuristic,
            start = %state.head(),
            %direction,
            food = %food.position(),
            "Simulation ready"
        );

        Ok(Self {
            config,
            controller: Controller::new(navigator, state),
            food,
            rng,
            score: 0,
            started_at: Utc::now(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.controller.navigator().grid()
    }

    pub fn controller(&self) -> &Controller<AStar> {
        &self.controller
    }

    pub fn history(&self) -> &PathHistoryLog {
        self.controller.history()
    }

    /// Edges of every computed path, marked with the spawn cell and the current food.
    pub fn visit_graph(&self) -> VisitGraph {
        let grid = self.grid();
        VisitGraph::from_history(grid.width(), grid.height(), self.history())
            .with_markers(self.config.agent.start, self.food.position())
    }

    /// Header for [`crate::export::write_history_jsonl`].
    pub fn history_header(&self) -> HistoryHeader {
        HistoryHeader {
            width: self.config.grid.width,
            height: self.config.grid.height,
            wrap: self.config.grid.wrap,
            start: self.config.agent.start,
            food: self.food.position(),
        }
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick(&self) -> u64 {
        self.controller.ticks()
    }

    /// Manual steering; rejected when it reverses the current direction.
    pub fn override_direction(&mut self, direction: Direction) -> bool {
        self.controller.override_direction(direction)
    }

    /// Move the target from outside (e.g. an input collaborator).
    pub fn place_food(&mut self, position: Cell) -> Result<()> {
        let position = self
            .grid()
            .validate(position)
            .context("Food position outside the grid")?;
        self.food.set_position(position);
        Ok(())
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.config.max_score > 0 && self.score >= self.config.max_score {
            Some(StopReason::ScoreReached)
        } else if self.tick() >= self.config.max_ticks {
            Some(StopReason::TickLimit)
        } else {
            None
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stop_reason().is_some()
    }

    /// Advance one tick: replan, move, then eat and relocate if the head reached food.
    pub fn step(&mut self) -> StepReport {
        let tick = self.tick();
        let target = self.food.position();
        let outcome = self.controller.tick(target);

        let ate = outcome.position == target;
        if ate {
            self.score += 1;
            self.controller.grow(1);
            let grid = *self.grid();
            self.food = Food::random(&grid, &mut self.rng, self.controller.state());
            tracing::info!(
                tick,
                score = self.score,
                at = %target,
                next = %self.food.position(),
                "Food eaten"
            );
        }

        StepReport {
            tick,
            target,
            outcome,
            ate,
        }
    }

    /// Step until a stop condition holds.
    pub fn run(&mut self) -> RunSummary {
        while !self.is_finished() {
            self.step();
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        let history = self.history();
        let state = self.controller.state();
        RunSummary {
            started_at: self.started_at,
            finished_at: Utc::now(),
            ticks: self.tick(),
            score: self.score,
            stop_reason: self.stop_reason(),
            paths_found: history.found_count(),
            paths_not_found: history.not_found_count(),
            final_head: state.head(),
            final_direction: state.direction(),
            food: self.food.position(),
        }
    }
}
