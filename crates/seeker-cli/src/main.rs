//! Seeker CLI - toroidal A* replanning demo.
//!
//! - `seeker run` - headless simulation, optional history/graph export
//! - `seeker path` - one-shot path query
//! - `seeker graph` - rebuild the visit graph from an exported history
//! - `seeker init` - write a default config

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use seeker_core::Cell;
use seeker_nav::{search_with, Heuristic};
use seeker_sim::config::DEFAULT_CONFIG_FILE;
use seeker_sim::export::{read_history_jsonl, write_history_jsonl, write_json};
use seeker_sim::{SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "seeker")]
#[command(about = "Agent chasing a moving target with per-tick A* replanning", version)]
struct Cli {
    /// Config file (YAML); defaults apply when it does not exist
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation until the score or tick limit is reached
    Run {
        /// Override max_ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Override the seed
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds between ticks (0 runs flat out)
        #[arg(long, default_value_t = 0)]
        tick_ms: u64,

        /// Write every computed path as JSON lines
        #[arg(long)]
        history_out: Option<PathBuf>,

        /// Write the visited-edge graph as JSON
        #[arg(long)]
        graph_out: Option<PathBuf>,

        /// Write the run summary as JSON
        #[arg(long)]
        summary_out: Option<PathBuf>,
    },

    /// Compute a single path
    Path {
        /// Start cell as `x,y`
        #[arg(long, value_parser = parse_cell)]
        from: Cell,

        /// Goal cell as `x,y`
        #[arg(long, value_parser = parse_cell)]
        to: Cell,

        /// Override the configured heuristic (manhattan | toroidal)
        #[arg(long)]
        heuristic: Option<Heuristic>,
    },

    /// Build the visited-edge graph from an exported history (grid taken from its header)
    Graph {
        /// History file written by `run --history-out`
        history: PathBuf,

        /// Output file; printed to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Cell::new(x, y))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            ticks,
            seed,
            tick_ms,
            history_out,
            graph_out,
            summary_out,
        } => {
            let mut config = SimConfig::load_or_default(&cli.config)?;
            if let Some(ticks) = ticks {
                config.max_ticks = ticks;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            let outputs = Outputs {
                history: history_out,
                graph: graph_out,
                summary: summary_out,
            };
            run_simulation(config, tick_ms, &outputs).await
        }
        Commands::Path {
            from,
            to,
            heuristic,
        } => {
            let config = SimConfig::load_or_default(&cli.config)?;
            show_path(&config, from, to, heuristic)
        }
        Commands::Graph { history, out } => build_graph(&history, out.as_deref()),
        Commands::Init { force } => init_config(&cli.config, force),
    }
}

struct Outputs {
    history: Option<PathBuf>,
    graph: Option<PathBuf>,
    summary: Option<PathBuf>,
}

async fn run_simulation(config: SimConfig, tick_ms: u64, outputs: &Outputs) -> Result<()> {
    let mut sim = Simulation::new(config)?;
    let mut pacing = (tick_ms > 0).then(|| tokio::time::interval(Duration::from_millis(tick_ms)));

    while !sim.is_finished() {
        if let Some(interval) = pacing.as_mut() {
            interval.tick().await;
        }
        let report = sim.step();
        tracing::debug!(
            tick = report.tick,
            target = %report.target,
            head = %report.outcome.position,
            direction = %report.outcome.direction,
            steps = ?report.outcome.path.steps(),
            "Tick"
        );
    }

    let summary = sim.summary();
    tracing::info!(
        ticks = summary.ticks,
        score = summary.score,
        reason = ?summary.stop_reason,
        "Run finished"
    );

    if let Some(path) = &outputs.history {
        write_history_jsonl(path, &sim.history_header(), sim.history())?;
        tracing::info!(path = %path.display(), records = sim.history().len(), "Wrote history");
    }
    if let Some(path) = &outputs.graph {
        let graph = sim.visit_graph();
        write_json(path, &graph)?;
        tracing::info!(path = %path.display(), edges = graph.edge_count(), "Wrote visit graph");
    }
    if let Some(path) = &outputs.summary {
        write_json(path, &summary)?;
    }

    println!("Seeker run");
    println!("==========");
    println!();
    println!(
        "Grid:        {}x{} (wrap: {})",
        sim.grid().width(),
        sim.grid().height(),
        sim.grid().wraps()
    );
    println!("Ticks:       {}", summary.ticks);
    println!("Score:       {}", summary.score);
    println!(
        "Paths:       {} found, {} not found",
        summary.paths_found, summary.paths_not_found
    );
    println!(
        "Agent:       {} facing {}",
        summary.final_head, summary.final_direction
    );
    println!("Food:        {}", summary.food);
    Ok(())
}

fn show_path(config: &SimConfig, from: Cell, to: Cell, heuristic: Option<Heuristic>) -> Result<()> {
    let grid = config.build_grid()?;
    grid.validate(from).context("--from is outside the grid")?;
    grid.validate(to).context("--to is outside the grid")?;

    let heuristic = heuristic.unwrap_or(config.heuristic);
    let path = search_with(&grid, from, to, heuristic);
    let Some(steps) = path.steps() else {
        bail!("No path from {} to {}", from, to);
    };

    println!(
        "{} -> {}: {} steps ({:?}, true distance {})",
        from,
        to,
        steps,
        heuristic,
        grid.distance(from, to)
    );
    let cells: Vec<String> = path.cells().iter().map(|c| c.to_string()).collect();
    println!("{}", cells.join(" -> "));
    Ok(())
}

fn build_graph(history: &Path, out: Option<&Path>) -> Result<()> {
    let file = read_history_jsonl(history)?;
    let graph = file.visit_graph();
    tracing::info!(
        width = file.header.width,
        height = file.header.height,
        records = file.log.len(),
        edges = graph.edge_count(),
        cells = graph.visited_cells().len(),
        "Built visit graph"
    );

    match out {
        Some(path) => write_json(path, &graph),
        None => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
            Ok(())
        }
    }
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    std::fs::write(path, SimConfig::template())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Initialized seeker config at {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit grid size, start and seed in {}", path.display());
    println!("  2. Run: seeker run --history-out paths.jsonl --graph-out graph.json");
    Ok(())
}
