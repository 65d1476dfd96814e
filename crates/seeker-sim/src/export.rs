//! JSON export of path history and visit graphs for external plotting.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use seeker_core::Cell;
use seeker_nav::Grid;
use seeker_tools::{PathHistoryLog, PathRecord, VisitGraph};

/// First line of a history file: the grid the paths were computed on and the markers
/// a plot needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryHeader {
    pub width: u32,
    pub height: u32,
    pub wrap: bool,
    pub start: Cell,
    pub food: Cell,
}

impl HistoryHeader {
    pub fn grid(&self) -> Result<Grid> {
        Grid::with_wrap(self.width, self.height, self.wrap)
            .context("Invalid grid in history header")
    }
}

/// A history file read back: header plus every record, all checked against the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFile {
    pub header: HistoryHeader,
    pub log: PathHistoryLog,
}

impl HistoryFile {
    pub fn visit_graph(&self) -> VisitGraph {
        VisitGraph::from_history(self.header.width as i32, self.header.height as i32, &self.log)
            .with_markers(self.header.start, self.header.food)
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write the history as JSON lines, replacing `path`: the header, then one
/// `PathRecord` per line.
pub fn write_history_jsonl(
    path: &Path,
    header: &HistoryHeader,
    log: &PathHistoryLog,
) -> Result<()> {
    create_parent(path)?;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut out = BufWriter::new(file);
    writeln!(out, "{}", serde_json::to_string(header)?)?;
    for record in log {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

/// Read a history written by [`write_history_jsonl`]. Blank lines are skipped.
///
/// Fails when the header is missing or any logged cell lies outside the header's grid.
pub fn read_history_jsonl(path: &Path) -> Result<HistoryFile> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let mut header: Option<(HistoryHeader, Grid)> = None;
    let mut log = PathHistoryLog::new();
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let at = || format!("{}:{}", path.display(), n + 1);

        let grid = match header {
            Some((_, grid)) => grid,
            None => {
                let parsed: HistoryHeader = serde_json::from_str(&line)
                    .with_context(|| format!("Missing or bad history header at {}", at()))?;
                let grid = parsed.grid().with_context(|| at())?;
                grid.validate(parsed.start)
                    .with_context(|| format!("Header start outside the grid at {}", at()))?;
                grid.validate(parsed.food)
                    .with_context(|| format!("Header food outside the grid at {}", at()))?;
                header = Some((parsed, grid));
                continue;
            }
        };

        let record: PathRecord = serde_json::from_str(&line)
            .with_context(|| format!("Bad history record at {}", at()))?;
        let cells = [record.start, record.goal]
            .into_iter()
            .chain(record.path.cells().iter().copied());
        for cell in cells {
            grid.validate(cell).with_context(|| {
                format!("History record at {} does not fit the header grid", at())
            })?;
        }
        log.push(record);
    }

    let Some((header, _)) = header else {
        bail!("{} is empty, expected a history header", path.display());
    };
    Ok(HistoryFile { header, log })
}

/// Pretty-printed JSON document (visit graph, run summary).
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    create_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
