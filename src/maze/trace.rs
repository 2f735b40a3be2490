use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MazeError, MazeResult};
use crate::maze::grid::{Direction, Grid, Position};

/// Why a trace halted. Exactly one applies to a finished trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The arrow at the end cell points off the grid.
    ExitedBoundary,
    /// The walk reached a cell it had already visited.
    Looped,
    /// The step cap was hit before either of the above.
    StepLimitReached,
}

impl StopReason {
    /// snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::ExitedBoundary => "exited_boundary",
            StopReason::Looped => "looped",
            StopReason::StepLimitReached => "step_limit_reached",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid together with its fully traced walk.
///
/// Built only by [`trace`]/[`trace_with_limit`], so `path` is never empty, starts at `start`, and
/// every position in it lies inside `grid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleState {
    grid: Grid,
    start: Position,
    path: Vec<Position>,
    stop_reason: StopReason,
}

impl PuzzleState {
    /// The arrow grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid dimension `N`.
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Where the walk began.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Visited positions in order. When the walk looped, the last entry repeats an earlier one.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Where the walk halted (the last path entry).
    pub fn end(&self) -> Position {
        self.path.last().copied().unwrap_or(self.start)
    }

    /// Why the walk halted.
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Arrow stored at the end cell.
    pub fn end_direction(&self) -> Direction {
        // `end` always lies inside the grid.
        self.grid.get(self.end()).unwrap_or(Direction::Up)
    }
}

/// Follow the arrows from `start` until the walk leaves the grid, revisits a cell, or takes
/// `N² + 1` steps.
#[tracing::instrument(skip(grid), fields(size = grid.size()))]
pub fn trace(grid: &Grid, start: Position) -> MazeResult<PuzzleState> {
    let n = grid.size();
    trace_with_limit(grid, start, n * n + 1)
}

/// [`trace`] with an explicit step cap.
///
/// Each step reads the arrow at the current cell:
/// - off-grid target: stop with [`StopReason::ExitedBoundary`], the current cell is the end;
/// - already visited target: append it once and stop with [`StopReason::Looped`];
/// - otherwise append it and move on.
///
/// Running out of steps stops with [`StopReason::StepLimitReached`] at the current cell.
pub fn trace_with_limit(
    grid: &Grid,
    start: Position,
    max_steps: usize,
) -> MazeResult<PuzzleState> {
    if !grid.contains(start) {
        return Err(MazeError::config(format!(
            "start {start} is outside the {0}x{0} grid",
            grid.size()
        )));
    }

    let mut path = vec![start];
    let mut visited = HashSet::from([start]);
    let mut current = start;
    let mut stop_reason = StopReason::StepLimitReached;

    for _ in 0..max_steps {
        let Some(dir) = grid.get(current) else {
            return Err(MazeError::config(format!("position {current} left the grid")));
        };
        let Some(next) = current.step(dir, grid.size()) else {
            stop_reason = StopReason::ExitedBoundary;
            break;
        };
        path.push(next);
        if !visited.insert(next) {
            stop_reason = StopReason::Looped;
            break;
        }
        current = next;
    }

    tracing::debug!(
        len = path.len(),
        reason = stop_reason.as_str(),
        "trace finished"
    );
    Ok(PuzzleState {
        grid: grid.clone(),
        start,
        path,
        stop_reason,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/maze/trace.rs"]
mod tests;
