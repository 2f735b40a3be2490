use crate::maze::trace::StopReason;
use crate::task::assemble::PuzzleFacts;

/// Describe the puzzle and the walk it produces.
///
/// Rows and columns are 1-based. The stopping sentence depends on the stop reason.
pub fn prompt(facts: &PuzzleFacts) -> String {
    let n = facts.grid_size;
    let (start, end) = (facts.start, facts.end);

    let rule = match facts.stop_reason {
        StopReason::ExitedBoundary => "The dot stops when the arrow points outside the grid boundary.",
        StopReason::Looped | StopReason::StepLimitReached => {
            "The dot stops when the arrow points outside the grid boundary or back to a cell it already visited."
        }
    };
    let stop = match facts.stop_reason {
        StopReason::ExitedBoundary => format!(
            "(arrow points {}, outside boundary)",
            facts.exit_direction
        ),
        StopReason::Looped => "(it returns to a cell it already visited)".to_owned(),
        StopReason::StepLimitReached => "(step limit reached)".to_owned(),
    };

    format!(
        "{n}x{n} grid with directional arrows (↑↓←→) in each cell.\n\
         A semi-transparent blue dot starts at row {}, column {}.\n\
         \n\
         The dot follows the arrow in its current cell, moving one cell per step.\n\
         Each visited cell is highlighted with a yellow background.\n\
         {rule}\n\
         \n\
         The dot stops at row {}, column {} {stop}.\n\
         Final destination has a green border. Total steps: {}.",
        start.row + 1,
        start.col + 1,
        end.row + 1,
        end.col + 1,
        facts.path_length,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/task/prompt.rs"]
mod tests;
