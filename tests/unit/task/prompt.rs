use super::*;
use crate::maze::grid::{Direction, Grid, Position};
use crate::maze::trace::{trace, trace_with_limit};

use Direction::{Down, Left, Right, Up};

fn facts_for(rows: Vec<Vec<Direction>>, start: Position) -> PuzzleFacts {
    let g = Grid::from_rows(rows).unwrap();
    PuzzleFacts::from_state(&trace(&g, start).unwrap())
}

#[test]
fn boundary_exit_names_direction_and_uses_one_based_cells() {
    let facts = facts_for(
        vec![vec![Right, Up], vec![Left, Down]],
        Position::new(0, 0),
    );
    let text = prompt(&facts);
    assert!(text.starts_with("2x2 grid with directional arrows (↑↓←→) in each cell.\n"));
    assert!(text.contains("starts at row 1, column 1."));
    assert!(text.contains("The dot stops at row 1, column 2 (arrow points up, outside boundary)."));
    assert!(text.ends_with("Total steps: 2."));
    assert!(text.contains("The dot stops when the arrow points outside the grid boundary.\n"));
}

#[test]
fn loop_wording_mentions_revisit() {
    let facts = facts_for(
        vec![vec![Right, Down], vec![Up, Left]],
        Position::new(0, 0),
    );
    let text = prompt(&facts);
    assert!(text.contains("row 1, column 1 (it returns to a cell it already visited)."));
    assert!(text.contains("Total steps: 5."));
    assert!(!text.contains("outside boundary)"));
}

#[test]
fn step_limit_wording() {
    let g = Grid::from_rows(vec![vec![Right, Down], vec![Up, Left]]).unwrap();
    let state = trace_with_limit(&g, Position::new(0, 0), 1).unwrap();
    let text = prompt(&PuzzleFacts::from_state(&state));
    assert!(text.contains("row 1, column 2 (step limit reached)."));
    assert!(text.contains("Total steps: 2."));
}
