use super::*;
use crate::maze::grid::generate;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use Direction::{Down, Left, Right, Up};

fn grid(rows: Vec<Vec<Direction>>) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn two_by_two_cycle_loops_back_to_start() {
    let g = grid(vec![vec![Right, Down], vec![Up, Left]]);
    let s = trace(&g, p(0, 0)).unwrap();
    assert_eq!(s.path(), &[p(0, 0), p(0, 1), p(1, 1), p(1, 0), p(0, 0)]);
    assert_eq!(s.stop_reason(), StopReason::Looped);
    assert_eq!(s.end(), p(0, 0));
    assert_eq!(s.grid_size(), 2);
}

#[test]
fn start_pointing_outward_exits_immediately() {
    let g = grid(vec![vec![Up, Down], vec![Up, Left]]);
    let s = trace(&g, p(0, 0)).unwrap();
    assert_eq!(s.path(), &[p(0, 0)]);
    assert_eq!(s.stop_reason(), StopReason::ExitedBoundary);
    assert_eq!(s.end(), p(0, 0));
    assert_eq!(s.end_direction(), Up);
}

#[test]
fn single_cell_grid_always_exits() {
    for d in Direction::ALL {
        let s = trace(&grid(vec![vec![d]]), p(0, 0)).unwrap();
        assert_eq!(s.path().len(), 1);
        assert_eq!(s.stop_reason(), StopReason::ExitedBoundary);
    }
}

#[test]
fn facing_pair_appends_repeat_exactly_once() {
    let g = grid(vec![vec![Right, Left], vec![Up, Up]]);
    let s = trace(&g, p(0, 0)).unwrap();
    assert_eq!(s.path(), &[p(0, 0), p(0, 1), p(0, 0)]);
    assert_eq!(s.stop_reason(), StopReason::Looped);
}

#[test]
fn exit_end_is_last_in_bounds_cell() {
    let g = grid(vec![
        vec![Right, Right, Down],
        vec![Up, Up, Down],
        vec![Up, Up, Right],
    ]);
    let s = trace(&g, p(0, 0)).unwrap();
    assert_eq!(s.path(), &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    assert_eq!(s.stop_reason(), StopReason::ExitedBoundary);
    assert_eq!(s.end(), p(2, 2));
    assert_eq!(s.end_direction(), Right);
}

#[test]
fn loop_into_middle_of_path() {
    // Two-cell tail feeding a 2-cycle.
    let g = grid(vec![
        vec![Right, Down, Up],
        vec![Up, Right, Left],
        vec![Up, Up, Up],
    ]);
    let s = trace(&g, p(0, 0)).unwrap();
    assert_eq!(s.path(), &[p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(1, 1)]);
    assert_eq!(s.stop_reason(), StopReason::Looped);
    assert_eq!(s.end(), p(1, 1));
}

#[test]
fn explicit_cap_reports_step_limit() {
    let g = grid(vec![vec![Right, Down], vec![Up, Left]]);
    let s = trace_with_limit(&g, p(0, 0), 2).unwrap();
    assert_eq!(s.path(), &[p(0, 0), p(0, 1), p(1, 1)]);
    assert_eq!(s.stop_reason(), StopReason::StepLimitReached);
    assert_eq!(s.end(), p(1, 1));

    let s = trace_with_limit(&g, p(0, 0), 0).unwrap();
    assert_eq!(s.path(), &[p(0, 0)]);
    assert_eq!(s.stop_reason(), StopReason::StepLimitReached);
}

#[test]
fn start_outside_grid_is_rejected() {
    let g = grid(vec![vec![Right, Down], vec![Up, Left]]);
    assert!(matches!(trace(&g, p(2, 0)), Err(MazeError::Config(_))));
}

#[test]
fn random_grids_terminate_with_path_invariants() {
    let mut rng = Pcg64::seed_from_u64(0xA11_0E);
    for _ in 0..500 {
        let (g, start) = generate(&mut rng, 1, 6).unwrap();
        let n = g.size();
        let s = trace(&g, start).unwrap();
        let path = s.path();

        assert!(!path.is_empty() && path.len() <= n * n + 1);
        assert_eq!(path[0], start);
        assert!(path.iter().all(|&q| g.contains(q)));
        // A finite functional graph always exits or cycles before the cap.
        assert_ne!(s.stop_reason(), StopReason::StepLimitReached);

        for w in path.windows(2) {
            let dir = g.get(w[0]).unwrap();
            assert_eq!(w[0].step(dir, n), Some(w[1]));
        }

        let body = match s.stop_reason() {
            StopReason::Looped => {
                let last = *path.last().unwrap();
                assert!(path[..path.len() - 1].contains(&last));
                &path[..path.len() - 1]
            }
            _ => {
                let last = *path.last().unwrap();
                assert_eq!(last.step(g.get(last).unwrap(), n), None);
                path
            }
        };
        let unique: HashSet<_> = body.iter().collect();
        assert_eq!(unique.len(), body.len());
    }
}

#[test]
fn tracing_is_deterministic() {
    let (g, start) = generate(&mut Pcg64::seed_from_u64(99), 6, 6).unwrap();
    let a = trace(&g, start).unwrap();
    let b = trace(&g, start).unwrap();
    assert_eq!(a, b);
}

#[test]
fn stop_reason_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&StopReason::StepLimitReached).unwrap(),
        "\"step_limit_reached\""
    );
    assert_eq!(StopReason::ExitedBoundary.to_string(), "exited_boundary");
}
