use crate::maze::grid::Position;
use crate::maze::trace::PuzzleState;

/// Snapshot of what one frame shows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderSpec {
    /// Cell the marker sits on, if any.
    pub marker: Option<Position>,
    /// Cells painted with the visited fill.
    pub visited: Vec<Position>,
    /// Whether to outline the end cell.
    pub highlight_destination: bool,
}

impl RenderSpec {
    /// Marker at the start, nothing highlighted.
    pub fn initial(state: &PuzzleState) -> Self {
        Self {
            marker: Some(state.start()),
            visited: Vec::new(),
            highlight_destination: false,
        }
    }

    /// Marker on `path[index]` with `path[..=index]` visited; the last index also outlines the
    /// destination. `index` is clamped to the path.
    pub fn step(state: &PuzzleState, index: usize) -> Self {
        let path = state.path();
        let last = path.len().saturating_sub(1);
        let i = index.min(last);
        Self {
            marker: path.get(i).copied(),
            visited: path[..=i].to_vec(),
            highlight_destination: i == last,
        }
    }

    /// Marker at the end, whole path visited, destination outlined.
    pub fn final_state(state: &PuzzleState) -> Self {
        Self {
            marker: Some(state.end()),
            visited: state.path().to_vec(),
            highlight_destination: true,
        }
    }

    /// Grid and background only.
    #[cfg(test)]
    pub(crate) fn blank() -> Self {
        Self {
            marker: None,
            visited: Vec::new(),
            highlight_destination: false,
        }
    }
}
