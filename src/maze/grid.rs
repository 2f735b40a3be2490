use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{MazeError, MazeResult};

/// Arrow direction stored in a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in the order random draws index into.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement as `(d_col, d_row)`.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Arrow symbol.
    pub fn glyph(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 0-based `(row, col)` cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Build a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbor in `dir`, or `None` when it would leave a `size`×`size` grid.
    pub fn step(self, dir: Direction, size: usize) -> Option<Position> {
        let (dc, dr) = dir.delta();
        let col = self.col as i64 + dc;
        let row = self.row as i64 + dr;
        let n = size as i64;
        if !(0..n).contains(&row) || !(0..n).contains(&col) {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square matrix of arrow directions, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Direction>,
}

impl Grid {
    /// Build a grid from explicit rows. Rows must form a non-empty square.
    pub fn from_rows(rows: Vec<Vec<Direction>>) -> MazeResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(MazeError::config("grid must have at least one row"));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MazeError::config(format!(
                "grid must be square: row {i} has {} cells, expected {size}",
                row.len()
            )));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Grid dimension `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Direction stored at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<Direction> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.size + pos.col).copied()
    }

    /// Iterate cells in row-major order with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Direction)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &d)| (Position::new(i / n, i % n), d))
    }

    /// Rows of directions.
    pub fn rows(&self) -> impl Iterator<Item = &[Direction]> + '_ {
        self.cells.chunks_exact(self.size)
    }
}

/// Draw a random grid and start position.
///
/// The size is uniform in `[min_size, max_size]`, every cell direction is drawn independently and
/// uniformly, and the start is uniform over the grid (column first, then row).
pub fn generate(
    rng: &mut impl Rng,
    min_size: usize,
    max_size: usize,
) -> MazeResult<(Grid, Position)> {
    if min_size == 0 {
        return Err(MazeError::config("min grid size must be >= 1"));
    }
    if max_size < min_size {
        return Err(MazeError::config(format!(
            "max grid size ({max_size}) must be >= min grid size ({min_size})"
        )));
    }

    let size = rng.random_range(min_size..=max_size);
    let cells = (0..size * size)
        .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
        .collect();
    let col = rng.random_range(0..size);
    let row = rng.random_range(0..size);

    Ok((Grid { size, cells }, Position::new(row, col)))
}

#[cfg(test)]
#[path = "../../tests/unit/maze/grid.rs"]
mod tests;
