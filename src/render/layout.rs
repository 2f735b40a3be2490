use crate::config::RenderConfig;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{MazeError, MazeResult};
use crate::maze::grid::Position;

/// Axis-aligned pixel box with inclusive bounds: covers `x0..=x1` by `y0..=y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBox {
    /// Left column.
    pub x0: i64,
    /// Top row.
    pub y0: i64,
    /// Right column (inclusive).
    pub x1: i64,
    /// Bottom row (inclusive).
    pub y1: i64,
}

impl PixelBox {
    /// Build a box from inclusive bounds.
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// `false` when the bounds cross (nothing to paint).
    pub fn is_valid(self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    /// Continuous rectangle covering exactly these pixels.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x0 as f64,
            self.y0 as f64,
            (self.x1 + 1) as f64,
            (self.y1 + 1) as f64,
        )
    }

    /// Whether pixel `(x, y)` is covered.
    #[cfg(test)]
    pub(crate) fn contains(self, x: i64, y: i64) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

/// Integer grid geometry for one canvas and grid size.
///
/// `cell = (min(w, h) - 2 * margin) / n`, and the grid is centered using integer halves of the
/// leftover space. Every coordinate here is an exact integer so frames are bit-reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Grid dimension `N`.
    pub grid_size: usize,
    /// Cell edge in pixels.
    pub cell: i64,
    /// Left edge of the grid.
    pub origin_x: i64,
    /// Top edge of the grid.
    pub origin_y: i64,
}

impl GridLayout {
    /// Lay out an `n`×`n` grid on the configured canvas.
    pub fn new(cfg: &RenderConfig, grid_size: usize) -> MazeResult<Self> {
        if grid_size == 0 {
            return Err(MazeError::render("grid size must be >= 1"));
        }
        let width = i64::from(cfg.canvas.width);
        let height = i64::from(cfg.canvas.height);
        let available = width.min(height) - 2 * i64::from(cfg.margin);
        let n = grid_size as i64;
        let cell = if available > 0 { available / n } else { 0 };
        if cell <= 0 {
            return Err(MazeError::render(format!(
                "canvas {}x{} with margin {} is too small for a {n}x{n} grid",
                cfg.canvas.width, cfg.canvas.height, cfg.margin
            )));
        }
        Ok(Self {
            grid_size,
            cell,
            origin_x: (width - n * cell) / 2,
            origin_y: (height - n * cell) / 2,
        })
    }

    /// Full grid extent `N * cell`.
    pub fn extent(&self) -> i64 {
        self.grid_size as i64 * self.cell
    }

    /// Integer center pixel of a cell.
    pub fn cell_center(&self, pos: Position) -> (i64, i64) {
        let half = self.cell / 2;
        (
            self.origin_x + pos.col as i64 * self.cell + half,
            self.origin_y + pos.row as i64 * self.cell + half,
        )
    }

    /// Continuous center of the cell's center pixel.
    pub fn cell_center_point(&self, pos: Position) -> Point {
        let (cx, cy) = self.cell_center(pos);
        Point::new(cx as f64 + 0.5, cy as f64 + 0.5)
    }

    /// Box around the cell center, `inset` pixels inside the nominal half-cell on every side.
    pub fn cell_box(&self, pos: Position, inset: i64) -> PixelBox {
        let (cx, cy) = self.cell_center(pos);
        let half = self.cell / 2;
        PixelBox::new(
            cx - half + inset,
            cy - half + inset,
            cx + half - inset,
            cy + half - inset,
        )
    }

    /// Pixel positions of the `N + 1` grid lines along one axis, starting at `origin`.
    pub fn line_offsets(&self, origin: i64) -> impl Iterator<Item = i64> + '_ {
        (0..=self.grid_size as i64).map(move |i| origin + i * self.cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
