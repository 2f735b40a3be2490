//! Ordered draw layers of a maze frame.
//!
//! Each layer is a pure draw function over a shared `vello_cpu` context. Base layers paint
//! straight onto the frame; overlay layers are rasterized on their own transparent surface and
//! composited over everything painted before them.

use kurbo::Shape;

use crate::config::RenderConfig;
use crate::foundation::color::Rgb8;
use crate::foundation::core::{BezPath, Point, Rect};
use crate::maze::grid::Direction;
use crate::maze::trace::PuzzleState;
use crate::render::layout::{GridLayout, PixelBox};
use crate::render::spec::RenderSpec;

/// Inset of the visited fill from the cell's nominal half-size.
const VISITED_INSET: i64 = 2;
/// Inset of the destination outline from the cell's nominal half-size.
const DESTINATION_INSET: i64 = 1;
/// Marker outline color (straight RGBA).
const MARKER_OUTLINE: [u8; 4] = [0, 0, 0, 200];
const MARKER_OUTLINE_WIDTH: f64 = 1.0;
const CURVE_TOLERANCE: f64 = 0.05;

/// One drawing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Canvas fill.
    Background,
    /// Fill of visited cells.
    Visited,
    /// Outline around the end cell.
    Destination,
    /// Grid lines.
    GridLines,
    /// Arrow glyph in every cell.
    Arrows,
    /// Semi-transparent marker disc.
    Marker,
}

/// Where a layer is rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerTarget {
    /// Directly onto the frame being built.
    Base,
    /// On a separate transparent surface, then composited over the frame.
    Overlay,
}

impl Layer {
    /// Fixed paint order; later layers cover earlier ones.
    pub const DRAW_ORDER: [Layer; 6] = [
        Layer::Background,
        Layer::Visited,
        Layer::Destination,
        Layer::GridLines,
        Layer::Arrows,
        Layer::Marker,
    ];

    /// Surface this layer is rasterized on.
    pub fn target(self) -> LayerTarget {
        match self {
            Layer::Marker => LayerTarget::Overlay,
            _ => LayerTarget::Base,
        }
    }

    pub(crate) fn draw(self, scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
        match self {
            Layer::Background => draw_background(scene, ctx),
            Layer::Visited => draw_visited(scene, ctx),
            Layer::Destination => draw_destination(scene, ctx),
            Layer::GridLines => draw_grid_lines(scene, ctx),
            Layer::Arrows => draw_arrows(scene, ctx),
            Layer::Marker => draw_marker(scene, ctx),
        }
    }
}

/// Everything a layer reads. Layers never mutate it.
pub(crate) struct Scene<'a> {
    pub(crate) cfg: &'a RenderConfig,
    pub(crate) layout: GridLayout,
    pub(crate) state: &'a PuzzleState,
    pub(crate) spec: &'a RenderSpec,
}

fn draw_background(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    let canvas = scene.cfg.canvas;
    set_color(ctx, scene.cfg.background, 255);
    ctx.fill_rect(&rect_to_cpu(Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    )));
}

fn draw_visited(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    set_color(ctx, scene.cfg.visited_color, 255);
    for &pos in &scene.spec.visited {
        fill_box(ctx, scene.layout.cell_box(pos, VISITED_INSET));
    }
}

fn draw_destination(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    if !scene.spec.highlight_destination {
        return;
    }
    let outer = scene.layout.cell_box(scene.state.end(), DESTINATION_INSET);
    set_color(ctx, scene.cfg.destination_color, 255);
    for band in outline_bands(outer, i64::from(scene.cfg.destination_outline_width)) {
        fill_box(ctx, band);
    }
}

fn draw_grid_lines(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    let layout = &scene.layout;
    let w = i64::from(scene.cfg.grid_line_width);
    let lo = w / 2;
    let hi = w - 1 - lo;
    let (x_start, y_start) = (layout.origin_x, layout.origin_y);
    let (x_end, y_end) = (x_start + layout.extent(), y_start + layout.extent());

    set_color(ctx, scene.cfg.grid_color, 255);
    for x in layout.line_offsets(x_start) {
        fill_box(ctx, PixelBox::new(x - lo, y_start, x + hi, y_end));
    }
    for y in layout.line_offsets(y_start) {
        fill_box(ctx, PixelBox::new(x_start, y - lo, x_end, y + hi));
    }
}

fn draw_arrows(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    let size = scene.layout.cell / 2;
    set_color(ctx, scene.cfg.arrow_color, 255);
    for (pos, dir) in scene.state.grid().cells() {
        let glyph = ArrowGlyph::new(scene.layout.cell_center(pos), dir, size);
        if glyph.shaft.is_valid() {
            fill_box(ctx, glyph.shaft);
        }
        ctx.fill_path(&bezpath_to_cpu(&glyph.head_path()));
    }
}

fn draw_marker(scene: &Scene<'_>, ctx: &mut vello_cpu::RenderContext) {
    let Some(pos) = scene.spec.marker else {
        return;
    };
    let center = scene.layout.cell_center_point(pos);
    let outer = f64::from(scene.cfg.marker_radius) + 0.5;
    let inner = (outer - MARKER_OUTLINE_WIDTH).max(0.0);

    set_color(ctx, scene.cfg.marker_color, scene.cfg.marker_opacity);
    let disc = kurbo::Circle::new(center, inner);
    ctx.fill_path(&bezpath_to_cpu(&disc.to_path(CURVE_TOLERANCE)));

    let [r, g, b, a] = MARKER_OUTLINE;
    set_color(ctx, Rgb8::new(r, g, b), a);
    let ring = kurbo::CircleSegment::new(center, outer, inner, 0.0, std::f64::consts::TAU);
    ctx.fill_path(&bezpath_to_cpu(&ring.to_path(CURVE_TOLERANCE)));
}

/// Shaft rectangle plus triangular head, in integer pixel coordinates.
///
/// For a glyph of `size`: half-length `size / 2`, shaft half-width `size / 6`, head length and
/// half-width `size / 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ArrowGlyph {
    pub(crate) shaft: PixelBox,
    pub(crate) head: [(i64, i64); 3],
}

impl ArrowGlyph {
    pub(crate) fn new((cx, cy): (i64, i64), dir: Direction, size: i64) -> Self {
        let half = size / 2;
        let shaft = size / 6;
        let head = size / 3;
        match dir {
            Direction::Up => Self {
                shaft: PixelBox::new(cx - shaft, cy - half + head, cx + shaft, cy + half),
                head: [
                    (cx, cy - half),
                    (cx - head, cy - half + head),
                    (cx + head, cy - half + head),
                ],
            },
            Direction::Down => Self {
                shaft: PixelBox::new(cx - shaft, cy - half, cx + shaft, cy + half - head),
                head: [
                    (cx, cy + half),
                    (cx - head, cy + half - head),
                    (cx + head, cy + half - head),
                ],
            },
            Direction::Left => Self {
                shaft: PixelBox::new(cx - half + head, cy - shaft, cx + half, cy + shaft),
                head: [
                    (cx - half, cy),
                    (cx - half + head, cy - head),
                    (cx - half + head, cy + head),
                ],
            },
            Direction::Right => Self {
                shaft: PixelBox::new(cx - half, cy - shaft, cx + half - head, cy + shaft),
                head: [
                    (cx + half, cy),
                    (cx + half - head, cy - head),
                    (cx + half - head, cy + head),
                ],
            },
        }
    }

    /// Head triangle through the centers of its corner pixels.
    pub(crate) fn head_path(&self) -> BezPath {
        let mut p = BezPath::new();
        let [a, b, c] = self.head.map(|(x, y)| Point::new(x as f64 + 0.5, y as f64 + 0.5));
        p.move_to(a);
        p.line_to(b);
        p.line_to(c);
        p.close_path();
        p
    }
}

/// Four non-overlapping bands tracing the inside of `outer`, `width` pixels thick.
pub(crate) fn outline_bands(outer: PixelBox, width: i64) -> Vec<PixelBox> {
    if !outer.is_valid() || width <= 0 {
        return Vec::new();
    }
    let PixelBox { x0, y0, x1, y1 } = outer;
    if 2 * width >= x1 - x0 + 1 || 2 * width >= y1 - y0 + 1 {
        return vec![outer];
    }
    let w = width;
    [
        PixelBox::new(x0, y0, x1, y0 + w - 1),
        PixelBox::new(x0, y1 - w + 1, x1, y1),
        PixelBox::new(x0, y0 + w, x0 + w - 1, y1 - w),
        PixelBox::new(x1 - w + 1, y0 + w, x1, y1 - w),
    ]
    .into_iter()
    .filter(|b| b.is_valid())
    .collect()
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8, alpha: u8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, alpha));
}

fn fill_box(ctx: &mut vello_cpu::RenderContext, b: PixelBox) {
    if b.is_valid() {
        ctx.fill_rect(&rect_to_cpu(b.to_rect()));
    }
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
