use super::*;
use crate::foundation::core::Canvas;

fn cfg(width: u32, height: u32, margin: u32) -> RenderConfig {
    RenderConfig {
        canvas: Canvas { width, height },
        margin,
        ..RenderConfig::default()
    }
}

#[test]
fn default_canvas_layouts_match_reference_numbers() {
    let c = cfg(512, 512, 50);

    let l4 = GridLayout::new(&c, 4).unwrap();
    assert_eq!((l4.cell, l4.origin_x, l4.origin_y), (103, 50, 50));

    let l5 = GridLayout::new(&c, 5).unwrap();
    assert_eq!((l5.cell, l5.origin_x, l5.origin_y), (82, 51, 51));

    let l6 = GridLayout::new(&c, 6).unwrap();
    assert_eq!((l6.cell, l6.origin_x, l6.origin_y), (68, 52, 52));
    assert_eq!(l6.extent(), 408);
}

#[test]
fn non_square_canvas_centers_on_both_axes() {
    let l = GridLayout::new(&cfg(640, 480, 40), 4).unwrap();
    assert_eq!(l.cell, 100);
    assert_eq!((l.origin_x, l.origin_y), (120, 40));
}

#[test]
fn cell_geometry_uses_integer_halves() {
    let l = GridLayout::new(&cfg(512, 512, 50), 4).unwrap();
    assert_eq!(l.cell_center(Position::new(0, 0)), (101, 101));
    assert_eq!(l.cell_center(Position::new(1, 2)), (50 + 206 + 51, 50 + 103 + 51));

    let b = l.cell_box(Position::new(0, 0), 2);
    assert_eq!(b, PixelBox::new(52, 52, 150, 150));
    assert_eq!(b.to_rect(), Rect::new(52.0, 52.0, 151.0, 151.0));
    assert!(b.contains(52, 150) && !b.contains(151, 100));

    let offsets: Vec<_> = l.line_offsets(l.origin_x).collect();
    assert_eq!(offsets, vec![50, 153, 256, 359, 462]);
}

#[test]
fn too_small_canvas_is_a_render_error() {
    assert!(matches!(
        GridLayout::new(&cfg(100, 100, 50), 4),
        Err(MazeError::Render(_))
    ));
    assert!(matches!(
        GridLayout::new(&cfg(80, 80, 50), 1),
        Err(MazeError::Render(_))
    ));
    assert!(GridLayout::new(&cfg(105, 105, 50), 5).is_ok());
    assert!(GridLayout::new(&cfg(104, 104, 50), 5).is_err());
    assert!(GridLayout::new(&cfg(512, 512, 50), 0).is_err());
}

#[test]
fn crossed_boxes_are_invalid() {
    assert!(PixelBox::new(0, 0, 0, 0).is_valid());
    assert!(!PixelBox::new(3, 0, 2, 5).is_valid());
}
