use egui::{Color32, Pos2, Vec2, pos2, vec2};
use shape_board::geometry::{Path, StrokeStyle};
use shape_board::{Shape, ShapeBoardError};

fn rect_shape(min: Pos2, size: Vec2, width: f32) -> Shape {
    let mut path = Path::new(StrokeStyle {
        width,
        ..Default::default()
    });
    path.move_to(min);
    path.line_to(pos2(min.x + size.x, min.y));
    path.line_to(pos2(min.x + size.x, min.y + size.y));
    path.line_to(pos2(min.x, min.y + size.y));
    path.line_to(min);
    Shape::new(path, Color32::RED).unwrap()
}

#[test]
fn test_total_bounds_inflate_by_half_width_plus_one() {
    let shape = rect_shape(pos2(0.0, 0.0), vec2(100.0, 50.0), 4.0);
    let bounds = shape.total_bounds();
    assert_eq!(bounds.min, pos2(-3.0, -3.0));
    assert_eq!(bounds.max, pos2(103.0, 53.0));
}

#[test]
fn test_degenerate_width_is_rejected() {
    let mut path = Path::new(StrokeStyle {
        width: 0.0,
        ..Default::default()
    });
    path.move_to(pos2(0.0, 0.0));
    path.line_to(pos2(10.0, 0.0));

    match Shape::new(path, Color32::RED) {
        Err(ShapeBoardError::DegenerateGeometry { width }) => assert_eq!(width, 0.0),
        other => panic!("expected DegenerateGeometry, got {other:?}"),
    }
}

#[test]
fn test_thin_strokes_keep_the_minimum_tap_width() {
    // Visual width 2, tap target still 35 wide: points up to 17.5 off the
    // outline register.
    let shape = rect_shape(pos2(0.0, 0.0), vec2(100.0, 100.0), 2.0);
    assert!(shape.contains_point(pos2(50.0, 0.0)));
    assert!(shape.contains_point(pos2(50.0, 17.0)));
    assert!(shape.contains_point(pos2(50.0, -17.0)));
    assert!(!shape.contains_point(pos2(50.0, 19.0)));
    // The interior is not tappable; only the outline band is.
    assert!(!shape.contains_point(pos2(50.0, 50.0)));
}

#[test]
fn test_wide_strokes_use_their_own_width() {
    let shape = rect_shape(pos2(0.0, 0.0), vec2(200.0, 200.0), 40.0);
    assert!(shape.contains_point(pos2(100.0, 19.0)));
    assert!(!shape.contains_point(pos2(100.0, 21.0)));
}

#[test]
fn test_move_by_translates_path_and_tap_target_together() {
    let mut shape = rect_shape(pos2(0.0, 0.0), vec2(100.0, 100.0), 2.0);
    shape.move_by(vec2(200.0, 0.0));

    assert_eq!(shape.total_bounds().min, pos2(198.0, -2.0));
    assert!(shape.contains_point(pos2(250.0, 5.0)));
    assert!(!shape.contains_point(pos2(50.0, 5.0)));
}

#[test]
fn test_move_roundtrip_restores_bounds() {
    let mut shape = rect_shape(pos2(10.0, 10.0), vec2(80.0, 40.0), 3.0);
    let bounds = shape.total_bounds();
    let tap_bounds = shape.tap_target().fill_bounds();

    shape.move_by(vec2(12.5, -7.25));
    shape.move_by(vec2(-12.5, 7.25));

    let after = shape.total_bounds();
    assert!((after.min.x - bounds.min.x).abs() < 1e-3);
    assert!((after.min.y - bounds.min.y).abs() < 1e-3);
    assert!((after.max.x - bounds.max.x).abs() < 1e-3);
    assert!((after.max.y - bounds.max.y).abs() < 1e-3);

    let tap_after = shape.tap_target().fill_bounds();
    assert!((tap_after.min.x - tap_bounds.min.x).abs() < 1e-3);
    assert!((tap_after.max.y - tap_bounds.max.y).abs() < 1e-3);
}
