use egui::{Rect, pos2, vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shape_board::ShapeBoardError;
use shape_board::shape::{MIN_SHAPE_SIZE, PALETTE, random_shape_in_bounds};

#[test]
fn test_generated_shapes_satisfy_the_factory_contract() {
    let mut rng = StdRng::seed_from_u64(7);
    let max_bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));

    for _ in 0..200 {
        let shape = random_shape_in_bounds(&mut rng, max_bounds).unwrap();

        // Whole-unit line width in 1..=16.
        let width = shape.line_width();
        assert!((1.0..=16.0).contains(&width), "line width {width}");
        assert_eq!(width.fract(), 0.0);

        // Color drawn from the fixed palette.
        assert!(PALETTE.contains(&shape.line_color()));

        // The sub-rect spans the full horizontal range of the path for every
        // kind, so the x extent must respect the requested bounds and the
        // minimum size. (The spiral kind may poke past the sub-rect
        // vertically when its radius exceeds half the sub-rect height.)
        let bounds = shape.path().fill_bounds();
        assert!(bounds.min.x >= max_bounds.min.x - 0.5);
        assert!(bounds.max.x <= max_bounds.max.x + 0.5);
        assert!(bounds.width() >= MIN_SHAPE_SIZE - 0.6, "width {}", bounds.width());
        assert!(bounds.height() >= MIN_SHAPE_SIZE - 0.6, "height {}", bounds.height());
    }
}

#[test]
fn test_same_seed_generates_the_same_shapes() {
    let max_bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let a = random_shape_in_bounds(&mut rng_a, max_bounds).unwrap();
        let b = random_shape_in_bounds(&mut rng_b, max_bounds).unwrap();
        assert_eq!(a.path(), b.path());
        assert_eq!(a.line_color(), b.line_color());
    }
}

#[test]
fn test_unnormalized_bounds_are_accepted() {
    let mut rng = StdRng::seed_from_u64(3);
    let flipped = Rect::from_min_max(pos2(400.0, 300.0), pos2(0.0, 0.0));
    let shape = random_shape_in_bounds(&mut rng, flipped).unwrap();
    let bounds = shape.path().fill_bounds();
    assert!(bounds.min.x >= -0.5 && bounds.max.x <= 400.5);
}

#[test]
fn test_too_small_bounds_fail_fast() {
    let mut rng = StdRng::seed_from_u64(1);
    let tiny = Rect::from_min_size(pos2(0.0, 0.0), vec2(40.0, 40.0));
    match random_shape_in_bounds(&mut rng, tiny) {
        Err(ShapeBoardError::InvalidBounds { min, .. }) => assert_eq!(min, MIN_SHAPE_SIZE),
        other => panic!("expected InvalidBounds, got {other:?}"),
    }
}

#[test]
fn test_tap_target_is_precomputed_and_tappable() {
    let mut rng = StdRng::seed_from_u64(11);
    let max_bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));

    for _ in 0..50 {
        let shape = random_shape_in_bounds(&mut rng, max_bounds).unwrap();
        assert!(!shape.tap_target().is_empty());

        // The midpoint of the first drawn segment lies on the centerline and
        // must be tappable, whatever the kind.
        let contours = shape.path().flatten(0.25);
        let first = &contours[0];
        let mid = first[0] + (first[1] - first[0]) * 0.5;
        assert!(shape.contains_point(mid));
    }
}
