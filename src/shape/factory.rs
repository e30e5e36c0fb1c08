use std::f32::consts::{PI, TAU};

use egui::{Color32, Rect, pos2, vec2};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Shape;
use crate::error::ShapeBoardError;
use crate::geometry::{self, FLATTEN_TOLERANCE, LineJoin, Path, StrokeStyle, Transform};

/// Smallest generated sub-rect extent, so every shape stays visible and
/// tappable.
pub const MIN_SHAPE_SIZE: f32 = 44.0;

/// Generated line widths are whole units in `1..=MAX_LINE_WIDTH`.
pub const MAX_LINE_WIDTH: u32 = 16;

/// The kinds of shape the factory can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    House,
    Arc,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rect,
        ShapeKind::Ellipse,
        ShapeKind::House,
        ShapeKind::Arc,
    ];
}

/// Fixed palette for generated shapes.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0, 0, 255),    // blue
    Color32::from_rgb(255, 0, 0),    // red
    Color32::from_rgb(0, 255, 0),    // green
    Color32::from_rgb(255, 255, 0),  // yellow
    Color32::from_rgb(255, 0, 255),  // magenta
    Color32::from_rgb(153, 102, 51), // brown
    Color32::from_rgb(128, 0, 128),  // purple
    Color32::from_rgb(255, 128, 0),  // orange
];

/// Generates a random shape inside `max_bounds`: a random minimum-44x44
/// sub-rect, a random kind, a random whole-unit line width in
/// `1..=MAX_LINE_WIDTH`, and a random palette color.
///
/// The random source is injected so callers (and tests) control determinism.
pub fn random_shape_in_bounds(
    rng: &mut impl Rng,
    max_bounds: Rect,
) -> Result<Shape, ShapeBoardError> {
    let bounds = random_rect_in_bounds(rng, max_bounds)?;
    let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
    let mut path = match kind {
        ShapeKind::Rect => rect_path(bounds),
        ShapeKind::Ellipse => ellipse_path(bounds),
        ShapeKind::House => house_path(bounds),
        ShapeKind::Arc => arc_path(bounds),
    };
    path.style_mut().width = rng.random_range(1..=MAX_LINE_WIDTH) as f32;
    let color = PALETTE[rng.random_range(0..PALETTE.len())];

    debug!(
        "generated {kind:?} in {bounds:?}, line width {}",
        path.style().width
    );
    Shape::new(path, color)
}

/// Random normalized sub-rect of `max_bounds` with extents of at least
/// `MIN_SHAPE_SIZE`. Origin and size are each drawn uniformly from the
/// feasible whole-unit range.
fn random_rect_in_bounds(rng: &mut impl Rng, max_bounds: Rect) -> Result<Rect, ShapeBoardError> {
    let bounds = geometry::normalized(max_bounds);
    if bounds.width() < MIN_SHAPE_SIZE || bounds.height() < MIN_SHAPE_SIZE {
        return Err(ShapeBoardError::InvalidBounds {
            bounds,
            min: MIN_SHAPE_SIZE,
        });
    }

    let origin_x = random_unit_offset(rng, bounds.min.x, bounds.max.x - MIN_SHAPE_SIZE);
    let origin_y = random_unit_offset(rng, bounds.min.y, bounds.max.y - MIN_SHAPE_SIZE);
    let width = random_unit_offset(rng, MIN_SHAPE_SIZE, bounds.max.x - origin_x);
    let height = random_unit_offset(rng, MIN_SHAPE_SIZE, bounds.max.y - origin_y);
    Ok(Rect::from_min_size(
        pos2(origin_x, origin_y),
        vec2(width, height),
    ))
}

/// Uniform draw of `lo` plus a whole-unit offset, never exceeding `hi`.
fn random_unit_offset(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    let span = (hi - lo).floor().max(0.0) as i64;
    lo + rng.random_range(0..=span) as f32
}

fn rect_path(bounds: Rect) -> Path {
    let mut path = Path::new(StrokeStyle::default());
    path.move_to(bounds.min);
    path.line_to(pos2(bounds.max.x, bounds.min.y));
    path.line_to(bounds.max);
    path.line_to(pos2(bounds.min.x, bounds.max.y));
    path.line_to(bounds.min);
    path
}

/// Inscribed ellipse, emitted as a closed polyline at the flattening
/// tolerance (the command set carries polylines and circular arcs only).
fn ellipse_path(bounds: Rect) -> Path {
    let center = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let r = rx.max(ry);
    let max_step = if FLATTEN_TOLERANCE >= r {
        PI
    } else {
        2.0 * (1.0 - FLATTEN_TOLERANCE / r).acos()
    };
    let segments = ((TAU / max_step).ceil() as usize).max(8);

    let mut path = Path::new(StrokeStyle::default());
    for i in 0..=segments {
        let angle = TAU * (i % segments) as f32 / segments as f32;
        let p = pos2(center.x + rx * angle.cos(), center.y + ry * angle.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// The one-stroke house: both walls, the crossed diagonals, the roof and the
/// floor in a single run, traced in the exact vertex order the outline is
/// drawn with. Built in a Y-up frame (roof tip at max y), then mirrored into
/// canvas orientation.
fn house_path(bounds: Rect) -> Path {
    let wall_top = bounds.min.y + bounds.height() * 2.0 / 3.0;
    let bottom_left = bounds.min;
    let bottom_right = pos2(bounds.max.x, bounds.min.y);
    let top_left = pos2(bounds.min.x, wall_top);
    let top_right = pos2(bounds.max.x, wall_top);
    let roof_tip = pos2(bounds.center().x, bounds.max.y);

    let mut path = Path::new(StrokeStyle {
        join: LineJoin::Round,
        ..Default::default()
    });
    path.move_to(bottom_left);
    for p in [
        top_left,
        roof_tip,
        top_right,
        top_left,
        bottom_right,
        top_right,
        bottom_left,
        bottom_right,
    ] {
        path.line_to(p);
    }
    path.transformed(&Transform::flip_vertical_in(bounds))
}

/// Spiral outline: a 270-degree arc of radius width/2 about the sub-rect
/// center, continuing 270 degrees around a half-radius circle offset toward
/// the roofline. Built in a Y-up frame and mirrored, which also flips the
/// sweep direction.
fn arc_path(bounds: Rect) -> Path {
    let center = bounds.center();
    let radius = bounds.width() / 2.0;
    let inner_center = pos2(center.x, center.y - radius / 2.0);

    let mut path = Path::new(StrokeStyle {
        join: LineJoin::Round,
        ..Default::default()
    });
    path.move_to(pos2(bounds.max.x, center.y));
    path.arc(center, radius, 0.0, 1.5 * PI, false);
    path.arc(inner_center, radius / 2.0, 1.5 * PI, PI, false);
    path.transformed(&Transform::flip_vertical_in(bounds))
}
