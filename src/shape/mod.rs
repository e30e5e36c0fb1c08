use egui::{Color32, Pos2, Rect, Vec2};

pub mod factory;

pub use factory::{MAX_LINE_WIDTH, MIN_SHAPE_SIZE, PALETTE, ShapeKind, random_shape_in_bounds};

use crate::error::ShapeBoardError;
use crate::geometry::{self, MIN_TAP_WIDTH, Path};
use crate::id_generator;

/// A single drawable shape: a stroked path, its line color, and the
/// precomputed region used for tap hit testing.
#[derive(Debug, Clone)]
pub struct Shape {
    id: usize,
    path: Path,
    line_color: Color32,
    // Stroke outline of `path` widened to at least MIN_TAP_WIDTH. Translated
    // alongside `path` on every move, never recomputed from scratch.
    tap_target: Path,
}

impl Shape {
    /// Wraps a path and precomputes its tap target. Rejects degenerate
    /// stroke widths, which the factory can never produce but direct
    /// construction could.
    pub fn new(path: Path, line_color: Color32) -> Result<Self, ShapeBoardError> {
        let style = path.style().clone();
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(ShapeBoardError::DegenerateGeometry { width: style.width });
        }
        let tap_target = geometry::stroke_outline(
            &path,
            style.width.max(MIN_TAP_WIDTH),
            style.cap,
            style.join,
            style.miter_limit,
        );
        Ok(Self {
            id: id_generator::next_shape_id(),
            path,
            line_color,
            tap_target,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_color(&self) -> Color32 {
        self.line_color
    }

    pub fn line_width(&self) -> f32 {
        self.path.style().width
    }

    pub fn tap_target(&self) -> &Path {
        &self.tap_target
    }

    /// Stroke-inflated bounds: the rect a renderer must repaint to show or
    /// clear this shape.
    pub fn total_bounds(&self) -> Rect {
        self.path.stroke_bounds()
    }

    /// Translates the path and its tap target by the same vector.
    pub fn move_by(&mut self, delta: Vec2) {
        self.path.translate(delta);
        self.tap_target.translate(delta);
    }

    /// True when `point` falls on the stroked outline, widened to the
    /// minimum tappable width.
    pub fn contains_point(&self, point: Pos2) -> bool {
        geometry::region_contains(&self.tap_target, point)
    }
}
