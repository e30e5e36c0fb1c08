pub mod hit_testing;
pub mod path;
pub mod stroke_outline;
pub mod transform;

pub use hit_testing::{MIN_TAP_WIDTH, region_contains};
pub use path::{DashPattern, FLATTEN_TOLERANCE, LineCap, LineJoin, Path, PathCmd, StrokeStyle};
pub use stroke_outline::stroke_outline;
pub use transform::Transform;

use egui::{Rect, pos2};

/// Returns `rect` with non-negative width and height, enclosing the same area.
/// A rect built from arbitrary corners may have negative extents; geometry
/// math assumes it has been normalized first.
pub fn normalized(rect: Rect) -> Rect {
    Rect::from_two_pos(rect.min, rect.max)
}

/// Shrinks (positive `dx`/`dy`) or grows (negative) `rect` symmetrically on
/// each axis.
pub fn inset(rect: Rect, dx: f32, dy: f32) -> Rect {
    Rect::from_min_max(
        pos2(rect.min.x + dx, rect.min.y + dy),
        pos2(rect.max.x - dx, rect.max.y - dy),
    )
}
