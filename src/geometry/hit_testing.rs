use egui::Pos2;

use super::path::{FLATTEN_TOLERANCE, Path};

/// Minimum width of a shape's tap target. Thin strokes are widened to this
/// before hit testing so they stay comfortably tappable.
pub const MIN_TAP_WIDTH: f32 = 35.0;

/// Point-in-region test for a path of closed contours, using the nonzero
/// winding rule.
///
/// Nonzero winding is the policy for all containment in this crate, for fill
/// and tap-target testing alike: the stroke-outline expansion emits every
/// contour counterclockwise, so overlapping pieces accumulate instead of
/// cancelling and the test behaves as their union.
pub fn region_contains(region: &Path, point: Pos2) -> bool {
    let mut winding = 0i32;
    for contour in region.flatten(FLATTEN_TOLERANCE) {
        winding += contour_winding(&contour, point);
    }
    winding != 0
}

/// Winding number contribution of one contour, treated as closed.
fn contour_winding(pts: &[Pos2], p: Pos2) -> i32 {
    let mut winding = 0;
    let n = pts.len();
    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// > 0 if `p` lies left of the directed line a -> b, < 0 right, 0 on it.
fn is_left(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}
