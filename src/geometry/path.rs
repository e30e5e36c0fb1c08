use std::f32::consts::{FRAC_PI_2, PI, TAU};

use egui::{Pos2, Rect, Vec2, pos2};
use serde::{Deserialize, Serialize};

use super::transform::Transform;

/// Flattening tolerance for arcs and generated ellipses, in canvas units.
pub const FLATTEN_TOLERANCE: f32 = 0.25;

/// A single drawing command. Arc angles are radians in the mathematical
/// convention: 0 along +x, counterclockwise positive. `clockwise` sweeps
/// toward decreasing angles instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Pos2),
    LineTo(Pos2),
    Arc {
        center: Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// On/off lengths plus starting phase, as understood by dashed stroking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub lengths: Vec<f32>,
    pub phase: f32,
}

/// Stroke parameters applied to a whole path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f32,
    pub dash: Option<DashPattern>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: None,
        }
    }
}

/// An ordered sequence of drawing commands plus the stroke style they are
/// rendered (and hit-tested) with.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
    style: StrokeStyle,
}

impl Path {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            cmds: Vec::new(),
            style,
        }
    }

    pub fn move_to(&mut self, p: Pos2) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Pos2) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    pub fn arc(
        &mut self,
        center: Pos2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    ) {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
    }

    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StrokeStyle {
        &mut self.style
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Minimal rectangle enclosing the raw geometry, ignoring stroke width.
    /// Arcs contribute their exact extrema, not just endpoints.
    pub fn fill_bounds(&self) -> Rect {
        let mut bounds = Rect::NOTHING;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => bounds = extend(bounds, p),
                PathCmd::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    bounds =
                        bounds.union(arc_bounds(center, radius, start_angle, end_angle, clockwise));
                }
            }
        }
        bounds
    }

    /// Fill bounds inflated by `width / 2 + 1` on every side. The extra unit
    /// is a visual margin carried by every consumer of these bounds.
    pub fn stroke_bounds(&self) -> Rect {
        let bounds = self.fill_bounds();
        if bounds == Rect::NOTHING {
            return bounds;
        }
        bounds.expand(self.style.width / 2.0 + 1.0)
    }

    /// Translates every point and arc center. Infallible, O(commands).
    pub fn translate(&mut self, delta: Vec2) {
        for cmd in &mut self.cmds {
            match cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => *p += delta,
                PathCmd::Arc { center, .. } => *center += delta,
            }
        }
    }

    /// Maps the path through an affine transform.
    ///
    /// Arcs stay arcs under similarity transforms (translation, rotation,
    /// uniform scale, reflection): the radius scales uniformly and the angles
    /// are re-derived from the mapped endpoints. Under any other transform
    /// arcs are flattened to line segments first.
    pub fn transformed(&self, t: &Transform) -> Path {
        let mut out = Path::new(self.style.clone());
        let similarity = t.similarity_scale();
        let mut has_current = false;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    out.move_to(t.apply(p));
                    has_current = true;
                }
                PathCmd::LineTo(p) => {
                    out.line_to(t.apply(p));
                    has_current = true;
                }
                PathCmd::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    match similarity {
                        Some(scale) if radius > 0.0 => {
                            let new_center = t.apply(center);
                            let start = t.apply(arc_point(center, radius, start_angle));
                            let end = t.apply(arc_point(center, radius, end_angle));
                            let new_start = (start - new_center).angle();
                            let new_end = (end - new_center).angle();
                            let new_clockwise = clockwise != t.is_reflecting();
                            out.arc(new_center, radius * scale, new_start, new_end, new_clockwise);
                        }
                        Some(_) => {
                            // Zero-radius arc degenerates to its center.
                            out.line_to(t.apply(center));
                        }
                        None => {
                            // Non-similarity transform: a circle would become
                            // an ellipse, which the command set cannot carry.
                            let pts =
                                flatten_arc(center, radius, start_angle, end_angle, clockwise);
                            for (i, p) in pts.into_iter().enumerate() {
                                let mapped = t.apply(p);
                                if i == 0 && !has_current {
                                    out.move_to(mapped);
                                } else {
                                    out.line_to(mapped);
                                }
                            }
                        }
                    }
                    has_current = true;
                }
            }
        }
        out
    }

    /// Flattens into polylines, one per subpath, arcs approximated to
    /// `tolerance`. An arc that does not start at the current point gets an
    /// implicit connecting line, as native path stroking does.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Pos2>> {
        let mut contours: Vec<Vec<Pos2>> = Vec::new();
        let mut current: Vec<Pos2> = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    if current.len() > 1 {
                        contours.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                    current.push(p);
                }
                PathCmd::LineTo(p) => {
                    if current.last() != Some(&p) {
                        current.push(p);
                    }
                }
                PathCmd::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise,
                } => {
                    let pts =
                        flatten_arc_with_tolerance(center, radius, start_angle, end_angle, clockwise, tolerance);
                    for p in pts {
                        if current.last() != Some(&p) {
                            current.push(p);
                        }
                    }
                }
            }
        }
        if current.len() > 1 {
            contours.push(current);
        }
        contours
    }
}

fn extend(bounds: Rect, p: Pos2) -> Rect {
    if bounds == Rect::NOTHING {
        Rect::from_min_max(p, p)
    } else {
        Rect::from_min_max(bounds.min.min(p), bounds.max.max(p))
    }
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Signed sweep from `start_angle` to `end_angle` in the requested direction,
/// normalized into `(0, 2π]` counterclockwise or `[-2π, 0)` clockwise.
fn arc_sweep(start_angle: f32, end_angle: f32, clockwise: bool) -> f32 {
    let mut sweep = (end_angle - start_angle) % TAU;
    if clockwise {
        if sweep >= 0.0 {
            sweep -= TAU;
        }
    } else if sweep <= 0.0 {
        sweep += TAU;
    }
    sweep
}

fn arc_bounds(center: Pos2, radius: f32, start_angle: f32, end_angle: f32, clockwise: bool) -> Rect {
    let sweep = arc_sweep(start_angle, end_angle, clockwise);
    let (lo, hi) = if sweep >= 0.0 {
        (start_angle, start_angle + sweep)
    } else {
        (start_angle + sweep, start_angle)
    };

    let mut bounds = Rect::from_two_pos(
        arc_point(center, radius, start_angle),
        arc_point(center, radius, end_angle),
    );
    // Axis crossings (multiples of π/2) inside the sweep are the extrema.
    let k0 = (lo / FRAC_PI_2).ceil() as i64;
    let k1 = (hi / FRAC_PI_2).floor() as i64;
    for k in k0..=k1 {
        bounds = extend(bounds, arc_point(center, radius, k as f32 * FRAC_PI_2));
    }
    bounds
}

fn flatten_arc(
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    clockwise: bool,
) -> Vec<Pos2> {
    flatten_arc_with_tolerance(center, radius, start_angle, end_angle, clockwise, FLATTEN_TOLERANCE)
}

fn flatten_arc_with_tolerance(
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    clockwise: bool,
    tolerance: f32,
) -> Vec<Pos2> {
    if radius <= 0.0 {
        return vec![center];
    }
    let sweep = arc_sweep(start_angle, end_angle, clockwise);
    let max_step = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    let segments = ((sweep.abs() / max_step).ceil() as usize).max(2);
    let step = sweep / segments as f32;
    (0..=segments)
        .map(|i| arc_point(center, radius, start_angle + step * i as f32))
        .collect()
}
