use std::f32::consts::{PI, TAU};

use egui::{Pos2, Vec2, vec2};

use super::path::{FLATTEN_TOLERANCE, LineCap, LineJoin, Path, StrokeStyle};

/// Segments used to polygonize a full round-join disk.
const DISK_SEGMENTS: usize = 16;

/// Vertices closer than this are treated as coincident.
const COINCIDENT_EPS: f32 = 1e-3;

/// Computes the closed region swept by stroking `path` at `width` with the
/// given cap/join style.
///
/// The result is a path of closed polygonal contours, all wound
/// counterclockwise: one oriented quad per flattened segment, join geometry
/// at every interior vertex, cap geometry at open ends. A subpath whose first
/// and last points coincide is stroked as closed (joins all the way around,
/// no caps). Containment via the nonzero winding rule then behaves as the
/// union of those pieces, so no point within `width / 2` of the centerline is
/// ever missed; join corners are exact to the flattening tolerance.
pub fn stroke_outline(
    path: &Path,
    width: f32,
    cap: LineCap,
    join: LineJoin,
    miter_limit: f32,
) -> Path {
    let radius = width / 2.0;
    let mut out = Path::new(StrokeStyle::default());

    for contour in path.flatten(FLATTEN_TOLERANCE) {
        let mut pts = contour;
        dedupe_in_place(&mut pts);

        if pts.len() < 2 {
            // A lone point has no direction: only round/square caps give it
            // any stroked area at all.
            if let Some(&p) = pts.first() {
                match cap {
                    LineCap::Butt => {}
                    LineCap::Round => push_ring(&mut out, &disk(p, radius)),
                    LineCap::Square => push_ring(
                        &mut out,
                        &[
                            p + vec2(-radius, -radius),
                            p + vec2(radius, -radius),
                            p + vec2(radius, radius),
                            p + vec2(-radius, radius),
                        ],
                    ),
                }
            }
            continue;
        }

        let closed = (pts[0] - pts[pts.len() - 1]).length() <= COINCIDENT_EPS;
        if closed {
            pts.pop();
        }
        if pts.len() < 2 {
            continue;
        }
        let n = pts.len();

        // One quad per segment.
        let segment_count = if closed { n } else { n - 1 };
        for i in 0..segment_count {
            push_segment_quad(&mut out, pts[i], pts[(i + 1) % n], radius);
        }

        // Join geometry at interior vertices (every vertex when closed).
        let joins = if closed { 0..n } else { 1..n - 1 };
        for i in joins {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            push_join(&mut out, prev, pts[i], next, radius, join, miter_limit);
        }

        if !closed {
            let start_dir = (pts[1] - pts[0]).normalized();
            let end_dir = (pts[n - 1] - pts[n - 2]).normalized();
            push_cap(&mut out, pts[0], -start_dir, radius, cap);
            push_cap(&mut out, pts[n - 1], end_dir, radius, cap);
        }
    }

    out
}

fn dedupe_in_place(pts: &mut Vec<Pos2>) {
    pts.dedup_by(|a, b| (*a - *b).length() <= COINCIDENT_EPS);
}

fn push_segment_quad(out: &mut Path, p0: Pos2, p1: Pos2, radius: f32) {
    let d = (p1 - p0).normalized();
    let normal = vec2(-d.y, d.x) * radius;
    push_ring(out, &[p0 - normal, p1 - normal, p1 + normal, p0 + normal]);
}

fn push_join(
    out: &mut Path,
    prev: Pos2,
    vertex: Pos2,
    next: Pos2,
    radius: f32,
    join: LineJoin,
    miter_limit: f32,
) {
    let d0 = (vertex - prev).normalized();
    let d1 = (next - vertex).normalized();
    let cross = d0.x * d1.y - d0.y * d1.x;
    let dot = d0.dot(d1);

    if cross.abs() < 1e-6 && dot > 0.0 {
        // Collinear continuation, the segment quads already overlap.
        return;
    }

    if join == LineJoin::Round {
        push_ring(out, &disk(vertex, radius));
        return;
    }

    // Outer corners of the two segment quads at this vertex.
    let n0 = vec2(-d0.y, d0.x);
    let n1 = vec2(-d1.y, d1.x);
    let outer_sign = if cross > 0.0 { -1.0 } else { 1.0 };
    let corner0 = vertex + n0 * radius * outer_sign;
    let corner1 = vertex + n1 * radius * outer_sign;
    if (corner0 - corner1).length() <= COINCIDENT_EPS {
        return;
    }

    // Bevel triangle fills the notch between the quads.
    push_ring(out, &[vertex, corner0, corner1]);

    if join == LineJoin::Miter {
        // Half-angle of the corner; miter length ratio is 1 / sin(θ/2).
        let sin_half = ((1.0 - dot) / 2.0).max(0.0).sqrt();
        // Outward bisector, from the vertex toward the miter tip. Zero when
        // the path doubles back on itself, which has no finite miter anyway.
        let miter_dir = ((corner0 - vertex) + (corner1 - vertex)).normalized();
        if sin_half > 1e-6 && miter_dir != Vec2::ZERO && 1.0 / sin_half <= miter_limit {
            let tip = vertex + miter_dir * (radius / sin_half);
            push_ring(out, &[corner0, tip, corner1]);
        }
    }
}

fn push_cap(out: &mut Path, end: Pos2, outward: Vec2, radius: f32, cap: LineCap) {
    match cap {
        LineCap::Butt => {}
        LineCap::Round => {
            // Half-disk bulging in the outward direction.
            let base = outward.angle();
            let r = circumscribed(radius);
            let mut pts = Vec::with_capacity(DISK_SEGMENTS / 2 + 1);
            for i in 0..=DISK_SEGMENTS / 2 {
                let angle = base - PI / 2.0 + PI * i as f32 / (DISK_SEGMENTS / 2) as f32;
                pts.push(end + vec2(angle.cos(), angle.sin()) * r);
            }
            push_ring(out, &pts);
        }
        LineCap::Square => {
            let side = vec2(-outward.y, outward.x) * radius;
            let reach = outward * radius;
            push_ring(out, &[end - side, end - side + reach, end + side + reach, end + side]);
        }
    }
}

fn disk(center: Pos2, radius: f32) -> Vec<Pos2> {
    let r = circumscribed(radius);
    (0..DISK_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f32 / DISK_SEGMENTS as f32;
            center + vec2(angle.cos(), angle.sin()) * r
        })
        .collect()
}

/// Polygonized disks circumscribe the true circle so the region never
/// under-covers a point within the stroke radius.
fn circumscribed(radius: f32) -> f32 {
    radius / (PI / DISK_SEGMENTS as f32).cos()
}

/// Emits one closed contour, reversing it if needed so every ring in the
/// outline is wound counterclockwise.
fn push_ring(out: &mut Path, pts: &[Pos2]) {
    if pts.len() < 3 {
        return;
    }
    let mut area = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        area += a.x * b.y - b.x * a.y;
    }
    if area.abs() < 1e-12 {
        return;
    }

    let ordered: Vec<Pos2> = if area >= 0.0 {
        pts.to_vec()
    } else {
        pts.iter().rev().copied().collect()
    };
    out.move_to(ordered[0]);
    for &p in &ordered[1..] {
        out.line_to(p);
    }
    out.line_to(ordered[0]);
}
