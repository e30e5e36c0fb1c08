use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// 2-D affine transform in column-vector convention:
/// `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
///
/// Built by chaining `then_*` calls; the transform constructed first is the
/// one applied to points first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(delta: Vec2) -> Self {
        Self {
            tx: delta.x,
            ty: delta.y,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Returns the composition that applies `self` first, then `other`.
    pub fn then(self, other: Self) -> Self {
        Self {
            a: other.a * self.a + other.c * self.b,
            b: other.b * self.a + other.d * self.b,
            c: other.a * self.c + other.c * self.d,
            d: other.b * self.c + other.d * self.d,
            tx: other.a * self.tx + other.c * self.ty + other.tx,
            ty: other.b * self.tx + other.d * self.ty + other.ty,
        }
    }

    pub fn then_translate(self, delta: Vec2) -> Self {
        self.then(Self::translation(delta))
    }

    pub fn then_scale(self, sx: f32, sy: f32) -> Self {
        self.then(Self::scale(sx, sy))
    }

    pub fn apply(&self, p: Pos2) -> Pos2 {
        pos2(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Maps a direction through the linear part, ignoring translation.
    pub fn apply_vec(&self, v: Vec2) -> Vec2 {
        vec2(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// Mirrors content vertically within `rect`: `y -> rect.min.y + rect.max.y - y`.
    ///
    /// Shape paths are built in a Y-up frame and pushed through this so they
    /// keep their intended orientation on a Y-down canvas.
    pub fn flip_vertical_in(rect: Rect) -> Self {
        Self::translation(-rect.min.to_vec2())
            .then_scale(1.0, -1.0)
            .then_translate(vec2(0.0, rect.height()))
            .then_translate(rect.min.to_vec2())
    }

    /// The uniform scale factor of the linear part, if it is a similarity
    /// (rotation / uniform scale / reflection). `None` for shears and
    /// non-uniform scales.
    pub fn similarity_scale(&self) -> Option<f32> {
        let col_x = vec2(self.a, self.b).length();
        let col_y = vec2(self.c, self.d).length();
        let dot = self.a * self.c + self.b * self.d;
        let tol = 1e-4 * col_x.max(col_y).max(1.0);
        if (col_x - col_y).abs() <= tol && dot.abs() <= tol * col_x.max(1.0) {
            Some(col_x)
        } else {
            None
        }
    }

    /// True when the transform flips orientation (negative determinant).
    pub fn is_reflecting(&self) -> bool {
        self.a * self.d - self.b * self.c < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_roundtrip() {
        let t = Transform::translation(vec2(3.0, -4.0));
        assert_eq!(t.apply(pos2(1.0, 2.0)), pos2(4.0, -2.0));
    }

    #[test]
    fn test_composition_order() {
        // Scale first, then translate: p -> p * 2 + (10, 0)
        let t = Transform::scale(2.0, 2.0).then_translate(vec2(10.0, 0.0));
        assert_eq!(t.apply(pos2(1.0, 1.0)), pos2(12.0, 2.0));
    }

    #[test]
    fn test_vertical_flip_mirrors_within_rect() {
        let rect = Rect::from_min_max(pos2(10.0, 20.0), pos2(110.0, 80.0));
        let flip = Transform::flip_vertical_in(rect);

        // Top and bottom edges swap, x is untouched.
        assert_eq!(flip.apply(pos2(30.0, 20.0)), pos2(30.0, 80.0));
        assert_eq!(flip.apply(pos2(30.0, 80.0)), pos2(30.0, 20.0));
        // The center is a fixed point.
        let center = rect.center();
        let mapped = flip.apply(center);
        assert!((mapped.y - center.y).abs() < 1e-4);
        assert!(flip.is_reflecting());
    }

    #[test]
    fn test_similarity_detection() {
        assert_eq!(Transform::scale(2.0, 2.0).similarity_scale(), Some(2.0));
        assert_eq!(Transform::scale(1.0, -1.0).similarity_scale(), Some(1.0));
        assert!(Transform::rotation(0.7).similarity_scale().is_some());
        assert_eq!(Transform::scale(2.0, 3.0).similarity_scale(), None);
    }
}
