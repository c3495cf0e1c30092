//! 2D point/vector primitives.
//!
//! Purpose
//! - Points and displacement vectors share one value type, `Vec2`
//!   (`nalgebra::Vector2<f64>`). Component-wise `+`, `-`, scalar `*`, `/`,
//!   `dot`, exact `==` and `add_scalar` come from nalgebra; `Vec2Ext` adds the
//!   planar helpers the partitioner and its callers need. Helper names avoid
//!   nalgebra's inherent `cross`/`len` (3D cross product, element count).
//!
//! Assumptions and conventions
//! - Every operation returns a new value; receivers are never mutated.
//! - Equality is exact floating-point comparison. Adjacent triangles must carry
//!   bit-identical shared vertices to be recognized as neighbours.
//! - No NaN/Inf guarding beyond what IEEE arithmetic does.

use nalgebra::Vector2;

/// Planar point or vector.
pub type Vec2 = Vector2<f64>;

/// Planar helpers on top of `Vec2`.
pub trait Vec2Ext {
    /// Subtract `s` from both components.
    fn sub_scalar(&self, s: f64) -> Vec2;
    /// 2D cross product `x1*y2 - y1*x2` (z-component of the 3D cross).
    fn cross2(&self, other: &Vec2) -> f64;
    /// Euclidean distance to `other`.
    fn dist(&self, other: &Vec2) -> f64;
    /// Distance to the origin.
    fn length(&self) -> f64;
    /// Unit vector in the same direction, or the zero vector when the length is zero.
    fn normalize_or_zero(&self) -> Vec2;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn sub_scalar(&self, s: f64) -> Vec2 {
        Vec2::new(self.x - s, self.y - s)
    }

    #[inline]
    fn cross2(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn dist(&self, other: &Vec2) -> f64 {
        let diff = self - other;
        diff.dot(&diff).sqrt()
    }

    #[inline]
    fn length(&self) -> f64 {
        self.dist(&Vec2::zeros())
    }

    #[inline]
    fn normalize_or_zero(&self) -> Vec2 {
        let n = self.length();
        if n > 0.0 {
            *self / n
        } else {
            Vec2::zeros()
        }
    }
}
