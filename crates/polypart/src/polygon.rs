//! Ordered, cyclically indexed polygons with orientation semantics.
//!
//! Purpose
//! - `Polygon` is the unit of input (as a triangle) and output of the convex
//!   partition. It owns its vertices; clones never share state.
//!
//! Assumptions and conventions
//! - The vertex count is always `points.len()`; there is no separately stored
//!   count that could drift out of sync.
//! - Accessors are permissive: out-of-range reads return `None`, out-of-range
//!   writes are ignored, index navigation on an empty polygon returns `0`.
//! - `signed_area_sum` is the raw shoelace sum, i.e. twice the signed area.
//!   Use `area()` for the enclosed area.
//! - Orientation follows the sign of the shoelace sum in y-up axes: positive is
//!   counter-clockwise. On a y-down raster (tile grids, screens) the same
//!   polygon is drawn clockwise.

use std::fmt;

use crate::partition::is_convex_turn;
use crate::vector::Vec2;

/// Winding direction of a non-degenerate polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Ccw,
    Cw,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Ccw => f.write_str("CCW"),
            Orientation::Cw => f.write_str("CW"),
        }
    }
}

/// Ordered cyclic vertex sequence.
///
/// Invariants:
/// - Vertex `i` is followed by `next_index(i)`; the last vertex wraps to `0`.
/// - No closing duplicate of the first vertex is stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    /// Polygon over the given vertices, in order.
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Triangle `p1 → p2 → p3`; no orientation is enforced.
    #[inline]
    pub fn triangle(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            points: vec![p1, p2, p3],
        }
    }

    /// `n` vertices at the origin, to be filled with `set_point_at`.
    #[inline]
    pub fn with_len(n: usize) -> Self {
        Self {
            points: vec![Vec2::zeros(); n],
        }
    }

    /// Reset to exactly the triangle `p1 → p2 → p3`, in the given order.
    pub fn as_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2) {
        self.points.clear();
        self.points.extend_from_slice(&[p1, p2, p3]);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    /// Vertex at index `i`, or `None` when `i` is out of range.
    #[inline]
    pub fn point_at(&self, i: usize) -> Option<Vec2> {
        self.points.get(i).copied()
    }

    /// Overwrite vertex `i`; silently ignored when `i` is out of range.
    #[inline]
    pub fn set_point_at(&mut self, i: usize, p: Vec2) {
        if let Some(slot) = self.points.get_mut(i) {
            *slot = p;
        }
    }

    /// Cyclic successor of index `i`.
    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        match self.points.len() {
            0 => 0,
            n => (i + 1) % n,
        }
    }

    /// Cyclic predecessor of index `i`; `prev_index(0) == len() - 1`.
    #[inline]
    pub fn prev_index(&self, i: usize) -> usize {
        match self.points.len() {
            0 => 0,
            n if i == 0 => n - 1,
            _ => i - 1,
        }
    }

    /// Shoelace sum `Σ (x_i·y_{i+1} − y_i·x_{i+1})` over all cyclic edges.
    ///
    /// This is twice the signed area; only its sign is used for orientation.
    pub fn signed_area_sum(&self) -> f64 {
        let mut sum = 0.0;
        for (i, p) in self.points.iter().enumerate() {
            let q = self.points[self.next_index(i)];
            sum += p.x * q.y - p.y * q.x;
        }
        sum
    }

    /// Enclosed (unsigned) area.
    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.signed_area_sum().abs()
    }

    /// `None` for degenerate polygons (zero shoelace sum).
    pub fn orientation(&self) -> Option<Orientation> {
        let sum = self.signed_area_sum();
        if sum > 0.0 {
            Some(Orientation::Ccw)
        } else if sum < 0.0 {
            Some(Orientation::Cw)
        } else {
            None
        }
    }

    /// Reverse the vertex order iff the current orientation is defined and differs from `target`.
    pub fn set_orientation(&mut self, target: Orientation) {
        if let Some(current) = self.orientation() {
            if current != target {
                self.invert();
            }
        }
    }

    /// Reverse the vertex order in place.
    #[inline]
    pub fn invert(&mut self) {
        self.points.reverse();
    }

    /// Every cyclic vertex triple passes `is_convex_turn`.
    ///
    /// Uses the partitioner's winding convention (positive shoelace sum), so a
    /// convex polygon listed the other way round reports `false`.
    pub fn is_convex(&self) -> bool {
        (0..self.points.len()).all(|i| {
            let p1 = self.points[self.prev_index(i)];
            let p3 = self.points[self.next_index(i)];
            is_convex_turn(p1, self.points[i], p3)
        })
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(points: Vec<Vec2>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_ccw() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn point_access_is_permissive() {
        let mut p = Polygon::default();
        assert_eq!(p.point_at(0), None);
        p.set_point_at(0, Vec2::new(1.0, 1.0));
        assert!(p.is_empty());

        let mut q = Polygon::with_len(3);
        q.set_point_at(0, Vec2::new(0.0, 0.0));
        q.set_point_at(1, Vec2::new(2.0, 0.0));
        q.set_point_at(2, Vec2::new(0.0, 2.0));
        q.set_point_at(3, Vec2::new(9.0, 9.0)); // ignored
        assert_eq!(q.len(), 3);
        assert_eq!(q.point_at(1), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(q.point_at(3), None);
    }

    #[test]
    fn cyclic_navigation_wraps() {
        let p = unit_square_ccw();
        assert_eq!(p.next_index(3), 0);
        assert_eq!(p.prev_index(0), 3);
        assert_eq!(p.next_index(1), 2);
        assert_eq!(p.prev_index(2), 1);
        for i in 0..p.len() {
            assert_eq!(p.prev_index(p.next_index(i)), i);
            assert_eq!(p.next_index(p.prev_index(i)), i);
        }
        let empty = Polygon::default();
        assert_eq!(empty.next_index(0), 0);
        assert_eq!(empty.prev_index(0), 0);
    }

    #[test]
    fn area_sum_is_twice_the_area() {
        let p = unit_square_ccw();
        assert_eq!(p.signed_area_sum(), 2.0);
        assert_eq!(p.area(), 1.0);
        let mut q = p.clone();
        q.invert();
        assert_eq!(q.signed_area_sum(), -2.0);
        assert_eq!(q.area(), 1.0);
    }

    #[test]
    fn orientation_and_set_orientation() {
        let mut p = unit_square_ccw();
        assert_eq!(p.orientation(), Some(Orientation::Ccw));
        assert_eq!(p.orientation().map(|o| o.to_string()).as_deref(), Some("CCW"));
        p.set_orientation(Orientation::Ccw);
        assert_eq!(p, unit_square_ccw());
        p.set_orientation(Orientation::Cw);
        assert_eq!(p.orientation(), Some(Orientation::Cw));
        assert_eq!(p.point_at(0), Some(Vec2::new(0.0, 1.0)));

        // degenerate: no-op
        let mut flat = Polygon::triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
        );
        let before = flat.clone();
        assert_eq!(flat.orientation(), None);
        flat.set_orientation(Orientation::Cw);
        assert_eq!(flat, before);
    }

    #[test]
    fn as_triangle_keeps_given_order() {
        let mut p = unit_square_ccw();
        let (a, b, c) = (
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
        );
        p.as_triangle(a, b, c);
        assert_eq!(p.points(), &[a, b, c]);
        assert_eq!(p.orientation(), Some(Orientation::Cw));
    }

    #[test]
    fn convexity_follows_winding() {
        let p = unit_square_ccw();
        assert!(p.is_convex());
        let mut q = p.clone();
        q.invert();
        assert!(!q.is_convex());
        let dart = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(1.0, 1.0),
        ]);
        assert!(!dart.is_convex());
    }
}
