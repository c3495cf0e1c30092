use crate::vector::Vec2;

/// Whether the turn at `p2` (edge `p1→p2` followed by `p2→p3`) is convex or straight.
///
/// Evaluates `(p3.y − p1.y)(p2.x − p1.x) − (p3.x − p1.x)(p2.y − p1.y) >= 0`.
/// Colinear triples count as convex.
#[inline]
pub fn is_convex_turn(p1: Vec2, p2: Vec2, p3: Vec2) -> bool {
    let tmp = (p3.y - p1.y) * (p2.x - p1.x) - (p3.x - p1.x) * (p2.y - p1.y);
    tmp >= 0.0
}
