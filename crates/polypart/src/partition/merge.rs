//! Diagonal search and merge loop.
//!
//! Layout: `convex_partition_with` owns the working list and the per-slot
//! fixpoint loop; `find_merge` scans one polygon's edges for a removable
//! diagonal; `splice` builds the fused polygon.

use tracing::{debug, warn};

use super::convexity::is_convex_turn;
use super::types::{Partition, PartitionCfg, PartitionStats};
use crate::polygon::Polygon;
use crate::vector::Vec2;

/// A removable diagonal found from the polygon at the current slot.
struct Merge {
    partner: usize,
    merged: Polygon,
}

/// Merge the triangles into convex polygons with exact vertex matching.
///
/// The input is cloned; neither the slice nor its vertices are touched.
pub fn convex_partition(triangles: &[Polygon]) -> Vec<Polygon> {
    convex_partition_with(triangles, PartitionCfg::default()).polygons
}

/// Merge the triangles into convex polygons; also returns run counters.
pub fn convex_partition_with(triangles: &[Polygon], cfg: PartitionCfg) -> Partition {
    for (index, tri) in triangles.iter().enumerate() {
        if tri.len() != 3 {
            warn!(index, vertices = tri.len(), "partition input is not a triangle");
        }
    }

    let mut work: Vec<Polygon> = triangles.to_vec();
    let mut stats = PartitionStats {
        input: work.len(),
        ..PartitionStats::default()
    };

    let mut s1 = 0usize;
    while s1 < work.len() {
        // Fixpoint: after every merge the fused polygon is rescanned from its first edge.
        // Partners always sit after `s1`, so the fused polygon keeps slot `s1`.
        while let Some(Merge { partner, merged }) = find_merge(&work, s1, cfg, &mut stats) {
            debug!(
                slot = s1,
                removed = partner,
                vertices = merged.len(),
                "merged across diagonal"
            );
            work[s1] = merged;
            work.remove(partner);
            stats.merges += 1;
        }
        s1 += 1;
    }

    stats.output = work.len();
    debug!(
        input = stats.input,
        output = stats.output,
        merges = stats.merges,
        rejected = stats.rejected,
        "convex partition done"
    );
    Partition {
        polygons: work,
        stats,
    }
}

/// First edge of `work[s1]` whose diagonal can be removed while keeping both corners convex.
fn find_merge(
    work: &[Polygon],
    s1: usize,
    cfg: PartitionCfg,
    stats: &mut PartitionStats,
) -> Option<Merge> {
    let poly1 = &work[s1];
    let pts1 = poly1.points();
    for i11 in 0..pts1.len() {
        let i12 = poly1.next_index(i11);
        let d1 = pts1[i11];
        let d2 = pts1[i12];

        let Some((s2, i21)) = find_reversed_edge(work, s1, d1, d2, cfg) else {
            continue;
        };
        let poly2 = &work[s2];
        let pts2 = poly2.points();
        let i22 = poly2.next_index(i21);

        // Corner at d1: poly1's predecessor of d1, then poly2's successor of its d1.
        let before = pts1[poly1.prev_index(i11)];
        let after = pts2[poly2.next_index(i22)];
        if !is_convex_turn(before, d1, after) {
            stats.rejected += 1;
            debug!(slot = s1, partner = s2, edge = i11, "diagonal kept: reflex at first endpoint");
            continue;
        }

        // Corner at d2: poly2's predecessor of its d2, then poly1's successor of d2.
        let before = pts2[poly2.prev_index(i21)];
        let after = pts1[poly1.next_index(i12)];
        if !is_convex_turn(before, d2, after) {
            stats.rejected += 1;
            debug!(slot = s1, partner = s2, edge = i11, "diagonal kept: reflex at second endpoint");
            continue;
        }

        let merged = splice(poly1, i11, i12, poly2, i21, i22);
        return Some(Merge {
            partner: s2,
            merged,
        });
    }
    None
}

/// Slot and index `i21` of a later polygon holding the edge `d2 → d1`.
///
/// Slots before `s1` are finished pieces and are never reopened.
fn find_reversed_edge(
    work: &[Polygon],
    s1: usize,
    d1: Vec2,
    d2: Vec2,
    cfg: PartitionCfg,
) -> Option<(usize, usize)> {
    work.iter()
        .enumerate()
        .skip(s1 + 1)
        .find_map(|(s2, poly2)| {
            let pts2 = poly2.points();
            (0..pts2.len())
                .find(|&i21| {
                    cfg.same_point(pts2[i21], d2)
                        && cfg.same_point(pts2[poly2.next_index(i21)], d1)
                })
                .map(|i21| (s2, i21))
        })
}

/// Fuse two polygons along the shared diagonal.
///
/// Walks `poly1` from `i12` up to (excluding) `i11`, then `poly2` from `i22`
/// up to (excluding) `i21`; the result has `len1 + len2 - 2` vertices.
fn splice(
    poly1: &Polygon,
    i11: usize,
    i12: usize,
    poly2: &Polygon,
    i21: usize,
    i22: usize,
) -> Polygon {
    let mut points = Vec::with_capacity((poly1.len() + poly2.len()).saturating_sub(2));
    walk(poly1, i12, i11, &mut points);
    walk(poly2, i22, i21, &mut points);
    Polygon::new(points)
}

#[inline]
fn walk(poly: &Polygon, from: usize, until: usize, out: &mut Vec<Vec2>) {
    let pts = poly.points();
    let mut j = from;
    while j != until {
        out.push(pts[j]);
        j = poly.next_index(j);
    }
}
