//! Configuration and run summary for the convex partition.

use crate::polygon::Polygon;
use crate::vector::Vec2;

/// Partition configuration.
///
/// `Default` matches shared vertices with exact equality.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartitionCfg {
    /// Distance below which two vertices count as the same point when looking
    /// for shared diagonals. `0.0` (or any non-positive value) means exact `==`.
    pub match_tol: f64,
}

impl PartitionCfg {
    /// Exact matching; the default.
    #[inline]
    pub fn exact() -> Self {
        Self::default()
    }

    /// Match vertices within `tol` of each other.
    #[inline]
    pub fn with_tolerance(tol: f64) -> Self {
        Self { match_tol: tol }
    }

    #[inline]
    pub(crate) fn same_point(&self, a: Vec2, b: Vec2) -> bool {
        if self.match_tol > 0.0 {
            (a - b).norm() <= self.match_tol
        } else {
            a == b
        }
    }
}

/// Counters collected during one partition run.
///
/// Invariant: `output == input - merges`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitionStats {
    pub input: usize,
    pub output: usize,
    pub merges: usize,
    /// Convexity-test failures; the rescan after a merge may test a kept diagonal again.
    pub rejected: usize,
}

/// Result of `convex_partition_with`.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    pub polygons: Vec<Polygon>,
    pub stats: PartitionStats,
}
