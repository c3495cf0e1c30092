//! Convex partition of a triangulation (Hertel–Mehlhorn).
//!
//! Purpose
//! - Merge the triangles of a valid triangulation into fewer convex pieces by
//!   greedily deleting shared diagonals whenever both resulting corners stay
//!   convex. The piece count is at most 4× the optimum, not minimal.
//!
//! Assumptions and conventions
//! - Input triangles share internal edges as reversed vertex pairs: `(d1, d2)`
//!   in one triangle and `(d2, d1)` in its neighbour.
//! - Winding: outer boundaries have a positive shoelace sum (clockwise on a
//!   y-down raster, counter-clockwise in y-up axes). `is_convex_turn` is
//!   oriented for this convention.
//! - Shared vertices are matched with exact equality unless
//!   `PartitionCfg::match_tol` is set; a tolerance is an explicit opt-in.
//! - Nothing here fails. Inconsistent input degrades into more, smaller pieces.
//!
//! Code cross-refs: `crate::polygon::Polygon`, `crate::tiles` (grid triangulations).

mod convexity;
mod merge;
mod types;

pub use convexity::is_convex_turn;
pub use merge::{convex_partition, convex_partition_with};
pub use types::{Partition, PartitionCfg, PartitionStats};
