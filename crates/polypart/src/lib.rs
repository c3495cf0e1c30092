//! Convex partition of planar triangulations (Hertel–Mehlhorn).
//!
//! Layers, leaf-first:
//! - `vector`: 2D points/vectors (`Vec2`, an alias of `nalgebra::Vector2<f64>`).
//! - `polygon`: ordered cyclic polygons with orientation queries.
//! - `partition`: convexity predicate and the greedy diagonal-merging partition.
//! - `tiles`: tile-grid → triangle conversion and seeded random grids.
//!
//! API Policy
//! - Types are module-scoped; the crate root re-exports only what callers need
//!   to build polygons and run a partition.
//! - The core is synchronous, allocation-only and never fails: absent values
//!   are `None`, inconsistent input yields more, smaller pieces.

pub mod partition;
pub mod polygon;
pub mod tiles;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use partition::{
    convex_partition, convex_partition_with, is_convex_turn, Partition, PartitionCfg,
    PartitionStats,
};
pub use polygon::{Orientation, Polygon};
pub use vector::{Vec2, Vec2Ext};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::partition::{
        convex_partition, convex_partition_with, is_convex_turn, Partition, PartitionCfg,
        PartitionStats,
    };
    pub use crate::polygon::{Orientation, Polygon};
    pub use crate::tiles::rand::{random_grid, RandomGridCfg, ReplayToken};
    pub use crate::tiles::{grid_polys, GridCfg, GridPolys, Layer, TileShape, TILE_WIDTH};
    pub use crate::vector::{Vec2, Vec2Ext};
}
