//! Tile grids → triangles.
//!
//! Purpose
//! - Turn a grid of per-cell wall codes into the triangulation the partitioner
//!   consumes, plus the per-cell outlines for display.
//!
//! Model
//! - `grid[xi][yi]` holds the code of the cell whose upper-left corner is
//!   `(xi, yi) * tile_width`; y grows downward.
//! - Code `1` is a full wall square, split along `p → lr` into a lower-left and an
//!   upper-right triangle. Codes `1.1`–`1.4` are half tiles (one triangle each).
//!   Anything whose integer part is not `1` is floor and produces nothing.
//! - Every emitted triangle has a positive shoelace sum and shares cell edges
//!   with its neighbours as reversed vertex pairs, so the output is a valid
//!   partitioner input as-is.
//!
//! Code cross-refs: `crate::partition::convex_partition`, `rand::random_grid`.

pub mod rand;

use tracing::warn;

use crate::partition::{convex_partition, convex_partition_with, Partition, PartitionCfg};
use crate::polygon::Polygon;
use crate::vector::Vec2;

/// Default cell edge length.
pub const TILE_WIDTH: f64 = 40.0;

/// Slack for the decimal sub-type after scaling (`1.3` is not exact in binary).
const SUBTYPE_EPS: f64 = 1e-9;

/// Shape of a wall cell. Half tiles are named after the corner they fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileShape {
    Square,
    LowerLeft,
    UpperLeft,
    UpperRight,
    LowerRight,
}

impl TileShape {
    /// Parse a cell code; `None` for floor cells and unknown half-tile types.
    pub fn from_code(code: f64) -> Option<Self> {
        if code.floor() != 1.0 {
            return None;
        }
        if code == 1.0 {
            return Some(TileShape::Square);
        }
        // Sub-type is the single decimal digit: 1.1 → 1, ..., 1.4 → 4. Codes with
        // further digits (1.12, 1.05) are unknown.
        let sub = (code - 1.0) * 10.0;
        let digit = sub.round();
        if (sub - digit).abs() > SUBTYPE_EPS {
            return None;
        }
        match digit as i64 {
            1 => Some(TileShape::LowerLeft),
            2 => Some(TileShape::UpperLeft),
            3 => Some(TileShape::UpperRight),
            4 => Some(TileShape::LowerRight),
            _ => None,
        }
    }

    /// Inverse of `from_code`.
    pub fn code(self) -> f64 {
        match self {
            TileShape::Square => 1.0,
            TileShape::LowerLeft => 1.1,
            TileShape::UpperLeft => 1.2,
            TileShape::UpperRight => 1.3,
            TileShape::LowerRight => 1.4,
        }
    }

    /// Cell outline: the square itself, or the half-tile triangle.
    pub fn outline(self, origin: Vec2, width: f64) -> Polygon {
        let c = Corners::new(origin, width);
        match self {
            TileShape::Square => Polygon::new(vec![c.ul, c.ur, c.lr, c.ll]),
            TileShape::LowerLeft => Polygon::triangle(c.ul, c.lr, c.ll),
            TileShape::UpperLeft => Polygon::triangle(c.ul, c.ur, c.ll),
            TileShape::UpperRight => Polygon::triangle(c.ul, c.ur, c.lr),
            TileShape::LowerRight => Polygon::triangle(c.ur, c.lr, c.ll),
        }
    }

    /// Triangles covering the cell (two for a square, one for a half tile).
    pub fn triangles(self, origin: Vec2, width: f64) -> Vec<Polygon> {
        match self {
            TileShape::Square => vec![
                TileShape::LowerLeft.outline(origin, width),
                TileShape::UpperRight.outline(origin, width),
            ],
            half => vec![half.outline(origin, width)],
        }
    }
}

#[derive(Clone, Copy)]
struct Corners {
    ul: Vec2,
    ur: Vec2,
    lr: Vec2,
    ll: Vec2,
}

impl Corners {
    fn new(ul: Vec2, w: f64) -> Self {
        Self {
            ul,
            ur: ul + Vec2::new(w, 0.0),
            lr: ul + Vec2::new(w, w),
            ll: ul + Vec2::new(0.0, w),
        }
    }
}

/// Grid conversion settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    pub tile_width: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
        }
    }
}

/// Which polygon set of a grid to hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// One outline per wall cell.
    Tiles,
    /// The triangulation.
    Triangles,
    /// The triangulation after convex partition.
    Merged,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Tiles => "tiles",
            Layer::Triangles => "triangles",
            Layer::Merged => "merged",
        }
    }
}

/// Cell outlines and triangulation of a grid.
#[derive(Clone, Debug, Default)]
pub struct GridPolys {
    pub tiles: Vec<Polygon>,
    pub triangles: Vec<Polygon>,
}

impl GridPolys {
    /// Convex partition of the triangulation (exact vertex matching).
    pub fn merged(&self) -> Vec<Polygon> {
        convex_partition(&self.triangles)
    }

    pub fn merged_with(&self, cfg: PartitionCfg) -> Partition {
        convex_partition_with(&self.triangles, cfg)
    }

    /// Polygons of `layer`; `Merged` runs the partition.
    pub fn layer(&self, layer: Layer) -> Vec<Polygon> {
        match layer {
            Layer::Tiles => self.tiles.clone(),
            Layer::Triangles => self.triangles.clone(),
            Layer::Merged => self.merged(),
        }
    }
}

/// Outlines and triangles for every wall cell, in `grid[xi][yi]` order.
pub fn grid_polys(grid: &[Vec<f64>], cfg: GridCfg) -> GridPolys {
    let mut out = GridPolys::default();
    for (xi, column) in grid.iter().enumerate() {
        for (yi, &code) in column.iter().enumerate() {
            let Some(shape) = TileShape::from_code(code) else {
                if code.floor() == 1.0 {
                    warn!(xi, yi, code, "unknown wall tile type; cell skipped");
                }
                continue;
            };
            let origin = Vec2::new(xi as f64, yi as f64) * cfg.tile_width;
            out.tiles.push(shape.outline(origin, cfg.tile_width));
            out.triangles.extend(shape.triangles(origin, cfg.tile_width));
        }
    }
    out
}
