//! JSON input/output for polygon sets.
//!
//! Formats
//! - Triangles: `[[[x, y], [x, y], [x, y]], ...]`.
//! - Tile grid: `[[code, ...], ...]` indexed `grid[xi][yi]`.
//! - Output: `{ "layer": ..., "polygons": [[[x, y], ...], ...], "stats": {...}? }`.

use anyhow::{bail, Context, Result};
use polypart::{PartitionStats, Polygon, Vec2};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type PointDto = [f64; 2];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDto {
    pub input: usize,
    pub output: usize,
    pub merges: usize,
    pub rejected: usize,
}

impl From<PartitionStats> for StatsDto {
    fn from(s: PartitionStats) -> Self {
        Self {
            input: s.input,
            output: s.output,
            merges: s.merges,
            rejected: s.rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonSet {
    pub layer: String,
    pub polygons: Vec<Vec<PointDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDto>,
}

impl PolygonSet {
    pub fn new(layer: &str, polygons: &[Polygon], stats: Option<PartitionStats>) -> Self {
        Self {
            layer: layer.to_string(),
            polygons: polygons.iter().map(polygon_to_dto).collect(),
            stats: stats.map(StatsDto::from),
        }
    }
}

fn polygon_to_dto(poly: &Polygon) -> Vec<PointDto> {
    poly.points().iter().map(|p| [p.x, p.y]).collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Read a triangle list; every entry must have exactly three points.
pub fn read_triangles(path: &Path) -> Result<Vec<Polygon>> {
    let raw: Vec<Vec<PointDto>> = read_json(path)?;
    raw.into_iter()
        .enumerate()
        .map(|(k, pts)| {
            if pts.len() != 3 {
                bail!("triangle {k} has {} points, expected 3", pts.len());
            }
            Ok(Polygon::new(
                pts.into_iter().map(|[x, y]| Vec2::new(x, y)).collect(),
            ))
        })
        .collect()
}

/// Read a tile grid of cell codes.
pub fn read_grid(path: &Path) -> Result<Vec<Vec<f64>>> {
    read_json(path)
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
