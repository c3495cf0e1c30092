use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polypart::tiles::{grid_polys, GridCfg, Layer};
use polypart::{convex_partition_with, PartitionCfg};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod run_record;

use io::PolygonSet;
use run_record::RunRecord;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex partition runner for triangulations and tile grids")]
struct Cmd {
    /// Optional run tag; propagated to run records and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Merge a JSON triangle list into convex polygons
    Partition {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Vertex matching distance; 0 means exact equality
        #[arg(long, default_value_t = 0.0)]
        match_tol: f64,
    },
    /// Convert a JSON tile grid and write one of its polygon layers
    Tiles {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = polypart::tiles::TILE_WIDTH)]
        tile_width: f64,
        #[arg(long, value_enum, default_value_t = LayerArg::Merged)]
        layer: LayerArg,
        /// Vertex matching distance for the merged layer; 0 means exact equality
        #[arg(long, default_value_t = 0.0)]
        match_tol: f64,
    },
    /// Print the run record of this build
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayerArg {
    Tiles,
    Triangles,
    Merged,
}

impl From<LayerArg> for Layer {
    fn from(l: LayerArg) -> Self {
        match l {
            LayerArg::Tiles => Layer::Tiles,
            LayerArg::Triangles => Layer::Triangles,
            LayerArg::Merged => Layer::Merged,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Partition {
            input,
            out,
            match_tol,
        } => partition(&input, &out, match_tol, cmd.tag),
        Action::Tiles {
            input,
            out,
            tile_width,
            layer,
            match_tol,
        } => tiles(&input, &out, tile_width, layer.into(), match_tol, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn partition(input: &Path, out: &Path, match_tol: f64, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), match_tol, tag = ?tag, "partition");
    let triangles = io::read_triangles(input)?;
    let part = convex_partition_with(&triangles, PartitionCfg::with_tolerance(match_tol));
    tracing::info!(
        input = part.stats.input,
        output = part.stats.output,
        merges = part.stats.merges,
        rejected = part.stats.rejected,
        "partition_done"
    );

    io::write_json(
        out,
        &PolygonSet::new(Layer::Merged.as_str(), &part.polygons, Some(part.stats)),
    )?;
    let params = json!({
        "input": input.to_string_lossy(),
        "match_tol": match_tol,
    });
    RunRecord::new("partition", params, tag)
        .with_stats(Some(part.stats))
        .write_beside(out)?;
    Ok(())
}

fn tiles(
    input: &Path,
    out: &Path,
    tile_width: f64,
    layer: Layer,
    match_tol: f64,
    tag: Option<String>,
) -> Result<()> {
    ensure!(
        tile_width.is_finite() && tile_width > 0.0,
        "tile width must be positive, got {tile_width}"
    );
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        tile_width,
        layer = layer.as_str(),
        tag = ?tag,
        "tiles"
    );
    let grid = io::read_grid(input)?;
    let polys = grid_polys(&grid, GridCfg { tile_width });
    tracing::info!(
        columns = grid.len(),
        tiles = polys.tiles.len(),
        triangles = polys.triangles.len(),
        "grid_converted"
    );

    let (set, stats) = match layer {
        Layer::Merged => {
            let part = polys.merged_with(PartitionCfg::with_tolerance(match_tol));
            tracing::info!(
                output = part.stats.output,
                merges = part.stats.merges,
                rejected = part.stats.rejected,
                "partition_done"
            );
            (
                PolygonSet::new(layer.as_str(), &part.polygons, Some(part.stats)),
                Some(part.stats),
            )
        }
        other => (PolygonSet::new(other.as_str(), &polys.layer(other), None), None),
    };
    io::write_json(out, &set)?;

    let params = json!({
        "input": input.to_string_lossy(),
        "tile_width": tile_width,
        "layer": layer.as_str(),
        "match_tol": match_tol,
    });
    RunRecord::new("tiles", params, tag)
        .with_stats(stats)
        .write_beside(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let record = RunRecord::new("report", json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
