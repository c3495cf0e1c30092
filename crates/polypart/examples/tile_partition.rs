//! Partition a few random tile grids and print piece counts per layer.
//!
//! Usage:
//!   cargo run -p polypart --example tile_partition -- [seed]

use polypart::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let cfg = RandomGridCfg::default();
    println!("seed={seed} grid={}x{}", cfg.width, cfg.height);
    for index in 0..5 {
        let grid = random_grid(cfg, ReplayToken::new(seed, index));
        let polys = grid_polys(&grid, GridCfg::default());
        let part = polys.merged_with(PartitionCfg::default());
        let area: f64 = part.polygons.iter().map(Polygon::area).sum();
        println!(
            "#{index}: tiles={} triangles={} merged={} merges={} rejected={} area={area}",
            polys.tiles.len(),
            polys.triangles.len(),
            part.polygons.len(),
            part.stats.merges,
            part.stats.rejected,
        );
    }
}
