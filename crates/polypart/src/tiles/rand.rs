//! Random tile grids (seeded, replayable).
//!
//! Purpose
//! - Produce wall grids for property tests, benches and the CLI demo. A draw is
//!   fully determined by its `ReplayToken`, so failing cases can be replayed by
//!   `(seed, index)`.
//!
//! Model
//! - Each cell is a wall with probability `wall_density`; a wall cell becomes a
//!   half tile (uniform over the four corners) with probability `half_tile_frac`,
//!   otherwise a full square. Floor cells get code `0`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::TileShape;

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGridCfg {
    /// Number of columns (`grid.len()`).
    pub width: usize,
    /// Number of rows (`grid[xi].len()`).
    pub height: usize,
    /// Probability that a cell is a wall. Clamped to [0, 1].
    pub wall_density: f64,
    /// Probability that a wall cell is a half tile. Clamped to [0, 1].
    pub half_tile_frac: f64,
}

impl Default for RandomGridCfg {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            wall_density: 0.45,
            half_tile_frac: 0.2,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

const HALF_TILES: [TileShape; 4] = [
    TileShape::LowerLeft,
    TileShape::UpperLeft,
    TileShape::UpperRight,
    TileShape::LowerRight,
];

/// Draw a `width × height` grid of cell codes, indexed `grid[xi][yi]`.
pub fn random_grid(cfg: RandomGridCfg, tok: ReplayToken) -> Vec<Vec<f64>> {
    let mut rng = tok.to_std_rng();
    let density = cfg.wall_density.clamp(0.0, 1.0);
    let half = cfg.half_tile_frac.clamp(0.0, 1.0);
    (0..cfg.width)
        .map(|_| {
            (0..cfg.height)
                .map(|_| {
                    if !rng.gen_bool(density) {
                        0.0
                    } else if rng.gen_bool(half) {
                        HALF_TILES[rng.gen_range(0..HALF_TILES.len())].code()
                    } else {
                        TileShape::Square.code()
                    }
                })
                .collect()
        })
        .collect()
}
