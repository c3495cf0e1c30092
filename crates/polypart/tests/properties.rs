//! Property tests for the convex partition over random tile grids and polygons.

use polypart::prelude::*;
use proptest::prelude::*;

fn signed_sum(polys: &[Polygon]) -> f64 {
    polys.iter().map(Polygon::signed_area_sum).sum()
}

fn repeats_vertex(p: &Polygon) -> bool {
    let pts = p.points();
    (0..pts.len()).any(|i| pts[i + 1..].contains(&pts[i]))
}

fn grid_cfg() -> impl Strategy<Value = (RandomGridCfg, ReplayToken)> {
    (1usize..10, 1usize..10, 0.0f64..=1.0, 0.0f64..=1.0, any::<u64>(), 0u64..64).prop_map(
        |(width, height, wall_density, half_tile_frac, seed, index)| {
            (
                RandomGridCfg {
                    width,
                    height,
                    wall_density,
                    half_tile_frac,
                },
                ReplayToken::new(seed, index),
            )
        },
    )
}

fn polygon_strategy() -> impl Strategy<Value = Polygon> {
    prop::collection::vec((-100i32..100, -100i32..100), 1..12).prop_map(|pts| {
        Polygon::new(
            pts.into_iter()
                .map(|(x, y)| Vec2::new(x as f64, y as f64))
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn partition_preserves_area((cfg, tok) in grid_cfg()) {
        let polys = grid_polys(&random_grid(cfg, tok), GridCfg::default());
        let merged = convex_partition(&polys.triangles);
        // Grid coordinates are small integers, so the sums are exact.
        prop_assert_eq!(signed_sum(&merged), signed_sum(&polys.triangles));
        let true_in: f64 = polys.triangles.iter().map(Polygon::area).sum();
        let true_out: f64 = merged.iter().map(Polygon::area).sum();
        prop_assert!((true_in - true_out).abs() < 1e-9);
    }

    #[test]
    fn partition_pieces_are_convex((cfg, tok) in grid_cfg()) {
        let polys = grid_polys(&random_grid(cfg, tok), GridCfg { tile_width: 1.0 });
        for piece in convex_partition(&polys.triangles) {
            prop_assert!(piece.is_convex(), "non-convex piece {:?}", piece.points());
        }
    }

    #[test]
    fn partition_pieces_never_repeat_a_vertex((cfg, tok) in grid_cfg()) {
        let polys = grid_polys(&random_grid(cfg, tok), GridCfg { tile_width: 1.0 });
        for piece in convex_partition(&polys.triangles) {
            prop_assert!(!repeats_vertex(&piece), "repeated vertex in {:?}", piece.points());
        }
    }

    #[test]
    fn partition_count_bound((cfg, tok) in grid_cfg()) {
        let polys = grid_polys(&random_grid(cfg, tok), GridCfg::default());
        let part = convex_partition_with(&polys.triangles, PartitionCfg::default());
        let n = polys.triangles.len();
        prop_assert!(part.polygons.len() <= n);
        if n > 0 {
            prop_assert!(!part.polygons.is_empty());
        }
        prop_assert_eq!(part.stats.output, part.stats.input - part.stats.merges);
    }

    #[test]
    fn partition_leaves_input_alone((cfg, tok) in grid_cfg()) {
        let polys = grid_polys(&random_grid(cfg, tok), GridCfg::default());
        let before = polys.triangles.clone();
        let first = convex_partition(&polys.triangles);
        prop_assert_eq!(&polys.triangles, &before);
        prop_assert_eq!(convex_partition(&polys.triangles), first);
    }

    #[test]
    fn index_navigation_is_inverse(poly in polygon_strategy()) {
        for i in 0..poly.len() {
            prop_assert_eq!(poly.prev_index(poly.next_index(i)), i);
            prop_assert_eq!(poly.next_index(poly.prev_index(i)), i);
        }
    }

    #[test]
    fn set_orientation_is_idempotent(poly in polygon_strategy(), ccw in any::<bool>()) {
        let target = if ccw { Orientation::Ccw } else { Orientation::Cw };
        let mut p = poly.clone();
        p.set_orientation(target);
        match poly.orientation() {
            Some(_) => prop_assert_eq!(p.orientation(), Some(target)),
            None => prop_assert_eq!(&p, &poly),
        }
        let once = p.clone();
        p.set_orientation(target);
        prop_assert_eq!(p, once);
    }
}
