//! Criterion benchmarks for the 2D kernel.
//! Focus sizes: m in {10, 100, 1000, 10000} input points.
//! Hull inputs are unit-scale clouds; dense clouds are where the angular sort works hardest.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p convex2d

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use convex2d::api::{
    convex_hull, draw_point_cloud, draw_polygon_radial, point_in_convex_polygon,
    polygons_collide, RadialCfg, ReplayToken, Vec2, VertexCount,
};

fn bench_geom2(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom2");
    for &m in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("convex_hull", m), &m, |b, &m| {
            b.iter_batched(
                || draw_point_cloud(m, 1.0, ReplayToken { seed: 43, index: m as u64 }),
                |pts| {
                    let _hull = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(m),
            angle_jitter_frac: 0.0,
            radial_jitter: 0.0,
            base_radius: 1000.0,
            ..RadialCfg::default()
        };
        let poly = draw_polygon_radial(cfg, ReplayToken { seed: 44, index: 0 })
            .expect("regular polygon has a hull");
        let queries = draw_point_cloud(256, 1200.0, ReplayToken { seed: 45, index: 0 });
        group.bench_with_input(
            BenchmarkId::new("point_in_convex_polygon", m),
            &m,
            |b, _| {
                b.iter(|| {
                    queries
                        .iter()
                        .filter(|q| point_in_convex_polygon(&poly, **q))
                        .count()
                })
            },
        );

        let other: Vec<Vec2> = poly.iter().map(|p| p + Vec2::new(1500.0, 300.0)).collect();
        group.bench_with_input(BenchmarkId::new("polygons_collide", m), &m, |b, _| {
            b.iter(|| polygons_collide(&poly, &other))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geom2);
criterion_main!(benches);
