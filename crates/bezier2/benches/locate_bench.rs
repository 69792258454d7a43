//! Criterion benchmarks for point location on Bézier triangles.
//! Focus degrees: {1, 2, 4}.

use bezier2::sample::{draw_triangle_nodes, NetCfg, ReplayToken};
use bezier2::triangle::{evaluate_cartesian, locate_point, newton_refine, subdivide_nodes};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    for &degree in &[1usize, 2, 4] {
        let nodes = draw_triangle_nodes(
            degree,
            NetCfg::default(),
            ReplayToken {
                seed: 47,
                index: degree as u64,
            },
        );
        let target = evaluate_cartesian(&nodes, degree, 0.3, 0.4);

        group.bench_with_input(BenchmarkId::new("locate_point", degree), &degree, |b, _| {
            b.iter(|| locate_point(&nodes, degree, target.x, target.y))
        });

        group.bench_with_input(BenchmarkId::new("newton_refine", degree), &degree, |b, _| {
            b.iter(|| newton_refine(&nodes, degree, target.x, target.y, 0.25, 0.35))
        });

        group.bench_with_input(
            BenchmarkId::new("subdivide_nodes", degree),
            &degree,
            |b, _| b.iter(|| subdivide_nodes(&nodes, degree)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
