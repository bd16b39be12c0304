//! Criterion micro-benchmarks for stepping, neighbor sampling, and
//! lineage classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_bench::{reference_world, stress_world};
use loam_core::Grid;
use loam_test_utils::fixtures::soup;
use loam_world::fingerprint::grid_fingerprint;
use loam_world::Torus;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("reference_64x64", |b| {
        let world = reference_world(42).unwrap();
        b.iter(|| {
            let mut w = world.clone();
            w.tick();
            black_box(w.generation())
        });
    });

    group.bench_function("stress_256x256", |b| {
        let world = stress_world(42).unwrap();
        b.iter(|| {
            let mut w = world.clone();
            w.tick();
            black_box(w.generation())
        });
    });

    group.finish();
}

fn bench_run_capped(c: &mut Criterion) {
    c.bench_function("run_capped_100/reference_64x64", |b| {
        let world = reference_world(42).unwrap();
        b.iter(|| {
            let mut w = world.clone();
            black_box(w.run_capped(100))
        });
    });
}

fn bench_neighbour_sampling(c: &mut Criterion) {
    let grid = Grid::from_rows(&soup(64, 64, 350, 42)).unwrap();
    let torus = Torus::new(64, 64);

    c.bench_function("live_neighbours/full_sweep_64x64", |b| {
        b.iter(|| {
            let mut total: u64 = 0;
            for y in 0..64 {
                for x in 0..64 {
                    total += torus.live_neighbours(&grid, x, y) as u64;
                }
            }
            black_box(total)
        });
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let small = Grid::from_rows(&soup(64, 64, 350, 7)).unwrap();
    let large = Grid::from_rows(&soup(256, 256, 350, 7)).unwrap();

    let mut group = c.benchmark_group("fingerprint");
    group.bench_function("64x64", |b| b.iter(|| black_box(grid_fingerprint(&small))));
    group.bench_function("256x256", |b| b.iter(|| black_box(grid_fingerprint(&large))));
    group.finish();
}

criterion_group!(
    benches,
    bench_tick,
    bench_run_capped,
    bench_neighbour_sampling,
    bench_fingerprint
);
criterion_main!(benches);
