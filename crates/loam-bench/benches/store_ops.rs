//! Criterion micro-benchmarks for store path resolution and writes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_store::{ManualClock, Node, Store};
use std::time::{Duration, SystemTime};

/// A store holding `n` worlds, each a map with a `grid` leaf.
fn populated(n: usize) -> Store<Vec<u8>, ManualClock> {
    let mut store = Store::with_clock(ManualClock::new());
    store.put("worlds", Node::<Vec<u8>>::list()).unwrap();
    for i in 0..n {
        store
            .put(
                &format!("worlds.{i}"),
                Node::from([("grid", Node::Leaf(vec![0u8; 4096]))]),
            )
            .unwrap();
    }
    store
}

fn bench_fetch(c: &mut Criterion) {
    let mut store = populated(100);
    c.bench_function("store_fetch/nested_path", |b| {
        b.iter(|| black_box(store.fetch("worlds.50.grid").is_some()))
    });
}

fn bench_put(c: &mut Criterion) {
    let mut store = populated(100);
    c.bench_function("store_put/replace_leaf", |b| {
        b.iter(|| {
            let old = store
                .put("worlds.50.grid", Node::Leaf(vec![1u8; 4096]))
                .unwrap();
            black_box(old.is_some())
        })
    });
}

fn bench_eviction_sweep(c: &mut Criterion) {
    c.bench_function("store_eviction/100_stale_keys", |b| {
        b.iter(|| {
            let mut store = populated(100);
            let deadline = SystemTime::UNIX_EPOCH;
            for i in 0..100 {
                store.expire(&format!("worlds.{i}"), deadline);
            }
            store.clock().advance(Duration::from_secs(60));
            // First access pays for the whole sweep.
            black_box(store.fetch("worlds").map(Node::len))
        })
    });
}

criterion_group!(benches, bench_fetch, bench_put, bench_eviction_sweep);
criterion_main!(benches);
