//! Benchmarks for the iteration adapters.
//!
//! Each adapter is measured against the hand-written loop it replaces.

use std::collections::{BTreeMap, HashMap};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rangekit_core::prelude::*;

/// Benchmark reversible traversal against plain `iter()` / `iter().rev()`.
fn bench_reversible(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversible");

    for size in [100, 1000, 10000, 100000] {
        let data: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("native_rev", size), &data, |b, data| {
            b.iter(|| black_box(data.iter().rev().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("backward", size), &data, |b, data| {
            b.iter(|| {
                let view = reversible(data, black_box(Direction::Backward));
                black_box(view.into_iter().sum::<u64>())
            });
        });

        group.bench_with_input(BenchmarkId::new("forward", size), &data, |b, data| {
            b.iter(|| {
                let view = reversible(data, black_box(Direction::Forward));
                black_box(view.into_iter().sum::<u64>())
            });
        });
    }

    group.finish();
}

fn bench_reversible_mut(c: &mut Criterion) {
    let mut group = c.benchmark_group("reversible_mut");

    for size in [1000, 100000] {
        let mut data: Vec<u64> = (0..size).collect();

        group.bench_function(BenchmarkId::new("increment", size), |b| {
            b.iter(|| {
                for value in reversible_mut(&mut data, true) {
                    *value = value.wrapping_add(1);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark lockstep traversal against indexed access and `zip`.
fn bench_synchronized(c: &mut Criterion) {
    let mut group = c.benchmark_group("synchronized");

    for size in [100u32, 1000, 10000] {
        let a: Vec<f64> = (0..size).map(f64::from).collect();
        let b: Vec<f64> = (0..size).map(|i| f64::from(i) * 0.5).collect();
        let w: Vec<f64> = (0..size + 7).map(|i| f64::from(i % 3)).collect();

        group.bench_function(BenchmarkId::new("indexed", size), |bench| {
            bench.iter(|| {
                let len = a.len().min(b.len()).min(w.len());
                let mut acc = 0.0;
                for i in 0..len {
                    acc += (a[i] - b[i]) * w[i];
                }
                black_box(acc)
            });
        });

        group.bench_function(BenchmarkId::new("zip", size), |bench| {
            bench.iter(|| {
                let acc: f64 = a.iter().zip(&b).zip(&w).map(|((x, y), z)| (x - y) * z).sum();
                black_box(acc)
            });
        });

        group.bench_function(BenchmarkId::new("lockstep", size), |bench| {
            bench.iter(|| {
                let acc: f64 = synchronized((&a, &b, &w))
                    .into_iter()
                    .map(|(x, y, z)| (x - y) * z)
                    .sum();
                black_box(acc)
            });
        });
    }

    group.finish();
}

/// Benchmark key/value traversal over ordered and hashed maps.
fn bench_key_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_values");

    for size in [100, 10000] {
        let ordered: BTreeMap<u32, u32> = (0..size).map(|i| (i, i * 2)).collect();
        let hashed: HashMap<u32, u32> = ordered.iter().map(|(k, v)| (*k, *v)).collect();

        group.bench_with_input(BenchmarkId::new("btree_native", size), &ordered, |b, map| {
            b.iter(|| black_box(map.iter().map(|(k, v)| k ^ v).fold(0, u32::wrapping_add)));
        });

        group.bench_with_input(BenchmarkId::new("btree", size), &ordered, |b, map| {
            b.iter(|| {
                let mixed = key_values(map).into_iter().map(|(k, v)| k ^ v);
                black_box(mixed.fold(0, u32::wrapping_add))
            });
        });

        group.bench_with_input(BenchmarkId::new("hash", size), &hashed, |b, map| {
            b.iter(|| {
                let mixed = key_values(map).into_iter().map(|(k, v)| k ^ v);
                black_box(mixed.fold(0, u32::wrapping_add))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_reversible,
    bench_reversible_mut,
    bench_synchronized,
    bench_key_values
);
criterion_main!(benches);
