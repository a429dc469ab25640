//! Benchmarks for reconciliation and page batching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harvest::catalog::{ApprenticeshipRecord, StandardRecord};
use harvest::listing::batch_pages;
use harvest::reconcile::reconcile;

/// Catalogs of `size` entries where roughly half of the keys line up.
fn catalogs(size: u32) -> (Vec<StandardRecord>, Vec<ApprenticeshipRecord>) {
    let standards = (0..size)
        .filter_map(|i| StandardRecord::new(&format!("Trade {i}"), 1 + i % 7, 12 + i % 24, 9000).ok())
        .collect();
    let apprenticeships = (0..size)
        .filter_map(|i| {
            let j = i + size / 2;
            ApprenticeshipRecord::new(&format!("Trade {j}"), 1 + j % 7, "(detail)", 12 + j % 24).ok()
        })
        .collect();
    (standards, apprenticeships)
}

fn reconcile_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    for size in [100, 1_000, 10_000] {
        let (standards, apprenticeships) = catalogs(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| reconcile(black_box(&standards), black_box(&apprenticeships)));
        });
    }
    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    c.bench_function("batch_pages", |b| {
        b.iter(|| batch_pages(black_box(5_000), black_box(3)));
    });
}

criterion_group!(benches, reconcile_benchmark, batch_benchmark);
criterion_main!(benches);
