//! Criterion micro-benchmarks for projection and un-projection.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use molt_bench::{internal_fields, public_view, reference_catalog, stress_catalog};
use molt_project::{project, unproject};
use molt_util::memoize;

/// Benchmark: project the public view of 1K products.
fn bench_project_1k(c: &mut Criterion) {
    let catalog = reference_catalog();
    let view = public_view();
    c.bench_function("project_public_view_1k", |b| {
        b.iter(|| black_box(project(&view, Some(&catalog))));
    });
}

/// Benchmark: project the public view of 50K products.
fn bench_project_50k(c: &mut Criterion) {
    let catalog = stress_catalog();
    let view = public_view();
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("project_public_view_50k", |b| {
        b.iter(|| black_box(project(&view, Some(&catalog))));
    });
    group.finish();
}

/// Benchmark: strip internal fields from 1K products in place.
fn bench_unproject_1k(c: &mut Criterion) {
    let catalog = reference_catalog();
    let internal = internal_fields();
    c.bench_function("unproject_internal_1k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut target| {
                unproject(&internal, &mut target);
                black_box(target)
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: repeated projection served from a memo cache.
fn bench_memoized_project(c: &mut Criterion) {
    let catalog = reference_catalog();
    let view = public_view();
    let mut cached = memoize(|_: &u8| project(&view, Some(&catalog)));
    c.bench_function("project_memo_hit_1k", |b| {
        b.iter(|| black_box(cached.call(0)));
    });
}

criterion_group!(
    benches,
    bench_project_1k,
    bench_project_50k,
    bench_unproject_1k,
    bench_memoized_project
);
criterion_main!(benches);
