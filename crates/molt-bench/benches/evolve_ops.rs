//! Criterion micro-benchmarks for structural evolution.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use molt_bench::{pricing_spec, reference_catalog};
use molt_evolve::{evolve, prep_evolve};

/// Benchmark: compile the pricing spec.
fn bench_compile(c: &mut Criterion) {
    let spec = pricing_spec();
    c.bench_function("evolve_compile_pricing", |b| {
        b.iter(|| black_box(prep_evolve(&spec)));
    });
}

/// Benchmark: apply a precompiled plan to 1K products.
fn bench_apply_prepared(c: &mut Criterion) {
    let plan = prep_evolve(&pricing_spec()).unwrap();
    let catalog = reference_catalog();
    c.bench_function("evolve_apply_prepared_1k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut target| {
                let _ = plan.apply(&mut target);
                black_box(target)
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: compile + apply in one call, for comparison with the prepared path.
fn bench_compile_and_apply(c: &mut Criterion) {
    let spec = pricing_spec();
    let catalog = reference_catalog();
    c.bench_function("evolve_compile_and_apply_1k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut target| {
                let _ = evolve(&spec, &mut target);
                black_box(target)
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_compile, bench_apply_prepared, bench_compile_and_apply);
criterion_main!(benches);
