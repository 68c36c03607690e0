use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use fractalsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Increase time for the O(n * sqrt(n)) top level

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    let random_values: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Elements(count as u64));

    // Fractalsort
    group.bench_function("fractal_sort (in-place)", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| fractal_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| data.sort(),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
