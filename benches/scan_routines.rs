//! Benchmarks for the scan routines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanlab::{longest_ones, max_average, min_start_value, running_sum, running_sum_parallel, ScanConfig};

/// Deterministic mixed-sign input
fn create_input(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 7_919 % 201) - 100).collect()
}

/// Deterministic binary input with roughly one zero in three
fn create_bits(len: usize) -> Vec<u8> {
    (0..len).map(|i| u8::from(i % 3 != 0)).collect()
}

fn bench_window(c: &mut Criterion) {
    let nums = create_input(100_000);
    let bits = create_bits(100_000);

    c.bench_function("max_average_k64", |bench| {
        bench.iter(|| max_average(black_box(&nums), 64))
    });
    c.bench_function("longest_ones_k16", |bench| {
        bench.iter(|| longest_ones(black_box(&bits), 16))
    });
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_sum");
    let config = ScanConfig {
        parallel_threshold: 0,
        ..ScanConfig::default()
    };

    for &len in &[1_000usize, 100_000, 1_000_000] {
        let nums = create_input(len);
        group.bench_with_input(BenchmarkId::new("sequential", len), &nums, |bench, nums| {
            bench.iter(|| running_sum(black_box(nums)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", len), &nums, |bench, nums| {
            bench.iter(|| running_sum_parallel(black_box(nums), &config))
        });
    }
    group.finish();

    let nums = create_input(100_000);
    c.bench_function("min_start_value", |bench| {
        bench.iter(|| min_start_value(black_box(&nums)))
    });
}

criterion_group!(benches, bench_window, bench_prefix);
criterion_main!(benches);
