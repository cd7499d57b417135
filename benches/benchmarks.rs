//! Benchmarks for medscan
//!
//! Run with: cargo bench

#[cfg(not(feature = "parallel"))]
compile_error!("Benchmarks require the parallel feature. Run: cargo bench");

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use medscan::counting::{scan, scan_sharded};
use medscan::{median, median_with, SolverConfig};

fn uniform_data(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1e6..1e6)).collect()
}

// ============================================================================
// Counting scan
// ============================================================================

fn bench_counting(c: &mut Criterion) {
    let data = uniform_data(1_000_000, 42);
    let partition = 0.0;

    let mut group = c.benchmark_group("counting");
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("scan_1m", |b| {
        b.iter(|| black_box(scan(&data, black_box(partition))));
    });

    for shards in [2usize, 4, 8] {
        group.bench_function(format!("scan_sharded_1m_s{}", shards), |b| {
            b.iter(|| black_box(scan_sharded(&data, black_box(partition), shards)));
        });
    }

    group.finish();
}

// ============================================================================
// Median solve
// ============================================================================

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for n in [10_000usize, 100_000, 1_000_000] {
        let data = uniform_data(n, 7);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("sequential_{}", n), |b| {
            b.iter(|| black_box(median(&data)));
        });
    }

    let data = uniform_data(1_000_000, 7);
    for shards in [2usize, 4, 8] {
        let config = SolverConfig {
            shards,
            ..SolverConfig::default()
        };
        group.bench_function(format!("sharded_1m_s{}", shards), |b| {
            b.iter(|| black_box(median_with(&data, &config)));
        });
    }

    group.bench_function("duplicate_heavy_1m", |b| {
        let mut rng = StdRng::seed_from_u64(11);
        let data: Vec<f64> = (0..1_000_000).map(|_| rng.gen_range(0..100) as f64).collect();
        b.iter(|| black_box(median(&data)));
    });

    group.finish();
}

criterion_group!(benches, bench_counting, bench_median);
criterion_main!(benches);
