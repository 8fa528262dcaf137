//! Benchmarks for the window scanners
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use physio_spectral::{
    AdaptiveConfig, AdaptivePolicy, AdaptiveWindowScanner, FixedWindowConfig, FixedWindowScanner,
};

fn test_signal(len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| (0.05 * n as f64).sin() + 0.2 * (0.31 * n as f64).sin())
        .collect()
}

fn bench_fixed_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_scan");

    for size in [16_384usize, 65_536] {
        let signal = test_signal(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &signal, |b, signal| {
            let mut scanner = FixedWindowScanner::new(FixedWindowConfig {
                window_size: 2048,
                step_size: 512,
            });
            b.iter(|| scanner.scan(black_box(signal)).unwrap());
        });
    }

    group.finish();
}

fn bench_adaptive_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_scan");

    for size in [16_384usize, 65_536] {
        let signal = test_signal(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &signal, |b, signal| {
            let mut scanner = AdaptiveWindowScanner::new(AdaptiveConfig {
                window_min: 512,
                window_max: 2048,
                step_size: 512,
                policy: AdaptivePolicy::default(),
            });
            b.iter(|| scanner.scan(black_box(signal)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_scan, bench_adaptive_scan);
criterion_main!(benches);
