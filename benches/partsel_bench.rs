//! Criterion benchmarks for u-partsel.
//!
//! Compares pivot strategies on random and presorted input, and selection
//! against a full sort for finding the median.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_partsel::pivot::Pivot;
use u_partsel::quicksort::{QuicksortConfig, QuicksortRunner};
use u_partsel::random::create_rng;
use u_partsel::selection::{SelectionConfig, SelectionRunner};

fn random_input(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = create_rng(seed);
    (0..n).map(|_| rng.random_range(0..10_000)).collect()
}

fn permutation(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = create_rng(seed);
    let mut items: Vec<u32> = (0..n as u32).collect();
    u_partsel::random::shuffle(&mut items, &mut rng);
    items
}

// ===========================================================================
// Quicksort: pivot strategies
// ===========================================================================

fn bench_quicksort_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort_random");

    for &n in &[1_000usize, 10_000, 100_000] {
        let input = random_input(n, 42);
        for pivot in Pivot::ALL {
            let config = QuicksortConfig::default().with_pivot(pivot).with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(pivot.name(), n),
                &(input.clone(), config),
                |b, (input, config)| {
                    b.iter(|| {
                        let mut data = input.clone();
                        let stats = QuicksortRunner::run(black_box(&mut data), black_box(config));
                        black_box(stats)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_quicksort_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort_sorted");
    group.sample_size(10);

    // First/last pivots are quadratic here; keep n small.
    let n = 5_000usize;
    let input: Vec<u32> = (0..n as u32).collect();
    for pivot in Pivot::ALL {
        let config = QuicksortConfig::default().with_pivot(pivot).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(pivot.name()),
            &(input.clone(), config),
            |b, (input, config)| {
                b.iter(|| {
                    let mut data = input.clone();
                    black_box(QuicksortRunner::run(black_box(&mut data), black_box(config)))
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Selection vs. sort for the median
// ===========================================================================

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for &n in &[1_000usize, 10_000, 100_000] {
        let input = permutation(n, 7);
        let config = SelectionConfig::default().with_seed(7);

        group.bench_with_input(BenchmarkId::new("select", n), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                let median = *SelectionRunner::run(&mut data, n / 2, &config).unwrap();
                black_box(median)
            })
        });

        group.bench_with_input(BenchmarkId::new("sort", n), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                u_partsel::sort(&mut data);
                black_box(data[n / 2])
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quicksort_random, bench_quicksort_sorted, bench_median);
criterion_main!(benches);
