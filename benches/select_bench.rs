//! Selection benchmark: single-pass runner-up scan vs sort-based rank path.
//!
//! Both paths must produce identical results; the scan is expected to win by
//! a widening margin as input size grows since it never allocates.
//!
//! Inputs are deterministic unsorted sequences with roughly half the values
//! duplicated, generated once per size and reused across iterations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rankset::select::{nth_largest_distinct, second_largest_distinct};
use std::hint::black_box;

const SIZES: [i64; 4] = [100, 1_000, 10_000, 100_000];

/// Deterministic scatter with duplicates: multiplicative hashing folded into
/// half the input range, so every size carries repeated values.
fn generate_scores(size: i64) -> Vec<i64> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761).rem_euclid(size / 2 + 1))
        .collect()
}

fn benchmark_single_pass_scan(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("select_second_largest");

    for size in SIZES {
        let scores = generate_scores(size);

        group.bench_with_input(BenchmarkId::new("single_pass", size), &scores, |bencher, scores| {
            bencher.iter(|| black_box(second_largest_distinct(black_box(scores).iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("sort_rank", size), &scores, |bencher, scores| {
            bencher.iter(|| black_box(nth_largest_distinct(black_box(scores).iter().copied(), 2)));
        });
    }

    group.finish();
}

fn benchmark_deep_rank(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("select_nth_largest");

    for size in [1_000, 100_000] {
        let scores = generate_scores(size);
        let mid_rank = usize::try_from(size / 4).expect("size fits in usize");

        group.bench_with_input(BenchmarkId::new("mid_rank", size), &scores, |bencher, scores| {
            bencher.iter(|| {
                black_box(nth_largest_distinct(
                    black_box(scores).iter().copied(),
                    mid_rank,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_pass_scan, benchmark_deep_rank);
criterion_main!(benches);
