use super::params::*;
use classic_algo::algo::searching::*;
use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;

pub fn bench_searching(c: &mut Criterion) {
    let mut group = c.benchmark_group("Searching");
    group.sample_size(NUM_SAMPLES);
    for n in LARGE_SIZES {
        let mut values = random_values(n);
        values.sort_unstable();
        let target = values[n / 3];

        group.bench_with_input(BenchmarkId::new("Linear", n), &values, |b, v| {
            b.iter(|| linear_search(v, black_box(&target)))
        });
        group.bench_with_input(BenchmarkId::new("Binary", n), &values, |b, v| {
            b.iter(|| binary_search(v, black_box(&target)))
        });
        group.bench_with_input(BenchmarkId::new("Binary recursive", n), &values, |b, v| {
            b.iter(|| binary_search_recursive(v, black_box(&target)))
        });
        group.bench_with_input(BenchmarkId::new("Binary range", n), &values, |b, v| {
            b.iter(|| binary_search_range(v, black_box(&target)))
        });

        let tree: BinarySearchTree<_> = random_values(n).into_iter().collect();
        group.bench_with_input(BenchmarkId::new("Tree", n), &tree, |b, t| {
            b.iter(|| t.contains(black_box(&target)))
        });
    }
    group.finish();
}
