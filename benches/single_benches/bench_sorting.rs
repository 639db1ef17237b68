use super::params::*;
use classic_algo::algo::sorting::*;
use criterion::{BenchmarkId, Criterion, Throughput};

pub fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quadratic sorts");
    group.sample_size(NUM_SAMPLES);
    for n in SMALL_SIZES {
        let values = random_values(n);
        group.throughput(Throughput::Elements(n as u64));
        let sorts: [(&str, fn(&[u32]) -> Vec<u32>); 4] = [
            ("Bubble", bubble_sort),
            ("Selection", selection_sort),
            ("Insertion", insertion_sort),
            ("Binary insertion", insertion_sort_binary),
        ];
        for (name, sort) in sorts {
            group.bench_with_input(BenchmarkId::new(name, n), &values, |b, v| {
                b.iter_with_large_drop(|| sort(v))
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("Sorts");
    group.sample_size(NUM_SAMPLES);
    for n in LARGE_SIZES {
        let values = random_values(n);
        group.throughput(Throughput::Elements(n as u64));
        let sorts: [(&str, fn(&[u32]) -> Vec<u32>); 4] = [
            ("Merge", merge_sort),
            ("Quick (Lomuto)", quick_sort),
            ("Quick (Hoare)", quick_sort_hoare),
            ("Heap", heap_sort),
        ];
        for (name, sort) in sorts {
            group.bench_with_input(BenchmarkId::new(name, n), &values, |b, v| {
                b.iter_with_large_drop(|| sort(v))
            });
        }
        group.bench_with_input(BenchmarkId::new("Count", n), &values, |b, v| {
            b.iter_with_large_drop(|| count_sort(v).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("Radix", n), &values, |b, v| {
            b.iter_with_large_drop(|| radix_sort(v).unwrap())
        });
    }
    group.finish();
}
