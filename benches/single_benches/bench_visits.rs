use super::params::*;
use classic_algo::algo::{acyclicity, bfs::*, dfs::*};
use classic_algo::graphs::AdjacencyList;
use criterion::{BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;

pub fn bench_visits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Visits");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for n in LARGE_SIZES {
        let graph = AdjacencyList::from_adjacency(random_arcs(n, 4));
        let parameter = format!("{} nodes", n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("Depth first", &parameter),
            &graph,
            |b, g| b.iter_with_large_drop(|| dfs_iterative(g, &0).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("Breadth first", &parameter),
            &graph,
            |b, g| b.iter_with_large_drop(|| bfs(g, &0, no_logging![])),
        );
        group.bench_with_input(
            BenchmarkId::new("Connected components", &parameter),
            &graph,
            |b, g| b.iter_with_large_drop(|| dfs_connected_components(g, no_logging![])),
        );
        group.bench_with_input(
            BenchmarkId::new("Acyclicity", &parameter),
            &graph,
            |b, g| b.iter(|| acyclicity(g, no_logging![])),
        );
    }
    group.finish();
}
