use anyhow::{bail, Context, Result};
use classic_algo::algo::{acyclicity, bfs::*, dfs::*, searching::*, sorting::*, top_sort};
use classic_algo::graphs::AdjacencyList;
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const SEED: u64 = 0;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let mut main_pl = progress_logger![];

    let section = std::env::args().nth(1).unwrap_or_else(|| "all".to_owned());
    let n = match std::env::args().nth(2) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Expected a number of elements, got {:?}", arg))?,
        None => 2_000,
    };

    match section.as_str() {
        "sorting" => sorting(&mut main_pl)?,
        "searching" => searching(&mut main_pl),
        "graph" => graph(&mut main_pl)?,
        "performance" => performance(n, &mut main_pl)?,
        "all" => {
            sorting(&mut main_pl)?;
            searching(&mut main_pl);
            graph(&mut main_pl)?;
            performance(n, &mut main_pl)?;
        }
        other => bail!(
            "Unknown section {:?} (expected sorting, searching, graph, performance or all)",
            other
        ),
    }

    Ok(())
}

fn sorting(pl: &mut impl ProgressLog) -> Result<()> {
    let values = [64, 34, 25, 12, 22, 11, 90, 5];
    pl.info(format_args!("Sorting {:?}", values));

    let sorts: [(&str, fn(&[i32]) -> Vec<i32>); 9] = [
        ("Bubble sort", bubble_sort),
        ("Selection sort", selection_sort),
        ("Insertion sort", insertion_sort),
        ("Binary insertion sort", insertion_sort_binary),
        ("Merge sort", merge_sort),
        ("Quicksort (Lomuto)", quick_sort),
        ("Quicksort (Hoare)", quick_sort_hoare),
        ("Heapsort", heap_sort),
        ("Max-heap", build_max_heap),
    ];
    for (name, sort) in sorts {
        pl.info(format_args!("{}: {:?}", name, sort(&values)));
    }
    pl.info(format_args!("Radix sort: {:?}", radix_sort(&values)?));
    pl.info(format_args!("Count sort: {:?}", count_sort(&values)?));

    if let Err(err) = count_sort(&[4, -1, 2]) {
        pl.info(format_args!("Count sort of [4, -1, 2]: {}", err));
    }

    let people = [("Alice", 25), ("Bob", 30), ("Charlie", 25), ("Dave", 20)];
    pl.info(format_args!(
        "People by age (stable): {:?}",
        count_sort_by_key(&people, |person| person.1)?
    ));
    pl.info(format_args!(
        "Strings: {:?}",
        radix_sort_strings(&["dab", "cab", "fad", "bad", "dad", "ebb", "ace"])?
    ));
    Ok(())
}

fn searching(pl: &mut impl ProgressLog) {
    let values = [64, 34, 25, 12, 22, 11, 90];
    pl.info(format_args!(
        "Linear search for 22 in {:?}: {:?}",
        values,
        linear_search(&values, &22)
    ));
    if let Some(result) = min_max(&values) {
        pl.info(format_args!(
            "Minimum {} at {}, maximum {} at {}",
            result.min, result.min_index, result.max, result.max_index
        ));
    }

    let sorted = [1, 2, 2, 2, 3, 4, 4, 5, 6, 6, 6, 7];
    pl.info(format_args!(
        "Binary search for 5 in {:?}: {:?}",
        sorted,
        binary_search(&sorted, &5)
    ));
    pl.info(format_args!(
        "Occurrences of 2: {:?}; insertion point of 4: {}",
        binary_search_range(&sorted, &2),
        insertion_point(&sorted, &4)
    ));

    let matrix = [[1, 3, 5, 7], [10, 11, 16, 20], [23, 30, 34, 60]];
    pl.info(format_args!(
        "16 in the sorted matrix: {:?}",
        search_matrix(&matrix, &16)
    ));

    let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    pl.info(format_args!(
        "Search path of 65 in the tree: {:?} (height {})",
        tree.search_path(&65),
        tree.height()
    ));
}

fn graph(pl: &mut impl ProgressLog) -> Result<()> {
    let graph = AdjacencyList::from_adjacency([
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'D', 'E']),
        ('C', vec!['A', 'F']),
        ('D', vec!['B']),
        ('E', vec!['B', 'F']),
        ('F', vec!['C', 'E']),
    ]);

    pl.info(format_args!("DFS from A: {:?}", dfs_recursive(&graph, &'A')?));
    pl.info(format_args!(
        "BFS from A: {:?}",
        bfs(&graph, &'A', no_logging![])
    ));
    pl.info(format_args!(
        "Shortest path from A to F: {:?} (distance {:?})",
        bfs_shortest_path(&graph, &'A', &'F', no_logging![]),
        bfs_shortest_distance(&graph, &'A', &'F', no_logging![])
    ));
    pl.info(format_args!(
        "All paths from A to F: {:?}",
        dfs_find_all_paths(&graph, &'A', &'F')
    ));
    pl.info(format_args!(
        "Levels from A: {:?}",
        bfs_level_order(&graph, &'A', no_logging![])
    ));
    let cyclic = has_cycle(&graph, pl);
    pl.info(format_args!("Has a cycle: {}", cyclic));
    pl.info(format_args!(
        "Bipartite: {}",
        bfs_bipartite(&graph, no_logging![]).is_bipartite
    ));

    let dag = AdjacencyList::from_adjacency([
        ("shirt", vec!["tie", "belt"]),
        ("tie", vec!["jacket"]),
        ("trousers", vec!["shoes", "belt"]),
        ("belt", vec!["jacket"]),
        ("socks", vec!["shoes"]),
    ]);
    if acyclicity(&dag, pl) {
        let order = top_sort(&dag, pl);
        pl.info(format_args!(
            "Dressing order: {:?}",
            dag.vertices_of(order.iter().copied())
        ));
    }
    Ok(())
}

fn performance(n: usize, pl: &mut impl ProgressLog) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values: Vec<u32> = (0..n).map(|_| rng.random_range(0..1_000_000)).collect();
    pl.info(format_args!("Sorting {} random values", n));

    let sorts: [(&str, fn(&[u32]) -> Vec<u32>); 8] = [
        ("Bubble sort", bubble_sort),
        ("Selection sort", selection_sort),
        ("Insertion sort", insertion_sort),
        ("Binary insertion sort", insertion_sort_binary),
        ("Merge sort", merge_sort),
        ("Quicksort (Lomuto)", quick_sort),
        ("Quicksort (Hoare)", quick_sort_hoare),
        ("Heapsort", heap_sort),
    ];
    for (name, sort) in sorts {
        let start = Instant::now();
        let sorted = sort(&values);
        let elapsed = start.elapsed();
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        pl.info(format_args!("{}: {:?}", name, elapsed));
    }

    let start = Instant::now();
    radix_sort(&values)?;
    pl.info(format_args!("Radix sort: {:?}", start.elapsed()));

    let start = Instant::now();
    count_sort(&values)?;
    pl.info(format_args!("Count sort: {:?}", start.elapsed()));

    Ok(())
}
