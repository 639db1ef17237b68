/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use classic_algo::algo::bfs::*;
use classic_algo::algo::visits::{breadth_first, Done, Sequential};
use classic_algo::graphs::AdjacencyList;
use dsi_progress_logger::prelude::*;
use std::convert::Infallible;
use std::ops::ControlFlow::{self, Continue};

fn sample_graph() -> AdjacencyList<char> {
    AdjacencyList::from_adjacency([
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'D', 'E']),
        ('C', vec!['A', 'F']),
        ('D', vec!['B']),
        ('E', vec!['B', 'F']),
        ('F', vec!['C', 'E']),
    ])
}

#[test]
fn test_bfs_order() {
    let graph = sample_graph();
    assert_eq!(
        bfs(&graph, &'A', no_logging![]),
        vec!['A', 'B', 'C', 'D', 'E', 'F']
    );
    assert!(bfs(&graph, &'Z', no_logging![]).is_empty());
}

#[test]
fn test_shortest_path_and_distance() {
    let graph = sample_graph();
    assert_eq!(
        bfs_shortest_path(&graph, &'A', &'F', no_logging![]),
        Some(vec!['A', 'C', 'F'])
    );
    assert_eq!(
        bfs_shortest_distance(&graph, &'A', &'F', no_logging![]),
        Some(2)
    );
    assert_eq!(
        bfs_shortest_path(&graph, &'C', &'C', no_logging![]),
        Some(vec!['C'])
    );
    assert_eq!(
        bfs_shortest_distance(&graph, &'C', &'C', no_logging![]),
        Some(0)
    );

    let disconnected = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![0]), (2, vec![])]);
    assert_eq!(bfs_shortest_path(&disconnected, &0, &2, no_logging![]), None);
    assert_eq!(
        bfs_shortest_distance(&disconnected, &0, &2, no_logging![]),
        None
    );
}

#[test]
fn test_levels() {
    let graph = sample_graph();
    assert_eq!(
        bfs_level_order(&graph, &'A', no_logging![]),
        vec![vec!['A'], vec!['B', 'C'], vec!['D', 'E', 'F']]
    );
    assert!(bfs_level_order(&graph, &'Z', no_logging![]).is_empty());

    assert_eq!(
        bfs_vertices_at_distance(&graph, &'A', 1, no_logging![]),
        vec!['B', 'C']
    );
    assert_eq!(
        bfs_vertices_at_distance(&graph, &'A', 2, no_logging![]),
        vec!['D', 'E', 'F']
    );
    assert_eq!(
        bfs_vertices_at_distance(&graph, &'D', 3, no_logging![]),
        vec!['C', 'F']
    );
    assert!(bfs_vertices_at_distance(&graph, &'A', 3, no_logging![]).is_empty());
    assert_eq!(
        bfs_vertices_at_distance(&graph, &'A', 0, no_logging![]),
        vec!['A']
    );
}

#[test]
fn test_connected_components() {
    let graph = AdjacencyList::from_adjacency([
        ('A', vec!['B']),
        ('B', vec!['A']),
        ('C', vec!['D']),
        ('D', vec!['C']),
        ('E', vec![]),
    ]);
    assert_eq!(
        bfs_connected_components(&graph, no_logging![]),
        vec![vec!['A', 'B'], vec!['C', 'D'], vec!['E']]
    );
    assert_eq!(
        bfs_connected_components(&sample_graph(), no_logging![]),
        vec![vec!['A', 'B', 'C', 'D', 'E', 'F']]
    );
}

#[test]
fn test_bipartite() {
    let square = AdjacencyList::from_adjacency([
        ('A', vec!['C', 'D']),
        ('B', vec!['C', 'D']),
        ('C', vec!['A', 'B']),
        ('D', vec!['A', 'B']),
    ]);
    let bipartition = bfs_bipartite(&square, no_logging![]);
    assert!(bipartition.is_bipartite);
    assert_eq!(bipartition.sides.len(), 4);
    assert_eq!(bipartition.sides[&'A'], bipartition.sides[&'B']);
    assert_eq!(bipartition.sides[&'C'], bipartition.sides[&'D']);
    assert_ne!(bipartition.sides[&'A'], bipartition.sides[&'C']);

    let triangle = AdjacencyList::from_adjacency([
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'C']),
        ('C', vec!['A', 'B']),
    ]);
    assert!(!bfs_bipartite(&triangle, no_logging![]).is_bipartite);

    // Each component is colored starting from the left side
    let two_edges = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![0]), (2, vec![3]), (3, vec![2])]);
    let bipartition = bfs_bipartite(&two_edges, no_logging![]);
    assert!(bipartition.is_bipartite);
    assert_eq!(bipartition.sides[&2], Side::Left);
    assert_eq!(bipartition.sides[&3], Side::Right);
}

#[test]
fn test_visit_distances() {
    let graph = sample_graph();
    let mut visit = breadth_first::Seq::new(&graph);
    let mut distances = vec![usize::MAX; 6];
    visit
        .visit(
            0,
            |event| -> ControlFlow<Infallible, ()> {
                if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
                    distances[curr] = distance;
                }
                Continue(())
            },
            no_logging![],
        )
        .done();
    assert_eq!(distances, vec![0, 1, 1, 2, 2, 2]);
}
