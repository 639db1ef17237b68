//! Depth-first traversals of [adjacency lists](AdjacencyList).
//!
//! All traversals enumerate neighbors left to right, in the order of the
//! adjacency lists. [`dfs_recursive`] and [`dfs_iterative`] produce the same
//! preorder; the latter does not consume call stack.

use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred, SeqNoPred, SeqPred, SimplePaths},
    Done, Sequential, StoppedWhenDone,
};
use crate::graphs::{AdjacencyList, GraphError, RandomAccessGraph};
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use std::hash::Hash;
use std::ops::ControlFlow::{self, Break, Continue};
use sux::bits::BitVec;

/// Returns the vertices reachable from `start` in depth-first preorder, using
/// recursion.
///
/// The recursion depth is the length of the longest visit path; use
/// [`dfs_iterative`] on graphs with long paths.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `start` is not a key of the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dfs::dfs_recursive;
/// use classic_algo::graphs::AdjacencyList;
///
/// let graph = AdjacencyList::from_adjacency([
///     ('A', vec!['B', 'C']),
///     ('B', vec!['D']),
///     ('C', vec![]),
///     ('D', vec!['A']),
/// ]);
/// assert_eq!(dfs_recursive(&graph, &'A')?, vec!['A', 'B', 'D', 'C']);
/// # Ok::<(), classic_algo::graphs::GraphError>(())
/// ```
pub fn dfs_recursive<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
) -> Result<Vec<V>, GraphError> {
    let root = graph.key_node(start).ok_or(GraphError::UnknownVertex)?;
    let mut visited = BitVec::new(graph.num_nodes());
    let mut order = Vec::with_capacity(graph.num_nodes());
    preorder(graph, root, &mut visited, &mut order);
    Ok(graph.vertices_of(order))
}

fn preorder(
    graph: &impl RandomAccessGraph,
    node: usize,
    visited: &mut BitVec,
    order: &mut Vec<usize>,
) {
    visited.set(node, true);
    order.push(node);
    for succ in graph.successors(node) {
        if !visited.get(succ) {
            preorder(graph, succ, visited, order);
        }
    }
}

/// Returns the vertices reachable from `start` in depth-first preorder, using
/// an explicit stack.
///
/// Neighbors are pushed in reverse order, so that they are popped left to
/// right: the result is the same as that of [`dfs_recursive`].
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `start` is not a key of the graph.
pub fn dfs_iterative<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
) -> Result<Vec<V>, GraphError> {
    let root = graph.key_node(start).ok_or(GraphError::UnknownVertex)?;
    let mut visited = BitVec::new(graph.num_nodes());
    let mut order = Vec::with_capacity(graph.num_nodes());
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if visited.get(node) {
            continue;
        }
        visited.set(node, true);
        order.push(node);
        stack.extend(
            graph
                .successors(node)
                .rev()
                .filter(|&succ| !visited.get(succ)),
        );
    }

    Ok(graph.vertices_of(order))
}

/// Returns the first path from `start` to `end` found by a depth-first
/// search, or `None` if `end` is not reachable.
///
/// The path never goes through the same vertex twice, but it is not
/// necessarily a shortest path. If `start` is equal to `end` the path is made
/// of `start` alone, even if the vertex does not belong to the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dfs::dfs_find_path;
/// use classic_algo::graphs::AdjacencyList;
///
/// let graph = AdjacencyList::from_adjacency([
///     (1, vec![2, 4]),
///     (2, vec![3]),
///     (3, vec![4]),
///     (4, vec![]),
/// ]);
/// assert_eq!(dfs_find_path(&graph, &1, &4), Some(vec![1, 2, 3, 4]));
/// assert_eq!(dfs_find_path(&graph, &4, &1), None);
/// ```
pub fn dfs_find_path<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    end: &V,
) -> Option<Vec<V>> {
    if start == end {
        return Some(vec![start.clone()]);
    }
    let source = graph.key_node(start)?;
    let target = graph.node(end)?;
    SimplePaths::new(graph, source, target)
        .next()
        .map(|path| graph.vertices_of(path))
}

/// Returns all simple paths from `start` to `end`, in the order in which a
/// depth-first search finds them.
///
/// The number of simple paths can be exponential in the number of vertices;
/// use [`SimplePaths`] to enumerate them lazily.
pub fn dfs_find_all_paths<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    end: &V,
) -> Vec<Vec<V>> {
    if start == end {
        return vec![vec![start.clone()]];
    }
    match (graph.key_node(start), graph.node(end)) {
        (Some(source), Some(target)) => SimplePaths::new(graph, source, target)
            .map(|path| graph.vertices_of(path))
            .collect(),
        _ => Vec::new(),
    }
}

/// Returns whether an undirected graph contains a cycle.
///
/// Every undirected edge appears as two arcs, so the arc leading back to the
/// parent in the visit tree is not considered a cycle; any other arc leading
/// to a known vertex, self-loops included, closes a cycle.
///
/// The visit starts from each key of the graph, in insertion order.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dfs::has_cycle;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let path = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![0, 2]), (2, vec![1])]);
/// assert!(!has_cycle(&path, no_logging![]));
///
/// let triangle = AdjacencyList::from_adjacency([(0, vec![1, 2]), (1, vec![0, 2]), (2, vec![0, 1])]);
/// assert!(has_cycle(&triangle, no_logging![]));
/// ```
pub fn has_cycle<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    pl: &mut impl ProgressLog,
) -> bool {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPred::new(graph);
    // The root of each visit tree has no parent
    let mut parent: Vec<Option<usize>> = vec![None; num_nodes];

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Looking for cycles...");

    let found = visit
        .visit_roots(
            0..graph.num_keys(),
            |event| {
                match event {
                    EventPred::Previsit { curr, pred, .. } => {
                        parent[curr] = (curr != pred).then_some(pred);
                    }
                    EventPred::Revisit { curr, pred, .. } if parent[pred] != Some(curr) => {
                        return Break(StoppedWhenDone);
                    }
                    _ => {}
                }
                Continue(())
            },
            pl,
        )
        .is_break();

    pl.done();
    found
}

/// Returns the connected components of an undirected graph.
///
/// A depth-first visit is started from each key not yet visited, in insertion
/// order; each component lists its vertices in depth-first preorder.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::dfs::dfs_connected_components;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjacencyList::from_adjacency([
///     ('A', vec!['B']),
///     ('B', vec!['A']),
///     ('C', vec![]),
///     ('D', vec!['E']),
///     ('E', vec!['D']),
/// ]);
/// assert_eq!(
///     dfs_connected_components(&graph, no_logging![]),
///     vec![vec!['A', 'B'], vec!['C'], vec!['D', 'E']]
/// );
/// ```
pub fn dfs_connected_components<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    pl: &mut impl ProgressLog,
) -> Vec<Vec<V>> {
    let mut visit = SeqNoPred::new(graph);
    let mut components: Vec<Vec<usize>> = Vec::new();

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Computing connected components...");

    visit
        .visit_roots(
            0..graph.num_keys(),
            |event| -> ControlFlow<Infallible, ()> {
                match event {
                    EventNoPred::Init { .. } => components.push(Vec::new()),
                    EventNoPred::Previsit { curr, .. } => {
                        if let Some(component) = components.last_mut() {
                            component.push(curr);
                        }
                    }
                    _ => {}
                }
                Continue(())
            },
            pl,
        )
        .done();

    pl.done();
    components
        .into_iter()
        .map(|component| graph.vertices_of(component))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;

    fn chain(n: usize) -> AdjacencyList<usize> {
        AdjacencyList::from_adjacency((0..n).map(|i| (i, if i + 1 < n { vec![i + 1] } else { vec![] })))
    }

    #[test]
    fn test_unknown_start() {
        let graph = chain(3);
        assert_eq!(dfs_recursive(&graph, &7), Err(GraphError::UnknownVertex));
        assert_eq!(dfs_iterative(&graph, &7), Err(GraphError::UnknownVertex));
    }

    #[test]
    fn test_neighbor_only_start() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1])]);
        assert_eq!(dfs_iterative(&graph, &1), Err(GraphError::UnknownVertex));
        assert_eq!(dfs_iterative(&graph, &0), Ok(vec![0, 1]));
    }

    #[test]
    fn test_long_chain_iterative() {
        let graph = chain(100_000);
        let order = dfs_iterative(&graph, &0).unwrap();
        assert_eq!(order.len(), 100_000);
        assert!(order.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![0, 1])]);
        assert!(has_cycle(&graph, no_logging![]));
    }

    #[test]
    fn test_parallel_arcs_to_parent() {
        // Repeated arcs back to the parent are not cycles
        let graph = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![0, 0])]);
        assert!(!has_cycle(&graph, no_logging![]));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let graph = AdjacencyList::from_adjacency([
            (0, vec![1]),
            (1, vec![0]),
            (2, vec![3, 4]),
            (3, vec![2, 4]),
            (4, vec![2, 3]),
        ]);
        assert!(has_cycle(&graph, no_logging![]));
    }

    #[test]
    fn test_paths_with_unknown_vertices() {
        let graph = chain(3);
        assert_eq!(dfs_find_path(&graph, &9, &9), Some(vec![9]));
        assert_eq!(dfs_find_path(&graph, &0, &9), None);
        assert!(dfs_find_all_paths(&graph, &9, &0).is_empty());
        assert_eq!(dfs_find_all_paths(&graph, &0, &2), vec![vec![0, 1, 2]]);
    }
}
