//! Breadth-first traversals of [adjacency lists](AdjacencyList).
//!
//! All traversals are built on [`breadth_first::Seq`], so vertices are
//! discovered level by level and, within a level, in the order of the
//! adjacency lists. Distances and paths are therefore shortest ones, and ties
//! are broken in favor of the first arc found.
//!
//! Traversals starting from a vertex that is not in the graph return an
//! empty result.

use crate::algo::visits::{
    breadth_first::{self, EventPred},
    Done, Sequential,
};
use crate::graphs::{AdjacencyList, RandomAccessGraph};
use dsi_progress_logger::ProgressLog;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::ops::ControlFlow::{self, Break, Continue};

/// Returns the vertices reachable from `start` in breadth-first order.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs::bfs;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjacencyList::from_adjacency([
///     ('A', vec!['B', 'C']),
///     ('B', vec!['D']),
///     ('C', vec!['D']),
///     ('D', vec![]),
/// ]);
/// assert_eq!(bfs(&graph, &'A', no_logging![]), vec!['A', 'B', 'C', 'D']);
/// assert!(bfs(&graph, &'Z', no_logging![]).is_empty());
/// ```
pub fn bfs<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    pl: &mut impl ProgressLog,
) -> Vec<V> {
    let Some(root) = graph.key_node(start) else {
        return Vec::new();
    };
    let mut visit = breadth_first::Seq::new(graph);
    let mut order = Vec::new();

    pl.item_name("node");
    pl.expected_updates(None);
    pl.start("Visiting graph...");

    visit
        .visit(
            root,
            |event| -> ControlFlow<Infallible, ()> {
                if let EventPred::Unknown { curr, .. } = event {
                    order.push(curr);
                }
                Continue(())
            },
            pl,
        )
        .done();

    pl.done();
    graph.vertices_of(order)
}

/// Returns a shortest path from `start` to `end`, or `None` if `end` is not
/// reachable.
///
/// Among shortest paths, the one returned is the first discovered, following
/// the order of the adjacency lists. If `start` is equal to `end` the path is
/// made of `start` alone.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs::bfs_shortest_path;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjacencyList::from_adjacency([
///     (1, vec![2, 4]),
///     (2, vec![3]),
///     (3, vec![4]),
///     (4, vec![]),
/// ]);
/// assert_eq!(bfs_shortest_path(&graph, &1, &4, no_logging![]), Some(vec![1, 4]));
/// assert_eq!(bfs_shortest_path(&graph, &4, &1, no_logging![]), None);
/// ```
pub fn bfs_shortest_path<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    end: &V,
    pl: &mut impl ProgressLog,
) -> Option<Vec<V>> {
    if start == end {
        return Some(vec![start.clone()]);
    }
    let source = graph.key_node(start)?;
    let target = graph.node(end)?;
    let mut visit = breadth_first::Seq::new(graph);
    let mut parent = vec![usize::MAX; graph.num_nodes()];

    pl.item_name("node");
    pl.expected_updates(None);
    pl.start("Looking for a shortest path...");

    let found = visit
        .visit(
            source,
            |event| {
                if let EventPred::Unknown { curr, pred, .. } = event {
                    parent[curr] = pred;
                    if curr == target {
                        return Break(());
                    }
                }
                Continue(())
            },
            pl,
        )
        .is_break();

    pl.done();

    if !found {
        return None;
    }

    let mut path = vec![target];
    let mut node = target;
    while node != source {
        node = parent[node];
        path.push(node);
    }
    path.reverse();
    Some(graph.vertices_of(path))
}

/// Returns the length of a shortest path from `start` to `end`, or `None` if
/// `end` is not reachable.
///
/// The distance of a vertex from itself is zero.
pub fn bfs_shortest_distance<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    end: &V,
    pl: &mut impl ProgressLog,
) -> Option<usize> {
    if start == end {
        return Some(0);
    }
    let source = graph.key_node(start)?;
    let target = graph.node(end)?;
    let mut visit = breadth_first::Seq::new(graph);

    pl.item_name("node");
    pl.expected_updates(None);
    pl.start("Computing distance...");

    let result = visit.visit(
        source,
        |event| match event {
            EventPred::Unknown { curr, distance, .. } if curr == target => Break(distance),
            _ => Continue(()),
        },
        pl,
    );

    pl.done();
    match result {
        Break(distance) => Some(distance),
        Continue(()) => None,
    }
}

/// Groups the vertices reachable from `start` by their distance from it.
///
/// The `i`-th group contains the vertices at distance `i`, in discovery
/// order; the first group contains `start` only.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs::bfs_level_order;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjacencyList::from_adjacency([
///     (0, vec![1, 2]),
///     (1, vec![3]),
///     (2, vec![3]),
///     (3, vec![]),
/// ]);
/// assert_eq!(
///     bfs_level_order(&graph, &0, no_logging![]),
///     vec![vec![0], vec![1, 2], vec![3]]
/// );
/// ```
pub fn bfs_level_order<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    pl: &mut impl ProgressLog,
) -> Vec<Vec<V>> {
    let Some(root) = graph.key_node(start) else {
        return Vec::new();
    };
    let mut visit = breadth_first::Seq::new(graph);
    let mut levels: Vec<Vec<usize>> = Vec::new();

    pl.item_name("node");
    pl.expected_updates(None);
    pl.start("Computing levels...");

    visit
        .visit(
            root,
            |event| -> ControlFlow<Infallible, ()> {
                if let EventPred::Unknown { curr, distance, .. } = event {
                    // Distances are discovered in non-decreasing order
                    if distance == levels.len() {
                        levels.push(Vec::new());
                    }
                    levels[distance].push(curr);
                }
                Continue(())
            },
            pl,
        )
        .done();

    pl.done();
    levels
        .into_iter()
        .map(|level| graph.vertices_of(level))
        .collect()
}

/// Returns the vertices at exactly `distance` from `start`, in discovery
/// order.
///
/// Vertices farther than `distance` are never discovered.
pub fn bfs_vertices_at_distance<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    distance: usize,
    pl: &mut impl ProgressLog,
) -> Vec<V> {
    if distance == 0 {
        return if graph.contains(start) {
            vec![start.clone()]
        } else {
            Vec::new()
        };
    }
    let Some(root) = graph.key_node(start) else {
        return Vec::new();
    };
    let mut visit = breadth_first::Seq::new(graph);
    let mut found = Vec::new();

    pl.item_name("node");
    pl.expected_updates(None);
    pl.start(format!("Looking for nodes at distance {}...", distance));

    visit
        .visit_filtered(
            root,
            |event| -> ControlFlow<Infallible, ()> {
                if let EventPred::Unknown {
                    curr, distance: d, ..
                } = event
                {
                    if d == distance {
                        found.push(curr);
                    }
                }
                Continue(())
            },
            |args| args.distance <= distance,
            pl,
        )
        .done();

    pl.done();
    graph.vertices_of(found)
}

/// Returns the connected components of an undirected graph.
///
/// A breadth-first visit is started from each key not yet visited, in
/// insertion order; each component lists its vertices in breadth-first order.
pub fn bfs_connected_components<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    pl: &mut impl ProgressLog,
) -> Vec<Vec<V>> {
    let mut visit = breadth_first::Seq::new(graph);
    let mut components: Vec<Vec<usize>> = Vec::new();

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Computing connected components...");

    visit
        .visit_roots(
            0..graph.num_keys(),
            |event| -> ControlFlow<Infallible, ()> {
                match event {
                    EventPred::Init { .. } => components.push(Vec::new()),
                    EventPred::Unknown { curr, .. } => {
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

/// One of the two sides of a bipartition.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Side {
    /// The side of the roots of the visit.
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The result of [`bfs_bipartite`].
#[derive(Debug, Clone)]
pub struct Bipartition<V> {
    /// Whether the graph is bipartite.
    pub is_bipartite: bool,
    /// The side assigned to each vertex discovered by the visit.
    ///
    /// If the graph is not bipartite, this is the partial assignment at the
    /// moment the first arc between two vertices on the same side was found,
    /// and it depends on the order of the adjacency lists.
    pub sides: HashMap<V, Side>,
}

/// Checks whether a graph is bipartite by two-coloring it breadth first.
///
/// A visit is started from each key not yet colored, in insertion order; the
/// root is put on the [left side](Side::Left), and every newly discovered
/// vertex on the side opposite to that of its parent. The check stops at the
/// first arc between two vertices on the same side (a self-loop is such an
/// arc).
///
/// # Examples
///
/// ```
/// use classic_algo::algo::bfs::{bfs_bipartite, Side};
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let square = AdjacencyList::from_adjacency([
///     ('A', vec!['C', 'D']),
///     ('B', vec!['C', 'D']),
///     ('C', vec!['A', 'B']),
///     ('D', vec!['A', 'B']),
/// ]);
/// let bipartition = bfs_bipartite(&square, no_logging![]);
/// assert!(bipartition.is_bipartite);
/// assert_eq!(bipartition.sides[&'A'], Side::Left);
/// assert_eq!(bipartition.sides[&'C'], Side::Right);
/// ```
pub fn bfs_bipartite<V: Eq + Hash + Clone>(
    graph: &AdjacencyList<V>,
    pl: &mut impl ProgressLog,
) -> Bipartition<V> {
    let mut visit = breadth_first::Seq::new(graph);
    let mut sides: Vec<Option<Side>> = vec![None; graph.num_nodes()];

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Checking bipartiteness...");

    let conflict = visit
        .visit_roots(
            0..graph.num_keys(),
            |event| {
                match event {
                    EventPred::Unknown { curr, pred, .. } => {
                        sides[curr] = if curr == pred {
                            Some(Side::Left)
                        } else {
                            sides[pred].map(Side::opposite)
                        };
                    }
                    EventPred::Known { curr, pred, .. } if sides[curr] == sides[pred] => {
                        return Break(());
                    }
                    _ => {}
                }
                Continue(())
            },
            pl,
        )
        .is_break();

    pl.done();

    Bipartition {
        is_bipartite: !conflict,
        sides: sides
            .into_iter()
            .enumerate()
            .filter_map(|(node, side)| side.map(|side| (graph.vertex(node).clone(), side)))
            .collect(),
    }
}
