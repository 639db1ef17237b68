use super::RandomAccessGraph;
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Copied;
use std::slice::Iter;

/// A graph given as a mapping from vertices to ordered neighbor lists.
///
/// Vertices can be of any hashable type; internally they are mapped to
/// dense node indices so that visits can keep their state in bit vectors.
/// The mapping is deterministic:
///
/// * the vertices appearing as keys of the adjacency list (the _declared_
///   vertices) get indices `0..num_keys()`, in insertion order;
/// * vertices appearing only as neighbors get the following indices, in order
///   of first appearance, and have no successors.
///
/// Only declared vertices [belong](AdjacencyList::contains) to the graph; a
/// neighbor-only vertex can be reached, but a visit cannot start from it.
///
/// Whether the graph is directed or undirected depends only on the symmetry of
/// the lists: an undirected edge must appear in the lists of both endpoints.
///
/// # Examples
///
/// ```
/// use classic_algo::graphs::{AdjacencyList, RandomAccessGraph};
///
/// let graph = AdjacencyList::from_adjacency([
///     ('A', vec!['B', 'C']),
///     ('B', vec!['A']),
///     ('C', vec!['A', 'D']),
/// ]);
/// assert_eq!(graph.num_keys(), 3);
/// assert_eq!(graph.num_nodes(), 4);
/// assert!(!graph.contains(&'D'));
/// assert_eq!(graph.node(&'D'), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyList<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    successors: Vec<Vec<usize>>,
    num_keys: usize,
}

impl<V> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            num_keys: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> AdjacencyList<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from pairs made of a vertex and its neighbors.
    ///
    /// If a vertex appears more than once as a key, the last neighbor list
    /// wins, but the vertex keeps the position of its first appearance.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        let mut lists = Vec::new();

        // Keys are interned first, so that they get the lowest indices
        for (vertex, neighbors) in adjacency {
            let node = match graph.index.get(&vertex) {
                Some(&node) => node,
                None => {
                    let node = graph.vertices.len();
                    graph.index.insert(vertex.clone(), node);
                    graph.vertices.push(vertex);
                    node
                }
            };
            lists.push((node, neighbors.into_iter().collect::<Vec<_>>()));
        }

        graph.num_keys = graph.vertices.len();
        graph.successors = vec![Vec::new(); graph.num_keys];

        for (node, neighbors) in lists {
            let succ = neighbors
                .into_iter()
                .map(|neighbor| graph.intern(neighbor))
                .collect();
            graph.successors[node] = succ;
        }

        graph
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&node) = self.index.get(&vertex) {
            return node;
        }
        let node = self.vertices.len();
        self.index.insert(vertex.clone(), node);
        self.vertices.push(vertex);
        self.successors.push(Vec::new());
        node
    }

    /// Returns the number of declared vertices, that is, of keys of the
    /// adjacency list.
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Returns whether `vertex` is a key of the adjacency list.
    pub fn contains(&self, vertex: &V) -> bool {
        self.key_node(vertex).is_some()
    }

    /// Returns the node index of `vertex`, if it appears anywhere in the
    /// graph.
    pub fn node(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Returns the node index of `vertex`, if it is a key of the adjacency
    /// list.
    pub fn key_node(&self, vertex: &V) -> Option<usize> {
        self.node(vertex).filter(|&node| node < self.num_keys)
    }

    /// Returns the vertex with the given node index.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not smaller than [`num_nodes`](RandomAccessGraph::num_nodes).
    pub fn vertex(&self, node: usize) -> &V {
        &self.vertices[node]
    }

    /// Maps node indices back to (cloned) vertices.
    pub fn vertices_of(&self, nodes: impl IntoIterator<Item = usize>) -> Vec<V> {
        nodes
            .into_iter()
            .map(|node| self.vertices[node].clone())
            .collect()
    }

    /// Returns the declared vertices, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices[..self.num_keys].iter()
    }

    /// Returns the neighbors of `vertex`, in order; the iterator is empty if
    /// the vertex is unknown or has no successors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.node(vertex)
            .map(move |node| self.successors[node].as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&succ| &self.vertices[succ])
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, Vec<V>)> for AdjacencyList<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<V> RandomAccessGraph for AdjacencyList<V> {
    type Successors<'a>
        = Copied<Iter<'a, usize>>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.successors[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors[node].len()
    }
}
