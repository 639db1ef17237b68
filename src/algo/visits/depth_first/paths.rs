use crate::graphs::RandomAccessGraph;
use sux::bits::BitVec;

/// An iterator on the simple paths from a source node to a target node.
///
/// Paths are returned in depth-first order: successors are enumerated in the
/// order given by the graph, and a path is extended only with nodes that are
/// not already on it, so the enumeration terminates on cyclic graphs too.
/// Once the target has been reached, the path is not extended further.
///
/// Note that the first path returned is the first one found by a depth-first
/// search, and it is not necessarily the shortest one; use a [breadth-first
/// visit](crate::algo::bfs::bfs_shortest_path) for shortest paths.
///
/// The number of simple paths can be exponential in the size of the graph.
/// Nodes are kept on an explicit stack, so long paths do not consume call
/// stack.
///
/// If the source is equal to the target, the only path returned is made of
/// the source alone.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::visits::depth_first::SimplePaths;
/// use classic_algo::graphs::AdjacencyList;
///
/// let graph = AdjacencyList::from_adjacency([
///     (0, vec![1, 2]),
///     (1, vec![3]),
///     (2, vec![1, 3]),
///     (3, vec![]),
/// ]);
/// let paths: Vec<_> = SimplePaths::new(&graph, 0, 3).collect();
/// assert_eq!(paths, vec![vec![0, 1, 3], vec![0, 2, 1, 3], vec![0, 2, 3]]);
/// ```
pub struct SimplePaths<'a, G: RandomAccessGraph> {
    graph: &'a G,
    target: usize,
    /// The current path; its last node is the one whose successors are
    /// enumerated by the last iterator on the stack.
    path: Vec<usize>,
    stack: Vec<<<G as RandomAccessGraph>::Successors<'a> as IntoIterator>::IntoIter>,
    on_path: BitVec,
    /// Set when source and target coincide, until the trivial path is returned.
    trivial: bool,
}

impl<'a, G: RandomAccessGraph> SimplePaths<'a, G> {
    /// Creates an iterator on the simple paths from `source` to `target`.
    pub fn new(graph: &'a G, source: usize, target: usize) -> Self {
        let mut on_path = BitVec::new(graph.num_nodes());
        let mut path = Vec::with_capacity(16);
        let mut stack = Vec::with_capacity(16);
        let trivial = source == target;

        if !trivial {
            on_path.set(source, true);
            path.push(source);
            stack.push(graph.successors(source).into_iter());
        }

        Self {
            graph,
            target,
            path,
            stack,
            on_path,
            trivial,
        }
    }
}

impl<G: RandomAccessGraph> Iterator for SimplePaths<'_, G> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.trivial {
            self.trivial = false;
            return Some(vec![self.target]);
        }

        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(succ) if self.on_path.get(succ) => {}
                Some(succ) if succ == self.target => {
                    let mut path = Vec::with_capacity(self.path.len() + 1);
                    path.extend_from_slice(&self.path);
                    path.push(succ);
                    return Some(path);
                }
                Some(succ) => {
                    self.on_path.set(succ, true);
                    self.path.push(succ);
                    self.stack.push(self.graph.successors(succ).into_iter());
                }
                None => {
                    self.stack.pop();
                    if let Some(node) = self.path.pop() {
                        self.on_path.set(node, false);
                    }
                }
            }
        }
    }
}
