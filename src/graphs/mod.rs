//! Graph representations visited by the algorithms in [`algo`](crate::algo).
//!
//! Visits work on dense node indices in `0..num_nodes()` through the
//! [`RandomAccessGraph`] trait; [`AdjacencyList`] maps arbitrary vertex
//! identifiers to such indices.

mod adj_list;
pub use adj_list::*;

use thiserror::Error;

/// Errors raised by traversals whose starting vertex must belong to the graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The starting vertex is not a key of the adjacency list.
    #[error("The start vertex is not in the graph")]
    UnknownVertex,
}

/// A graph whose successor lists can be accessed by node index.
///
/// Successors must be returned in a fixed order: visits are deterministic
/// with respect to it.
pub trait RandomAccessGraph {
    /// The type of the iterable returned by [`successors`](Self::successors).
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`, in order.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }
}
