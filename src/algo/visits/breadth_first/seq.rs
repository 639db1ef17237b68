use crate::algo::visits::{
    breadth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store parents or distances of the
/// nodes from the root: parents and distances are computed on the fly and
/// passed to the callback function by visiting nodes when they are discovered,
/// rather than when they are extracted from the queue. Since the queue is
/// first-in first-out, the order of discovery is the same as the order of
/// extraction.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::visits::{breadth_first, Done, Sequential};
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
/// use std::convert::Infallible;
/// use std::ops::ControlFlow::{self, Continue};
///
/// // Let's compute the distances from 0
///
/// let graph = AdjacencyList::from_adjacency([
///     (0, vec![1]),
///     (1, vec![2, 3]),
///     (2, vec![0]),
///     (3, vec![3]),
/// ]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit
///     .visit(
///         0,
///         |event| -> ControlFlow<Infallible, ()> {
///             // Set distance from 0
///             if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
///                 d[curr] = distance;
///             }
///             Continue(())
///         },
///         no_logging![],
///     )
///     .done();
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Returns whether `node` has been discovered by this visit.
    pub fn known(&self, node: usize) -> bool {
        self.visited.get(node)
    }
}

#[inline(always)]
fn non_max(node: usize) -> Option<NonMaxUsize> {
    Some(NonMaxUsize::new(node).expect("node index should never be usize::MAX"))
}

impl<G: RandomAccessGraph> Sequential<EventPred> for Seq<'_, G> {
    fn visit_filtered<
        E,
        C: FnMut(EventPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        if self.visited.get(root)
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                distance: 0,
            })
        {
            return Continue(());
        }

        callback(EventPred::Init { root })?;

        callback(EventPred::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        })?;

        self.visited.set(root, true);
        self.queue.push_back(non_max(root));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited.get(succ) {
                            if filter(FilterArgsPred {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            }) {
                                callback(EventPred::Unknown {
                                    curr: succ,
                                    pred: node,
                                    root,
                                    distance,
                                })?;
                                self.visited.set(succ, true);
                                self.queue.push_back(non_max(succ));
                            }
                        } else {
                            callback(EventPred::Known {
                                curr: succ,
                                pred: node,
                                root,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        callback(EventPred::Done { root })
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited = BitVec::new(self.graph.num_nodes());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::visits::Done;
    use crate::graphs::AdjacencyList;
    use dsi_progress_logger::no_logging;
    use std::convert::Infallible;
    use std::ops::ControlFlow::Break;

    #[test]
    fn test_known_events() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1, 2]), (1, vec![2]), (2, vec![0])]);
        let mut visit = Seq::new(&graph);
        let mut known = vec![];
        visit
            .visit(
                0,
                |event| -> ControlFlow<Infallible, ()> {
                    if let EventPred::Known { curr, pred, .. } = event {
                        known.push((pred, curr));
                    }
                    Continue(())
                },
                no_logging![],
            )
            .done();
        assert_eq!(known, vec![(1, 2), (2, 0)]);
    }

    #[test]
    fn test_break() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![])]);
        let mut visit = Seq::new(&graph);
        let result = visit.visit(
            0,
            |event| match event {
                EventPred::Unknown { curr: 1, distance, .. } => Break(distance),
                _ => Continue(()),
            },
            no_logging![],
        );
        assert_eq!(result, Break(1));
        assert!(!visit.known(2));
    }

    #[test]
    fn test_filter() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![])]);
        let mut visit = Seq::new(&graph);
        visit
            .visit_filtered(
                0,
                |_| -> ControlFlow<Infallible, ()> { Continue(()) },
                |args| args.distance <= 1,
                no_logging![],
            )
            .done();
        assert!(visit.known(1));
        assert!(!visit.known(2));
        visit.reset();
        assert!(!visit.known(0));
    }
}
