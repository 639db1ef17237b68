use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred, FilterArgsNoPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of predecessors, or nodes on the stack.
pub type SeqNoPred<'a, G> = SeqIter<'a, TwoStates, G, (), false>;

/// A depth-first visit which keeps track of predecessors, but not nodes on the stack.
pub type SeqPred<'a, G> = SeqIter<'a, TwoStates, G, usize, true>;

/// A depth-first visit which keeps track of predecessors and nodes on the stack.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept on an explicit stack of successor iterators, so
/// successors are enumerated in the order given by the graph, and nodes are
/// discovered in the same order as a recursive visit would discover them.
///
/// Use one of the aliases rather than [`SeqIter`] directly:
///
/// * [`SeqNoPred`] emits [`EventNoPred`] and backs
///   [`dfs_connected_components`](crate::algo::dfs::dfs_connected_components);
/// * [`SeqPred`] emits [`EventPred`] and backs
///   [`has_cycle`](crate::algo::dfs::has_cycle) and
///   [`top_sort`](crate::algo::top_sort());
/// * [`SeqPath`] also marks the nodes on the visit path, so that
///   [`Revisit`](EventPred::Revisit) reports back arcs, and backs
///   [`acyclicity`](crate::algo::acyclicity()).
///
/// Known nodes take one bit each, plus one more bit for [`SeqPath`].
/// [`ProgressLog::light_update`] is called once per postvisited node.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use classic_algo::algo::visits::*;
/// use classic_algo::algo::visits::depth_first::*;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = AdjacencyList::from_adjacency([
///     (0, vec![1]),
///     (1, vec![2, 3]),
///     (2, vec![0]),
///     (3, vec![]),
/// ]);
/// let mut visit = SeqPath::new(&graph);
///
/// assert!(visit
///     .visit_roots(
///         0..4,
///         |event| {
///             // Stop the visit as soon as a back arc is found
///             match event {
///                 EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///                 _ => Continue(()),
///             }
///         },
///         no_logging![]
///     )
///     .is_break()); // As the graph is not acyclic
/// ```
pub struct SeqIter<'a, S, G: RandomAccessGraph, P, const PRED: bool> {
    graph: &'a G,
    /// One entry per node on the visit path: the iterator on its remaining
    /// successors and its parent.
    stack: Vec<(
        <<G as RandomAccessGraph>::Successors<'a> as IntoIterator>::IntoIter,
        P,
    )>,
    state: S,
}

impl<'a, S: NodeStates, G: RandomAccessGraph, P, const PRED: bool> SeqIter<'a, S, G, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G, P, PRED> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_nodes),
        }
    }

    /// Returns whether `node` has been discovered by this visit.
    pub fn known(&self, node: usize) -> bool {
        self.state.known(node)
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

/// Known bits only; `on_stack` is always false.
#[doc(hidden)]
pub struct TwoStates(BitVec);

/// Interleaved known and on-path bits.
#[doc(hidden)]
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
    fn reset(&mut self) {
        self.0 = BitVec::new(self.0.len());
    }
}

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
    fn reset(&mut self) {
        self.0 = BitVec::new(self.0.len());
    }
}

impl<S: NodeStates, G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, S, G, usize, true> {
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
        let state = &mut self.state;

        if state.known(root)
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })
        {
            return Continue(());
        }

        callback(EventPred::Init { root })?;

        state.set_known(root);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack
            .push((self.graph.successors(root).into_iter(), root));

        state.set_on_stack(root);

        // Top of the visit path
        let mut curr = root;

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Continue(());
            };

            for succ in iter {
                if state.known(succ) {
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: curr,
                        root,
                        depth,
                        on_stack: state.on_stack(succ),
                    })?;
                } else if filter(FilterArgsPred {
                    curr: succ,
                    pred: curr,
                    root,
                    depth,
                }) {
                    state.set_known(succ);

                    callback(EventPred::Previsit {
                        curr: succ,
                        pred: curr,
                        root,
                        depth,
                    })?;
                    self.stack
                        .push((self.graph.successors(succ).into_iter(), curr));

                    state.set_on_stack(succ);
                    curr = succ;

                    continue 'recurse;
                }
            }

            callback(EventPred::Postvisit {
                curr,
                pred: *parent,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            state.set_off_stack(curr);

            curr = *parent;
            self.stack.pop();
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqIter<'_, TwoStates, G, (), false> {
    fn visit_filtered<
        E,
        C: FnMut(EventNoPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        let state = &mut self.state;

        if state.known(root)
            || !filter(FilterArgsNoPred {
                curr: root,
                root,
                depth: 0,
            })
        {
            return Continue(());
        }

        callback(EventNoPred::Init { root })?;

        state.set_known(root);

        callback(EventNoPred::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        self.stack
            .push((self.graph.successors(root).into_iter(), ()));

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, _)) = self.stack.last_mut() else {
                callback(EventNoPred::Done { root })?;
                return Continue(());
            };

            for succ in iter {
                if state.known(succ) {
                    callback(EventNoPred::Revisit {
                        curr: succ,
                        root,
                        depth,
                    })?;
                } else if filter(FilterArgsNoPred {
                    curr: succ,
                    root,
                    depth,
                }) {
                    state.set_known(succ);

                    callback(EventNoPred::Previsit {
                        curr: succ,
                        root,
                        depth,
                    })?;
                    self.stack
                        .push((self.graph.successors(succ).into_iter(), ()));

                    continue 'recurse;
                }
            }

            pl.light_update();

            self.stack.pop();
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::visits::Done;
    use crate::graphs::AdjacencyList;
    use dsi_progress_logger::no_logging;
    use std::convert::Infallible;

    #[test]
    fn test_depths_and_postvisits() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1, 2]), (1, vec![2]), (2, vec![])]);
        let mut visit = SeqPred::new(&graph);
        let mut previsits = vec![];
        let mut postvisits = vec![];
        visit
            .visit(
                0,
                |event| -> ControlFlow<Infallible, ()> {
                    match event {
                        EventPred::Previsit { curr, depth, .. } => previsits.push((curr, depth)),
                        EventPred::Postvisit { curr, depth, .. } => postvisits.push((curr, depth)),
                        _ => {}
                    }
                    Continue(())
                },
                no_logging![],
            )
            .done();
        assert_eq!(previsits, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(postvisits, vec![(2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_on_stack() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1, 2]), (1, vec![]), (2, vec![1, 0])]);
        let mut visit = SeqPath::new(&graph);
        let mut revisits = vec![];
        visit
            .visit(
                0,
                |event| -> ControlFlow<Infallible, ()> {
                    if let EventPred::Revisit {
                        curr, pred, on_stack, ..
                    } = event
                    {
                        revisits.push((pred, curr, on_stack));
                    }
                    Continue(())
                },
                no_logging![],
            )
            .done();
        assert_eq!(revisits, vec![(2, 1, false), (2, 0, true)]);
    }

    #[test]
    fn test_reset() {
        let graph = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![])]);
        let mut visit = SeqNoPred::new(&graph);
        let mut count = 0;
        let mut count_previsits = |event: EventNoPred| -> ControlFlow<Infallible, ()> {
            if let EventNoPred::Previsit { .. } = event {
                count += 1;
            }
            Continue(())
        };
        visit.visit(0, &mut count_previsits, no_logging![]).done();
        visit.visit(1, &mut count_previsits, no_logging![]).done();
        visit.reset();
        visit.visit(1, &mut count_previsits, no_logging![]).done();
        assert_eq!(count, 3);
        assert!(visit.known(1));
        assert!(!visit.known(0));
    }
}
