use crate::algo::visits::{
    depth_first::{EventPred, SeqPath},
    Sequential, StoppedWhenDone,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Returns whether the graph is acyclic.
///
/// This method will just do a depth-first visit of the graph, stopping as soon
/// as a back arc, that is, an arc towards a node on the visit path, is found.
/// Self-loops are back arcs.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::acyclicity;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let dag = AdjacencyList::from_adjacency([(0, vec![1, 2]), (1, vec![2]), (2, vec![])]);
/// assert!(acyclicity(&dag, no_logging![]));
///
/// let cycle = AdjacencyList::from_adjacency([(0, vec![1]), (1, vec![2]), (2, vec![0])]);
/// assert!(!acyclicity(&cycle, no_logging![]));
/// ```
pub fn acyclicity<G: RandomAccessGraph>(graph: &G, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPath::new(graph);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity...");

    let acyclic = visit
        .visit_roots(
            0..num_nodes,
            |event| {
                // Stop the visit as soon as a back arc is found
                match event {
                    EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
                    _ => Continue(()),
                }
            },
            pl,
        )
        .is_continue();

    pl.done();
    acyclic
}
