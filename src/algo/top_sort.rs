use crate::algo::visits::{
    depth_first::{EventPred, SeqPred},
    Done, Sequential,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use std::ops::ControlFlow::{self, Continue};

/// Returns the node of the graph in topological-sort order, if the graph is
/// acyclic.
///
/// Otherwise, the order reflects the exit times from a depth-first visit of
/// the graph.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::top_sort;
/// use classic_algo::graphs::AdjacencyList;
/// use dsi_progress_logger::no_logging;
///
/// let graph = AdjacencyList::from_adjacency([
///     ("shirt", vec!["tie"]),
///     ("tie", vec!["jacket"]),
///     ("trousers", vec!["shoes", "jacket"]),
///     ("jacket", vec![]),
///     ("shoes", vec![]),
/// ]);
/// let order = graph.vertices_of(top_sort(&graph, no_logging![]).into_vec());
/// assert_eq!(order, vec!["trousers", "shoes", "shirt", "tie", "jacket"]);
/// ```
pub fn top_sort<G: RandomAccessGraph>(graph: &G, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPred::new(graph);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort...");

    let mut top_sort = Box::new_uninit_slice(num_nodes);
    let mut pos = num_nodes;

    visit
        .visit_roots(
            0..num_nodes,
            |event| -> ControlFlow<Infallible, ()> {
                if let EventPred::Postvisit { curr, .. } = event {
                    pos -= 1;
                    top_sort[pos].write(curr);
                }
                Continue(())
            },
            pl,
        )
        .done();

    pl.done();
    // SAFETY: we write in each element of top_sort
    unsafe { top_sort.assume_init() }
}
