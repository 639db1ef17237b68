use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::no_logging;

pub use super::sorting::ComparisonSort;
pub use super::visits::Sequential;

/// Graphs whose acyclicity can be checked.
///
/// This trait is implemented for every [`RandomAccessGraph`] by means of
/// [`acyclicity`](super::acyclicity()), without logging.
pub trait Acyclicity {
    /// Returns whether the graph is acyclic.
    fn is_acyclic(&self) -> bool;
}

impl<G: RandomAccessGraph> Acyclicity for G {
    fn is_acyclic(&self) -> bool {
        super::acyclicity(self, no_logging![])
    }
}
