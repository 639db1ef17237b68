//! Visits on graphs.
//!
//! Implementation of [sequential](Sequential) visits depend on a type parameter
//! `A` that implements the [`Event`] trait; this is the type of the one
//! argument passed to the callback of the visit, and it describes what is
//! happening (e.g., a new node has been discovered, or a node has been
//! revisited).
//!
//! Callbacks return a [`ControlFlow`]: returning
//! [`Break`](ControlFlow::Break) stops the visit immediately, and the break
//! value is returned by the visit method. Visits that cannot be interrupted
//! use [`Infallible`](std::convert::Infallible) as break type, and the
//! [`Done`] trait makes it possible to discard the result quietly.
//!
//! Visits can also be _filtered_: the filter receives a set of arguments that
//! depends on the visit and that describe a node that is about to be
//! discovered; if the filter returns false, the node is ignored (but it might
//! be discovered later through another arc).
//!
//! Visits keep track of which nodes have been discovered: using
//! [`visit`](Sequential::visit) with a root that is already known is a no-op,
//! and [`reset`](Sequential::reset) makes the visit reusable.

pub mod breadth_first;
pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use std::ops::ControlFlow;
use thiserror::Error;

/// A convenience break value for visits that are stopped as soon as some
/// condition is met.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The visit was stopped early")]
pub struct StoppedWhenDone;

/// Types of events generated by a visit.
pub trait Event {
    /// The type of the arguments passed to the filter of a visit.
    type FilterArgs;
}

/// Consumes the result of a visit whose callback never breaks.
pub trait Done {
    /// Discards the (necessarily continuing) result of a visit.
    fn done(self);
}

impl Done for ControlFlow<Infallible, ()> {
    #[inline(always)]
    fn done(self) {}
}

/// A sequential visit.
///
/// Implementations must provide [`visit_filtered`](Sequential::visit_filtered)
/// and [`reset`](Sequential::reset); the other methods are derived.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified node, filtering nodes.
    ///
    /// # Arguments
    ///
    /// * `root`: the node to start the visit from.
    ///
    /// * `callback`: the callback function; the visit is stopped as soon as
    ///   it returns [`Break`](ControlFlow::Break).
    ///
    /// * `filter`: the filter function; a node is discovered only if the
    ///   filter returns true.
    ///
    /// * `pl`: a progress logger.
    fn visit_filtered<E, C: FnMut(A) -> ControlFlow<E, ()>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified node.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered).
    fn visit<E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the graph starting from each of the given roots, in order.
    ///
    /// Roots that have already been discovered are skipped.
    fn visit_roots<E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        for root in roots {
            self.visit_filtered(root, &mut callback, |_| true, pl)?;
        }
        ControlFlow::Continue(())
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
