//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventNoPred`] or [`EventPred`]. The callback must be called at the [start
//! of a visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), if supported, [every time the enumeration of
//! the successors of a node is completed](EventPred::Postvisit), and [at the
//! end of the visit](EventPred::Done).
//!
//! Note that since [`EventPred`] contains the predecessor of the visited node,
//! all post-start visit events can be interpreted as arc events. The only
//! exception are the previsit and postvisit events of the root.
//!
//! Besides visits, this module provides [`SimplePaths`], an iterator on the
//! simple paths between two nodes in depth-first order.

mod seq;
pub use seq::*;

mod paths;
pub use paths::*;

/// Types of callback events generated during a depth-first visit
/// keeping track of parent nodes (and possibly of the visit path).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: this event should be used to set up state at the
    /// start of the visit.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Previsit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the [root](`EventPred::Previsit::root`) to
        /// [curr](`EventPred::Previsit::curr`).
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node from which [curr](`EventPred::Revisit::curr`) has been
        /// reached.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the [root](`EventPred::Revisit::root`) to
        /// [pred](`EventPred::Revisit::pred`) plus one.
        depth: usize,
        /// Whether the node is currently on the visit path, that is, if we are
        /// traversing a back arc.
        ///
        /// Visits that do not track nodes on the visit path always set this
        /// field to false.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we are
    /// retreating from a tree arc, unless all fields are equal to the root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`EventPred::Postvisit::curr`) in the visit
        /// tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of [curr](`EventPred::Postvisit::curr`).
        depth: usize,
    },
    /// The visit has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The node about to be discovered.
    pub curr: usize,
    /// The node from which [curr](`Self::curr`) is being reached.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth [curr](`Self::curr`) would have.
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}

/// Types of callback events generated during a depth-first visit
/// not keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// Initialization: this event should be used to set up state at the
    /// start of the visit.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit.
        depth: usize,
    },
    /// The node has been encountered before.
    Revisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit.
        depth: usize,
    },
    /// The visit has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that do not keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The node about to be discovered.
    pub curr: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth [curr](`Self::curr`) would have.
    pub depth: usize,
}

impl super::Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}
