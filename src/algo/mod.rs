//! Module containing all algorithm implementations.

pub mod visits;

pub mod bfs;
pub mod dfs;

mod acyclicity;
pub use acyclicity::*;

mod top_sort;
pub use top_sort::*;

pub mod searching;
pub mod sorting;

/// Traits used to interact with the implemented algorithms.
pub mod traits;
