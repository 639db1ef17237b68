/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Classic sorting, searching and graph-traversal algorithms.
//!
//! * [`algo::sorting`]: comparison sorts, radix sort and counting sort;
//! * [`algo::searching`]: linear and binary searches, and an unbalanced
//!   binary search tree;
//! * [`algo::dfs`] and [`algo::bfs`]: depth-first and breadth-first
//!   traversals of [adjacency lists](graphs::AdjacencyList), built on the
//!   [visits](algo::visits) of [`algo::visits`];
//! * [`algo::acyclicity()`] and [`algo::top_sort()`] for directed graphs.

pub mod algo;
pub mod graphs;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::RandomAccessGraph;
}

/// Use `use classic_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::{bfs, dfs, searching, sorting};
    pub use graphs::{AdjacencyList, GraphError};
    pub use traits::*;
}
