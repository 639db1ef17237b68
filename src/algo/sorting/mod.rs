/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sorting algorithms.
//!
//! Comparison sorts are unit types implementing [`ComparisonSort`]: they sort
//! slices in place with [`sort`](ComparisonSort::sort) and
//! [`sort_by`](ComparisonSort::sort_by), or return a sorted copy with
//! [`sorted`](ComparisonSort::sorted) and
//! [`sorted_by_key`](ComparisonSort::sorted_by_key). For each of them there is
//! also a free function returning a sorted copy (e.g., [`merge_sort`]).
//!
//! | Algorithm | Stable | In place | Worst case |
//! |---|---|---|---|
//! | [`Bubble`] | yes | yes | O(_n_²) |
//! | [`Selection`] | no | yes | O(_n_²) |
//! | [`Insertion`], [`BinaryInsertion`] | yes | yes | O(_n_²) |
//! | [`Merge`] | yes | no | O(_n_ log _n_) |
//! | [`QuickLomuto`], [`QuickHoare`] | no | yes | O(_n_²) |
//! | [`Heap`] | no | yes | O(_n_ log _n_) |
//!
//! [Radix sort](radix_sort) and [counting sort](count_sort) work on
//! non-negative integer keys, are stable, and return a
//! [`SortError`] if a key is negative.
//!
//! # Examples
//!
//! ```
//! use classic_algo::algo::sorting::*;
//!
//! let values = [5, 2, 8, 1, 9];
//! assert_eq!(Heap::sorted(&values), vec![1, 2, 5, 8, 9]);
//! assert_eq!(quick_sort(&values), vec![1, 2, 5, 8, 9]);
//!
//! let mut words = ["pear", "fig", "apple", "kiwi"];
//! Insertion::sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
//! assert_eq!(words, ["fig", "pear", "kiwi", "apple"]);
//! ```

mod bubble;
pub use bubble::*;

mod count;
pub use count::*;

mod error;
pub use error::*;

mod heap;
pub use heap::*;

mod insertion;
pub use insertion::*;

mod merge;
pub use merge::*;

mod quick;
pub use quick::*;

mod radix;
pub use radix::*;

mod selection;
pub use selection::*;

use num_traits::PrimInt;
use sealed::sealed;
use std::cmp::Ordering;

/// A sorting algorithm based on comparisons.
///
/// Implementations need only provide [`sort_by`](ComparisonSort::sort_by).
#[sealed]
pub trait ComparisonSort {
    /// Sorts a slice in place using a comparison function.
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: C);

    /// Sorts a slice in place.
    fn sort<T: Ord>(slice: &mut [T]) {
        Self::sort_by(slice, T::cmp)
    }

    /// Returns a sorted copy of a slice.
    fn sorted<T: Ord + Clone>(slice: &[T]) -> Vec<T> {
        let mut sorted = slice.to_vec();
        Self::sort(&mut sorted);
        sorted
    }

    /// Returns a copy of a slice sorted by the given key.
    ///
    /// The key function is called at every comparison.
    fn sorted_by_key<T: Clone, K: Ord>(slice: &[T], mut key: impl FnMut(&T) -> K) -> Vec<T> {
        let mut sorted = slice.to_vec();
        Self::sort_by(&mut sorted, |a, b| key(a).cmp(&key(b)));
        sorted
    }
}

/// Returns a sorted copy of `values` using [bubble sort](Bubble).
pub fn bubble_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    Bubble::sorted(values)
}

/// Returns a copy of `items` sorted by key using [bubble sort](Bubble).
pub fn bubble_sort_by_key<T: Clone, K: Ord>(items: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    Bubble::sorted_by_key(items, key)
}

/// Returns a sorted copy of `values` using [selection sort](Selection).
pub fn selection_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    Selection::sorted(values)
}

/// Returns a sorted copy of `values` using [insertion sort](Insertion).
pub fn insertion_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    Insertion::sorted(values)
}

/// Returns a copy of `items` sorted by key using [insertion sort](Insertion).
pub fn insertion_sort_by_key<T: Clone, K: Ord>(items: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    Insertion::sorted_by_key(items, key)
}

/// Returns a sorted copy of `values` using [insertion sort with binary
/// search](BinaryInsertion).
pub fn insertion_sort_binary<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    BinaryInsertion::sorted(values)
}

/// Returns a sorted copy of `values` using [merge sort](Merge).
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    Merge::sorted(values)
}

/// Returns a copy of `items` sorted by key using [merge sort](Merge).
pub fn merge_sort_by_key<T: Clone, K: Ord>(items: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    Merge::sorted_by_key(items, key)
}

/// Returns a sorted copy of `values` using [quicksort with Lomuto
/// partitioning](QuickLomuto).
pub fn quick_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    QuickLomuto::sorted(values)
}

/// Returns a sorted copy of `values` using [quicksort with Hoare
/// partitioning](QuickHoare).
pub fn quick_sort_hoare<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    QuickHoare::sorted(values)
}

/// Returns a sorted copy of `values` using [heapsort](Heap).
pub fn heap_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    Heap::sorted(values)
}

/// Extracts the keys of `items` as unsigned values, failing on the first
/// negative key.
fn unsigned_keys<T, K: PrimInt>(
    items: &[T],
    mut key: impl FnMut(&T) -> K,
    algorithm: &'static str,
) -> Result<Vec<u128>, SortError> {
    items
        .iter()
        .enumerate()
        // Conversion fails exactly on negative values
        .map(|(index, item)| {
            key(item)
                .to_u128()
                .ok_or(SortError::NegativeValue { algorithm, index })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn sort_all_ways<S: ComparisonSort>() {
        let mut values = [5, 3, 9, 1, 3, 0];
        S::sort(&mut values);
        assert_eq!(values, [0, 1, 3, 3, 5, 9]);
        assert_eq!(S::sorted(&[2, 1]), vec![1, 2]);
        assert_eq!(
            S::sorted_by_key(&[(1, 'a'), (0, 'b')], |pair| pair.0),
            vec![(0, 'b'), (1, 'a')]
        );
    }

    #[test]
    fn test_all_comparison_sorts() {
        sort_all_ways::<Bubble>();
        sort_all_ways::<Selection>();
        sort_all_ways::<Insertion>();
        sort_all_ways::<BinaryInsertion>();
        sort_all_ways::<Merge>();
        sort_all_ways::<QuickLomuto>();
        sort_all_ways::<QuickHoare>();
        sort_all_ways::<Heap>();
    }
}
