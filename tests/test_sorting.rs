/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use classic_algo::algo::sorting::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns random vectors of different lengths, with many repeated values.
fn random_inputs(seed: u64) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    [0, 1, 2, 3, 10, 57, 200, 1000]
        .into_iter()
        .map(|len| (0..len).map(|_| rng.random_range(-50..50)).collect())
        .collect()
}

fn is_non_decreasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

macro_rules! test_sort_algo {
    ($name:ident, $algo:ty, stable = $stable:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn test_permutation_and_order() {
                for values in random_inputs(0) {
                    let input = values.clone();
                    let sorted = <$algo>::sorted(&values);
                    // The input is left untouched
                    assert_eq!(values, input);
                    let mut expected = values.clone();
                    expected.sort();
                    assert!(is_non_decreasing(&sorted));
                    assert_eq!(sorted, expected);
                }
            }

            #[test]
            fn test_in_place() {
                for mut values in random_inputs(1) {
                    let mut expected = values.clone();
                    expected.sort_unstable();
                    <$algo>::sort(&mut values);
                    assert_eq!(values, expected);
                }
            }

            #[test]
            fn test_idempotence() {
                for values in random_inputs(2) {
                    let once = <$algo>::sorted(&values);
                    let twice = <$algo>::sorted(&once);
                    assert_eq!(once, twice);
                }
            }

            #[test]
            fn test_reverse_sorted() {
                let values: Vec<u32> = (0..500).rev().collect();
                assert_eq!(<$algo>::sorted(&values), (0..500).collect::<Vec<_>>());
            }

            #[test]
            fn test_stability() {
                if !$stable {
                    return;
                }
                let mut rng = StdRng::seed_from_u64(3);
                // Equal values are tagged with their original position
                let tagged: Vec<(u8, usize)> =
                    (0..300).map(|i| (rng.random_range(0..10), i)).collect();
                let sorted = <$algo>::sorted_by_key(&tagged, |&(value, _)| value);
                for w in sorted.windows(2) {
                    assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
                }
            }
        }
    };
}

test_sort_algo!(bubble, Bubble, stable = true);
test_sort_algo!(selection, Selection, stable = false);
test_sort_algo!(insertion, Insertion, stable = true);
test_sort_algo!(binary_insertion, BinaryInsertion, stable = true);
test_sort_algo!(merge, Merge, stable = true);
test_sort_algo!(quick_lomuto, QuickLomuto, stable = false);
test_sort_algo!(quick_hoare, QuickHoare, stable = false);
test_sort_algo!(heap, Heap, stable = false);

#[test]
fn test_free_functions() {
    let values = [5, 2, 8, 1, 9, 2];
    let expected = vec![1, 2, 2, 5, 8, 9];
    assert_eq!(bubble_sort(&values), expected);
    assert_eq!(selection_sort(&values), expected);
    assert_eq!(insertion_sort(&values), expected);
    assert_eq!(insertion_sort_binary(&values), expected);
    assert_eq!(merge_sort(&values), expected);
    assert_eq!(quick_sort(&values), expected);
    assert_eq!(quick_sort_hoare(&values), expected);
    assert_eq!(heap_sort(&values), expected);
}

#[test]
fn test_sorted_input_does_not_overflow_stack() {
    // Quadratic, but the pending ranges stay few
    let values: Vec<u32> = (0..5_000).collect();
    assert_eq!(quick_sort(&values), values);
    assert_eq!(quick_sort_hoare(&values), values);
}

#[test]
fn test_by_key_free_functions() {
    let words = ["pear", "fig", "plum", "kiwi", "apple"];
    let expected = vec!["fig", "pear", "plum", "kiwi", "apple"];
    assert_eq!(bubble_sort_by_key(&words, |w| w.len()), expected);
    assert_eq!(insertion_sort_by_key(&words, |w| w.len()), expected);
    assert_eq!(merge_sort_by_key(&words, |w| w.len()), expected);
}

#[test]
fn test_integer_sorts() -> Result<()> {
    for values in random_inputs(4) {
        let values: Vec<i32> = values.into_iter().map(|x| x + 50).collect();
        let mut expected = values.clone();
        expected.sort();
        assert_eq!(count_sort(&values)?, expected);
        assert_eq!(radix_sort(&values)?, expected);
    }
    assert_eq!(
        radix_sort(&[170u64, 45, 75, 90, 2, 802, 24, 66])?,
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );
    assert_eq!(count_sort::<u8>(&[])?, vec![]);
    assert_eq!(radix_sort(&[7i16])?, vec![7]);
    Ok(())
}

#[test]
fn test_integer_sorts_stability() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(5);
    let tagged: Vec<(u32, usize)> = (0..500).map(|i| (rng.random_range(0..1000), i)).collect();
    for sorted in [
        count_sort_by_key(&tagged, |&(key, _)| key)?,
        radix_sort_by_key(&tagged, |&(key, _)| key)?,
    ] {
        for w in sorted.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }
    Ok(())
}

#[test]
fn test_negative_values() {
    assert_eq!(
        count_sort(&[4, -1, 2]),
        Err(SortError::NegativeValue {
            algorithm: "Count sort",
            index: 1
        })
    );
    assert_eq!(
        radix_sort(&[3, 0, -7, -2]),
        Err(SortError::NegativeValue {
            algorithm: "Radix sort",
            index: 2
        })
    );
    // Validation comes first, even for a single element
    assert!(count_sort(&[-1]).is_err());
    assert!(radix_sort_by_key(&[("a", -5)], |item| item.1).is_err());
}

#[test]
fn test_error_messages() {
    let err = count_sort(&[1, -1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Count sort only works with non-negative integers (negative key at index 1)"
    );
}

#[test]
fn test_radix_sort_strings() -> Result<()> {
    let words = ["cab", "abc", "bca", "abb", "cab"];
    assert_eq!(
        radix_sort_strings(&words)?,
        vec!["abb", "abc", "bca", "cab", "cab"]
    );
    let bytes = [vec![2u8, 0], vec![1, 255], vec![1, 0]];
    assert_eq!(
        radix_sort_strings(&bytes)?,
        vec![vec![1, 0], vec![1, 255], vec![2, 0]]
    );
    assert!(radix_sort_strings::<&str>(&[])?.is_empty());
    Ok(())
}

#[test]
fn test_build_max_heap() {
    for values in random_inputs(6) {
        let heap = build_max_heap(&values);
        assert!((1..heap.len()).all(|i| heap[(i - 1) / 2] >= heap[i]));
        let mut sorted_heap = heap.clone();
        sorted_heap.sort();
        assert_eq!(sorted_heap, merge_sort(&values));
    }
}
