use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;
use std::ops::Range;

/// Quicksort with Lomuto partitioning.
///
/// The pivot is the last element of the range; elements smaller than or equal
/// to the pivot are moved to its left.
///
/// Pending ranges are kept on an explicit stack, and the smaller side of each
/// partition is sorted first, so the stack contains at most a logarithmic
/// number of ranges even when the partitions are unbalanced (e.g., on sorted
/// input, for which the sort is quadratic).
///
/// Unstable, in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickLomuto;

/// Quicksort with Hoare partitioning.
///
/// The pivot is the first element of the range. The two indices of the
/// partition scan towards each other and stop on elements that are not
/// smaller (resp. not larger) than the pivot, which are then swapped; the
/// range is split where the scans cross. Hoare partitioning performs fewer
/// swaps than Lomuto partitioning and does not degenerate on many equal
/// elements.
///
/// Pending ranges are handled as in [`QuickLomuto`]. Unstable, in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickHoare;

#[sealed]
impl ComparisonSort for QuickLomuto {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        quick_sort_with(slice, |range| {
            let p = lomuto(range, &mut compare);
            (p, p + 1)
        });
    }
}

#[sealed]
impl ComparisonSort for QuickHoare {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        quick_sort_with(slice, |range| {
            let p = hoare(range, &mut compare);
            (p + 1, p + 1)
        });
    }
}

/// Runs quicksort using the given partition function.
///
/// The partition function receives a subslice of length at least two and
/// returns `(l, r)`: after the call, the subslice is sorted if `[..l]` and
/// `[r..]` are sorted. Both parts must be shorter than the subslice.
fn quick_sort_with<T>(slice: &mut [T], mut partition: impl FnMut(&mut [T]) -> (usize, usize)) {
    let mut stack: Vec<Range<usize>> = vec![0..slice.len()];

    while let Some(range) = stack.pop() {
        if range.len() < 2 {
            continue;
        }
        let (l, r) = partition(&mut slice[range.clone()]);
        let left = range.start..range.start + l;
        let right = range.start + r..range.end;
        // The smaller part is popped first
        if left.len() < right.len() {
            stack.push(right);
            stack.push(left);
        } else {
            stack.push(left);
            stack.push(right);
        }
    }
}

/// Partitions around the last element and returns its final position.
fn lomuto<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: &mut C) -> usize {
    let pivot = slice.len() - 1;
    let mut i = 0;
    for j in 0..pivot {
        if compare(&slice[j], &slice[pivot]) != Ordering::Greater {
            slice.swap(i, j);
            i += 1;
        }
    }
    slice.swap(i, pivot);
    i
}

/// Partitions around the first element and returns the last position of the
/// left part, which is never the last position of the slice.
fn hoare<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: &mut C) -> usize {
    // The pivot element can be swapped, so we follow its position
    let mut pivot = 0;
    let mut i = 0;
    let mut j = slice.len() - 1;
    loop {
        while compare(&slice[i], &slice[pivot]) == Ordering::Less {
            i += 1;
        }
        while compare(&slice[j], &slice[pivot]) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        slice.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }
        i += 1;
        j -= 1;
    }
}
