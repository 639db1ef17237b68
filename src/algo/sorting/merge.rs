use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;

/// Merge sort.
///
/// The input is split at the midpoint, both halves are sorted recursively and
/// then merged; on ties the merge takes the element of the left half, which
/// makes the sort stable. The recursion depth is logarithmic.
///
/// Since elements cannot be moved out of a slice, the sort computes the
/// sorted permutation of the indices, using a linear auxiliary buffer, and
/// then applies the permutation in place by following its cycles.
///
/// O(_n_ log _n_) comparisons in all cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merge;

#[sealed]
impl ComparisonSort for Merge {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        if slice.len() <= 1 {
            return;
        }
        let mut perm: Vec<usize> = (0..slice.len()).collect();
        let mut buffer = Vec::with_capacity(slice.len());
        merge_sort_indices(slice, &mut perm, &mut buffer, &mut compare);
        apply_permutation(slice, perm);
    }
}

fn merge_sort_indices<T, C: FnMut(&T, &T) -> Ordering>(
    slice: &[T],
    perm: &mut [usize],
    buffer: &mut Vec<usize>,
    compare: &mut C,
) {
    if perm.len() <= 1 {
        return;
    }
    let mid = perm.len() / 2;
    merge_sort_indices(slice, &mut perm[..mid], buffer, compare);
    merge_sort_indices(slice, &mut perm[mid..], buffer, compare);
    merge(slice, perm, mid, buffer, compare);
}

/// Merges the sorted runs `perm[..mid]` and `perm[mid..]`.
fn merge<T, C: FnMut(&T, &T) -> Ordering>(
    slice: &[T],
    perm: &mut [usize],
    mid: usize,
    buffer: &mut Vec<usize>,
    compare: &mut C,
) {
    buffer.clear();
    let (left, right) = perm.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&slice[left[i]], &slice[right[j]]) != Ordering::Greater {
            buffer.push(left[i]);
            i += 1;
        } else {
            buffer.push(right[j]);
            j += 1;
        }
    }
    buffer.extend_from_slice(&left[i..]);
    buffer.extend_from_slice(&right[j..]);

    perm.copy_from_slice(buffer);
}

/// Moves `slice[perm[k]]` to position `k`, for every `k`.
fn apply_permutation<T>(slice: &mut [T], mut perm: Vec<usize>) {
    for start in 0..slice.len() {
        let mut curr = start;
        while perm[curr] != start {
            let next = perm[curr];
            slice.swap(curr, next);
            perm[curr] = curr;
            curr = next;
        }
        perm[curr] = curr;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_apply_permutation() {
        let mut letters = ['a', 'b', 'c', 'd', 'e'];
        apply_permutation(&mut letters, vec![2, 0, 1, 4, 3]);
        assert_eq!(letters, ['c', 'a', 'b', 'e', 'd']);
    }

    #[test]
    fn test_left_run_wins_ties() {
        let mut pairs = [(1, 0), (0, 1), (1, 2), (0, 3)];
        Merge::sort_by(&mut pairs, |x, y| x.0.cmp(&y.0));
        assert_eq!(pairs, [(0, 1), (0, 3), (1, 0), (1, 2)]);
    }
}
