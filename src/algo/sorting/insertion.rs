use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;

/// Insertion sort.
///
/// Each element is shifted left past the larger elements of the sorted prefix.
/// Stable, in place, quadratic in the worst case but linear on sorted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Insertion;

#[sealed]
impl ComparisonSort for Insertion {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        for i in 1..slice.len() {
            let mut j = i;
            while j > 0 && compare(&slice[j - 1], &slice[j]) == Ordering::Greater {
                slice.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

/// Insertion sort locating the insertion point by binary search.
///
/// The insertion point is the first position of the sorted prefix holding an
/// element larger than the one being inserted, which keeps the sort stable.
/// The number of comparisons is O(_n_ log _n_), but elements are still
/// shifted one position at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryInsertion;

#[sealed]
impl ComparisonSort for BinaryInsertion {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        for i in 1..slice.len() {
            let (mut low, mut high) = (0, i);
            while low < high {
                let mid = low + (high - low) / 2;
                if compare(&slice[mid], &slice[i]) == Ordering::Greater {
                    high = mid;
                } else {
                    low = mid + 1;
                }
            }
            slice[low..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binary_insertion_point_is_after_equals() {
        let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        BinaryInsertion::sort_by(&mut pairs, |x, y| x.0.cmp(&y.0));
        assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }
}
