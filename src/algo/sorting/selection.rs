use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;

/// Selection sort.
///
/// The minimum of the unsorted suffix (its first occurrence) is swapped into
/// the first position of the suffix. The swaps make the sort unstable.
///
/// In place, quadratic in all cases, but it performs at most `n - 1` swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection;

#[sealed]
impl ComparisonSort for Selection {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        let n = slice.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if compare(&slice[j], &slice[min]) == Ordering::Less {
                    min = j;
                }
            }
            if min != i {
                slice.swap(i, min);
            }
        }
    }
}
