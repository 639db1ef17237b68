use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;

/// Bubble sort.
///
/// Each pass swaps adjacent elements out of order, so at the end of the `i`-th
/// pass the last `i` elements are in their final position. The sort stops as
/// soon as a pass performs no swap, so sorted input requires a single pass.
///
/// Stable, in place, quadratic in the worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bubble;

#[sealed]
impl ComparisonSort for Bubble {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        let n = slice.len();
        for i in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - i - 1 {
                if compare(&slice[j], &slice[j + 1]) == Ordering::Greater {
                    slice.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}
