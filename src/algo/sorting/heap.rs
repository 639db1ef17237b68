use super::{__seal_comparison_sort, ComparisonSort};
use sealed::sealed;
use std::cmp::Ordering;

/// Heapsort.
///
/// The slice is first arranged as a binary max-heap, bottom up; then the
/// maximum is repeatedly swapped with the last element of the heap, which
/// shrinks by one, and the heap property is restored by sifting down the new
/// root. Sifting down is iterative.
///
/// Unstable, in place, O(_n_ log _n_) comparisons in all cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heap;

#[sealed]
impl ComparisonSort for Heap {
    fn sort_by<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], mut compare: C) {
        heapify(slice, &mut compare);
        for end in (1..slice.len()).rev() {
            slice.swap(0, end);
            sift_down(&mut slice[..end], 0, &mut compare);
        }
    }
}

/// Returns a copy of `values` arranged as a binary max-heap.
///
/// The children of the element in position `i` are in positions `2i + 1` and
/// `2i + 2`, and no child is larger than its parent.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sorting::build_max_heap;
///
/// let heap = build_max_heap(&[3, 1, 4, 1, 5, 9, 2, 6]);
/// assert_eq!(heap[0], 9);
/// assert!((1..heap.len()).all(|i| heap[(i - 1) / 2] >= heap[i]));
/// ```
pub fn build_max_heap<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut heap = values.to_vec();
    heapify(&mut heap, &mut T::cmp);
    heap
}

fn heapify<T, C: FnMut(&T, &T) -> Ordering>(slice: &mut [T], compare: &mut C) {
    for root in (0..slice.len() / 2).rev() {
        sift_down(slice, root, compare);
    }
}

fn sift_down<T, C: FnMut(&T, &T) -> Ordering>(heap: &mut [T], mut root: usize, compare: &mut C) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap.len() && compare(&heap[left], &heap[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < heap.len() && compare(&heap[right], &heap[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}
