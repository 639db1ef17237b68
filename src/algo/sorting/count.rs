use super::{unsigned_keys, SortError};
use num_traits::PrimInt;

/// Returns a sorted copy of `values` using counting sort.
///
/// See [`count_sort_by_key`].
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sorting::{count_sort, SortError};
///
/// assert_eq!(count_sort(&[4, 2, 2, 8, 3, 3, 1])?, vec![1, 2, 2, 3, 3, 4, 8]);
/// assert!(matches!(
///     count_sort(&[4, -1, 2]),
///     Err(SortError::NegativeValue { index: 1, .. })
/// ));
/// # Ok::<(), SortError>(())
/// ```
pub fn count_sort<T: PrimInt>(values: &[T]) -> Result<Vec<T>, SortError> {
    count_sort_by_key(values, |&value| value)
}

/// Returns a copy of `items` sorted by a non-negative integer key using
/// counting sort.
///
/// The occurrences of each key between the minimum and the maximum key are
/// counted; prefix sums then give the final position of the last item with
/// each key, and items are placed scanning the input from right to left,
/// which makes the sort stable.
///
/// Time and space are linear in the number of items plus the difference
/// between the maximum and the minimum key.
///
/// # Errors
///
/// * [`SortError::NegativeValue`] if some key is negative; keys are checked
///   before anything else, so even a single negative key is an error.
/// * [`SortError::RangeTooLarge`] if the counters for the range of keys
///   cannot be allocated.
pub fn count_sort_by_key<T: Clone, K: PrimInt>(
    items: &[T],
    key: impl FnMut(&T) -> K,
) -> Result<Vec<T>, SortError> {
    const ALGORITHM: &str = "Count sort";

    let keys = unsigned_keys(items, key, ALGORITHM)?;
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let (min, max) = keys
        .iter()
        .fold((u128::MAX, 0), |(min, max), &k| (min.min(k), max.max(k)));
    let range = usize::try_from(max - min)
        .ok()
        .and_then(|range| range.checked_add(1))
        .ok_or(SortError::RangeTooLarge {
            algorithm: ALGORITHM,
        })?;

    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(range)
        .map_err(|_| SortError::RangeTooLarge {
            algorithm: ALGORITHM,
        })?;
    counts.resize(range, 0);

    for &k in &keys {
        counts[(k - min) as usize] += 1;
    }
    for i in 1..range {
        counts[i] += counts[i - 1];
    }

    let mut order = vec![0; items.len()];
    for (i, &k) in keys.iter().enumerate().rev() {
        let count = &mut counts[(k - min) as usize];
        *count -= 1;
        order[*count] = i;
    }

    Ok(order.into_iter().map(|i| items[i].clone()).collect())
}
