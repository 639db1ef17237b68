use super::{unsigned_keys, SortError};
use num_traits::PrimInt;

const RADIX: u128 = 10;

/// Returns a sorted copy of `values` using least-significant-digit radix sort.
///
/// See [`radix_sort_by_key`].
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sorting::radix_sort;
///
/// assert_eq!(
///     radix_sort(&[170u32, 45, 75, 90, 2, 802, 24, 66])?,
///     vec![2, 24, 45, 66, 75, 90, 170, 802]
/// );
/// # Ok::<(), classic_algo::algo::sorting::SortError>(())
/// ```
pub fn radix_sort<T: PrimInt>(values: &[T]) -> Result<Vec<T>, SortError> {
    radix_sort_by_key(values, |&value| value)
}

/// Returns a copy of `items` sorted by a non-negative integer key using
/// least-significant-digit radix sort.
///
/// Each pass is a stable counting sort on one decimal digit of the keys,
/// starting from the least significant one; the number of passes is the
/// number of digits of the maximum key.
///
/// # Errors
///
/// [`SortError::NegativeValue`] if some key is negative.
pub fn radix_sort_by_key<T: Clone, K: PrimInt>(
    items: &[T],
    key: impl FnMut(&T) -> K,
) -> Result<Vec<T>, SortError> {
    let keys = unsigned_keys(items, key, "Radix sort")?;
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let max = keys.iter().copied().max().unwrap_or(0);
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut next = vec![0; items.len()];
    let digit = |key: u128, exp: u128| ((key / exp) % RADIX) as usize;

    let mut exp = 1;
    while max / exp > 0 {
        let mut counts = [0_usize; RADIX as usize];
        for &i in &order {
            counts[digit(keys[i], exp)] += 1;
        }
        for d in 1..counts.len() {
            counts[d] += counts[d - 1];
        }
        for &i in order.iter().rev() {
            let count = &mut counts[digit(keys[i], exp)];
            *count -= 1;
            next[*count] = i;
        }
        std::mem::swap(&mut order, &mut next);

        match exp.checked_mul(RADIX) {
            Some(e) => exp = e,
            None => break,
        }
    }

    Ok(order.into_iter().map(|i| items[i].clone()).collect())
}

/// Returns a sorted copy of byte strings of the same length using
/// least-significant-digit radix sort.
///
/// Each pass is a stable counting sort with one bucket per byte value, from
/// the last position to the first one.
///
/// # Errors
///
/// [`SortError::UnequalLengths`] if the strings do not have all the same
/// length.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::sorting::radix_sort_strings;
///
/// assert_eq!(
///     radix_sort_strings(&["dab", "cab", "fad", "bad"])?,
///     vec!["bad", "cab", "dab", "fad"]
/// );
/// assert!(radix_sort_strings(&["ab", "c"]).is_err());
/// # Ok::<(), classic_algo::algo::sorting::SortError>(())
/// ```
pub fn radix_sort_strings<S: AsRef<[u8]> + Clone>(strings: &[S]) -> Result<Vec<S>, SortError> {
    let Some(first) = strings.first() else {
        return Ok(Vec::new());
    };
    let len = first.as_ref().len();
    if let Some((index, string)) = strings
        .iter()
        .enumerate()
        .find(|(_, string)| string.as_ref().len() != len)
    {
        return Err(SortError::UnequalLengths {
            expected: len,
            index,
            found: string.as_ref().len(),
        });
    }

    let mut order: Vec<usize> = (0..strings.len()).collect();
    let mut next = vec![0; strings.len()];

    for pos in (0..len).rev() {
        let byte = |i: usize| strings[i].as_ref()[pos] as usize;
        let mut counts = [0_usize; 256];
        for &i in &order {
            counts[byte(i)] += 1;
        }
        for b in 1..counts.len() {
            counts[b] += counts[b - 1];
        }
        for &i in order.iter().rev() {
            let count = &mut counts[byte(i)];
            *count -= 1;
            next[*count] = i;
        }
        std::mem::swap(&mut order, &mut next);
    }

    Ok(order.into_iter().map(|i| strings[i].clone()).collect())
}
