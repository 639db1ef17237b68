use std::cmp::Ordering;

/// Which occurrence of the target a bisection looks for.
#[derive(Clone, Copy)]
enum Occurrence {
    Any,
    First,
    Last,
}

/// Searches the inclusive range `low..=high` of a sorted slice by bisection.
///
/// `compare` compares an element with the target. When looking for the first
/// (last) occurrence, a match is recorded and the search continues on the
/// left (right) of the midpoint.
fn bisect<T>(
    values: &[T],
    mut low: usize,
    mut high: usize,
    mut compare: impl FnMut(&T) -> Ordering,
    occurrence: Occurrence,
) -> Option<usize> {
    let mut found = None;
    while low <= high {
        let mid = low + (high - low) / 2;
        match (compare(&values[mid]), occurrence) {
            (Ordering::Equal, Occurrence::Any) => return Some(mid),
            (Ordering::Equal, Occurrence::First) => {
                found = Some(mid);
                match mid.checked_sub(1) {
                    Some(h) => high = h,
                    None => break,
                }
            }
            (Ordering::Equal, Occurrence::Last) => {
                found = Some(mid);
                low = mid + 1;
            }
            (Ordering::Greater, _) => match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            },
            (Ordering::Less, _) => low = mid + 1,
        }
    }
    found
}

/// Returns an index of `target` in a slice sorted in ascending order, or
/// `None`.
///
/// If `target` occurs more than once, any of its indices may be returned. The
/// midpoint of the range `[low..=high]` is `low + (high - low) / 2`.
///
/// The slice is not checked to be sorted: on unsorted input, the result is
/// meaningless.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11, 13], &7), Some(3));
/// assert_eq!(binary_search(&[1, 2, 3, 4, 5], &6), None);
/// assert_eq!(binary_search(&[], &5), None);
/// ```
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let high = values.len().checked_sub(1)?;
    bisect(values, 0, high, |value| value.cmp(target), Occurrence::Any)
}

/// Returns an index of `target` in the inclusive range `low..=high` of a
/// slice sorted in ascending order, or `None`.
///
/// The range is empty if `low > high`.
///
/// # Panics
///
/// Panics if the range is not empty and `high` is not a valid index.
pub fn binary_search_in_range<T: Ord>(
    values: &[T],
    target: &T,
    low: usize,
    high: usize,
) -> Option<usize> {
    if low <= high {
        assert!(
            high < values.len(),
            "The upper bound ({}) is out of range (length {})",
            high,
            values.len()
        );
    }
    bisect(values, low, high, |value| value.cmp(target), Occurrence::Any)
}

/// Returns an index of `target` in a slice sorted in ascending order, or
/// `None`, using recursion on halves of the range.
///
/// The result is the same as that of [`binary_search`]; the recursion depth is
/// logarithmic in the length of the slice.
pub fn binary_search_recursive<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let high = values.len().checked_sub(1)?;
    search_halves(values, target, 0, high)
}

fn search_halves<T: Ord>(values: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low > high {
        return None;
    }
    let mid = low + (high - low) / 2;
    match values[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => search_halves(values, target, low, mid.checked_sub(1)?),
        Ordering::Less => search_halves(values, target, mid + 1, high),
    }
}

/// Returns the index of an item whose key is `target` in a slice sorted by
/// that key, or `None`.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::binary_search_by_key;
///
/// let items = [("a", 1), ("b", 4), ("c", 9)];
/// assert_eq!(binary_search_by_key(&items, &4, |item| item.1), Some(1));
/// ```
pub fn binary_search_by_key<T, K: Ord>(
    items: &[T],
    target: &K,
    mut key: impl FnMut(&T) -> K,
) -> Option<usize> {
    let high = items.len().checked_sub(1)?;
    bisect(items, 0, high, |item| key(item).cmp(target), Occurrence::Any)
}

/// Returns the index of the first occurrence of `target` in a slice sorted in
/// ascending order, or `None`.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::*;
///
/// let values = [1, 2, 2, 2, 3, 4, 4, 5, 6, 6, 6, 7];
/// assert_eq!(binary_search_leftmost(&values, &2), Some(1));
/// assert_eq!(binary_search_rightmost(&values, &2), Some(3));
/// assert_eq!(binary_search_range(&values, &6), Some((8, 10)));
/// assert_eq!(binary_search_range(&values, &8), None);
/// ```
pub fn binary_search_leftmost<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let high = values.len().checked_sub(1)?;
    bisect(values, 0, high, |value| value.cmp(target), Occurrence::First)
}

/// Returns the index of the last occurrence of `target` in a slice sorted in
/// ascending order, or `None`.
pub fn binary_search_rightmost<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let high = values.len().checked_sub(1)?;
    bisect(values, 0, high, |value| value.cmp(target), Occurrence::Last)
}

/// Returns the indices of the first and of the last occurrence of `target` in
/// a slice sorted in ascending order, or `None`.
pub fn binary_search_range<T: Ord>(values: &[T], target: &T) -> Option<(usize, usize)> {
    let first = binary_search_leftmost(values, target)?;
    let last = binary_search_rightmost(values, target)?;
    Some((first, last))
}

/// Returns the first index of a slice sorted in ascending order whose value is
/// greater than or equal to `target`, or the length of the slice if there is
/// no such index.
///
/// Inserting `target` at the returned index keeps the slice sorted.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::insertion_point;
///
/// let mut values = vec![1, 3, 3, 7];
/// assert_eq!(insertion_point(&values, &3), 1);
/// assert_eq!(insertion_point(&values, &5), 3);
/// assert_eq!(insertion_point(&values, &9), 4);
/// let i = insertion_point(&values, &0);
/// values.insert(i, 0);
/// assert_eq!(values, [0, 1, 3, 3, 7]);
/// ```
pub fn insertion_point<T: Ord>(values: &[T], target: &T) -> usize {
    let (mut low, mut high) = (0, values.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Returns the row and the column of `target` in a sorted matrix, or `None`.
///
/// The rows of the matrix, concatenated, must form a sequence sorted in
/// ascending order; the matrix is searched as such a sequence, the element
/// of index `i` being in row `i / cols` and column `i % cols`, where `cols` is
/// the length of the first row.
///
/// # Panics
///
/// Panics if some row is shorter than the first one and the search reaches
/// one of its missing elements.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::search_matrix;
///
/// let matrix = [[1, 3, 5, 7], [10, 11, 16, 20], [23, 30, 34, 60]];
/// assert_eq!(search_matrix(&matrix, &16), Some((1, 2)));
/// assert_eq!(search_matrix(&matrix, &13), None);
/// ```
pub fn search_matrix<T: Ord, R: AsRef<[T]>>(matrix: &[R], target: &T) -> Option<(usize, usize)> {
    let cols = matrix.first()?.as_ref().len();
    let high = (matrix.len() * cols).checked_sub(1)?;

    let (mut low, mut high) = (0, high);
    while low <= high {
        let mid = low + (high - low) / 2;
        let (row, col) = (mid / cols, mid % cols);
        match matrix[row].as_ref()[col].cmp(target) {
            Ordering::Equal => return Some((row, col)),
            Ordering::Greater => high = mid.checked_sub(1)?,
            Ordering::Less => low = mid + 1,
        }
    }
    None
}
