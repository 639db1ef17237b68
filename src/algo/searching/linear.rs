/// Returns the index of the first occurrence of `target`, or `None`.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::linear_search;
///
/// assert_eq!(linear_search(&[64, 34, 25, 12, 22, 11, 90], &25), Some(2));
/// assert_eq!(linear_search(&[1, 2, 3, 4, 5], &6), None);
/// ```
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|value| value == target)
}

/// Returns the indices of all occurrences of `target`, in increasing order.
pub fn linear_search_all<T: PartialEq>(values: &[T], target: &T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, value)| (value == target).then_some(i))
        .collect()
}

/// Returns the index of the first element satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::linear_search_by;
///
/// assert_eq!(linear_search_by(&[1, 3, 5, 8, 12], |&x| x > 7), Some(3));
/// assert_eq!(linear_search_by(&[1, 3, 5, 7, 9], |&x| x % 2 == 0), None);
/// ```
pub fn linear_search_by<T>(values: &[T], predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    values.iter().position(predicate)
}

/// Returns the index of the first item whose key is equal to `target`, or
/// `None`.
pub fn linear_search_by_key<T, K: PartialEq>(
    items: &[T],
    target: &K,
    mut key: impl FnMut(&T) -> K,
) -> Option<usize> {
    items.iter().position(|item| key(item) == *target)
}

/// The minimum and the maximum of a sequence, with their positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax<'a, T> {
    /// The minimum.
    pub min: &'a T,
    /// The index of the first occurrence of the minimum.
    pub min_index: usize,
    /// The maximum.
    pub max: &'a T,
    /// The index of the first occurrence of the maximum.
    pub max_index: usize,
}

/// Returns the minimum and the maximum of `values`, with the indices of their
/// first occurrences, in a single pass; returns `None` on an empty slice.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::min_max;
///
/// let result = min_max(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
/// assert_eq!((*result.min, result.min_index), (1, 1));
/// assert_eq!((*result.max, result.max_index), (9, 5));
/// assert!(min_max::<u8>(&[]).is_none());
/// ```
pub fn min_max<T: Ord>(values: &[T]) -> Option<MinMax<'_, T>> {
    let (first, rest) = values.split_first()?;
    let mut result = MinMax {
        min: first,
        min_index: 0,
        max: first,
        max_index: 0,
    };

    for (i, value) in rest.iter().enumerate() {
        if value < result.min {
            result.min = value;
            result.min_index = i + 1;
        } else if value > result.max {
            result.max = value;
            result.max_index = i + 1;
        }
    }

    Some(result)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_occurrences() {
        assert_eq!(linear_search_all(&[1, 2, 1, 3, 1], &1), vec![0, 2, 4]);
        assert!(linear_search_all(&[1, 2, 3], &4).is_empty());
    }

    #[test]
    fn test_by_key() {
        let people = [("ann", 31), ("bob", 25), ("cid", 31)];
        assert_eq!(linear_search_by_key(&people, &31, |p| p.1), Some(0));
        assert_eq!(linear_search_by_key(&people, &"cid", |p| p.0), Some(2));
        assert_eq!(linear_search_by_key(&people, &40, |p| p.1), None);
    }

    #[test]
    fn test_min_max_ties() {
        let result = min_max(&[2, 2, 2]).unwrap();
        assert_eq!((result.min_index, result.max_index), (0, 0));
    }
}
