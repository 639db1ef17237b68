use thiserror::Error;

/// Errors raised by the sorting algorithms that work on integer keys.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// A key is negative.
    #[error("{algorithm} only works with non-negative integers (negative key at index {index})")]
    NegativeValue {
        /// The name of the algorithm.
        algorithm: &'static str,
        /// The index of the first negative key.
        index: usize,
    },
    /// The difference between the largest and the smallest key is too large
    /// to allocate one counter per value.
    #[error("{algorithm}: the range of keys is too large")]
    RangeTooLarge {
        /// The name of the algorithm.
        algorithm: &'static str,
    },
    /// Strings do not have all the same length.
    #[error("All strings must have the same length (expected {expected}, string at index {index} has length {found})")]
    UnequalLengths {
        /// The length of the first string.
        expected: usize,
        /// The index of the first string with a different length.
        index: usize,
        /// The length of that string.
        found: usize,
    },
}
