//! Searching algorithms.
//!
//! Linear searches work on any slice; binary searches require a slice sorted
//! in ascending order, which is not checked. Missing targets are reported as
//! `None`.
//!
//! [`BinarySearchTree`] provides the same operations on a dynamic set of
//! keys.

mod binary;
pub use binary::*;

mod bst;
pub use bst::*;

mod linear;
pub use linear::*;
