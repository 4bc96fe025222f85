//! Candidate-container vocabulary for the membership check.

use std::collections::{BTreeSet, HashSet};
use std::ops::Range;

/// A candidate container handed to the membership check.
///
/// Only ordered list-like sequences expose their elements. Everything else
/// reports `None`, which routes the caller toward the equality check before
/// membership is ever evaluated.
pub trait Allowed<T> {
    /// Returns the elements when the container is an ordered sequence.
    fn as_list(&self) -> Option<&[T]>;
}

// Any bare value is its own non-sequence candidate container.
impl<T> Allowed<T> for T {
    fn as_list(&self) -> Option<&[T]> {
        None
    }
}

impl<T> Allowed<T> for Vec<T> {
    fn as_list(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Allowed<T> for [T] {
    fn as_list(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Allowed<T> for [T; N] {
    fn as_list(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> Allowed<T> for HashSet<T> {
    fn as_list(&self) -> Option<&[T]> {
        None
    }
}

impl<T> Allowed<T> for BTreeSet<T> {
    fn as_list(&self) -> Option<&[T]> {
        None
    }
}

impl<T> Allowed<T> for Range<T> {
    fn as_list(&self) -> Option<&[T]> {
        None
    }
}
