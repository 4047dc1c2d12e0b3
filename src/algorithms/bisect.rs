//! Core binary search over sorted signed-integer slices.
//!
//! ## Purpose
//!
//! This module implements the narrowing loop: maintain a half-open candidate
//! range `[base, limit)`, probe its midpoint, and discard the half that
//! cannot contain the target until a match is found or the range empties.
//!
//! ## Design notes
//!
//! * **Totality**: The function never panics, blocks, or reads out of
//!   bounds; every input yields `Some(index)` or `None`.
//! * **Precondition**: The slice must be sorted in non-decreasing order.
//!   This is not checked here; on unsorted input the result is meaningless
//!   but still in-bounds. Callers wanting a check use the engine validator.
//! * **Generics**: Generic over signed primitive integers (`i32`, `i64`, ...),
//!   mirroring the fixed-width signed element contract.
//!
//! ## Invariants
//!
//! * Every index holding a value equal to `target` lies within the current
//!   range at all times.
//! * Each iteration strictly shrinks a non-empty range, so the loop
//!   terminates after O(log n) probes.
//!
//! ## Non-goals
//!
//! * No first/last-occurrence guarantee among duplicates; the index returned
//!   is whichever occurrence the narrowing converges on.
//! * No comparator or key-extraction hooks; elements are compared directly.

// External dependencies
use core::cmp::Ordering;
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::primitives::range::SearchRange;

// ============================================================================
// Search Function
// ============================================================================

/// Locate `target` in a sorted slice, returning the index of an occurrence.
///
/// Returns `None` when no element equals `target`. The slice must be sorted
/// in non-decreasing order; duplicates are permitted but the occurrence
/// returned is unspecified.
///
/// # Examples
///
/// ```
/// use bisect::prelude::search;
///
/// let seq = [1, 2, 3, 4, 5, 7, 8, 9, 10];
/// assert_eq!(search(&seq, 7), Some(5));
/// assert_eq!(search(&seq, 6), None);
/// ```
#[inline]
pub fn search<T: PrimInt + Signed>(seq: &[T], target: T) -> Option<usize> {
    let mut range = SearchRange::full(seq.len());

    while let Some(mid) = range.midpoint() {
        match seq[mid].cmp(&target) {
            Ordering::Less => range = range.above(mid),
            Ordering::Greater => range = range.below(mid),
            Ordering::Equal => return Some(mid),
        }
    }

    None
}
