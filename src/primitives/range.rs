//! Half-open range primitives for bisection.
//!
//! ## Purpose
//!
//! This module provides the candidate-range abstraction the search loop
//! narrows. A range `[base, limit)` includes `base` and excludes `limit`;
//! the search maintains the invariant that every index holding the target
//! lies inside the current range.
//!
//! ## Design notes
//!
//! * **Overflow safety**: The midpoint is computed as
//!   `base + (limit - base) / 2`, which cannot overflow even when `limit`
//!   is as large as the sequence length allows. The naive
//!   `(base + limit) / 2` form can wrap for large indices.
//! * **Lower bias**: For even-length ranges the midpoint falls in the lower
//!   half (integer division truncates).
//! * **Consuming narrowing**: `above` and `below` return new ranges rather
//!   than mutating, keeping the loop state explicit.
//!
//! ## Invariants
//!
//! * `base <= limit` for every range produced by this module's constructors
//!   when narrowing around a midpoint of the same range.
//! * `midpoint()` returns an index strictly inside `[base, limit)`, or
//!   `None` when the range is empty.
//! * Every narrowing step strictly shrinks a non-empty range, so a loop
//!   driven by `midpoint()` terminates.
//!
//! ## Non-goals
//!
//! * This module does not compare sequence elements or decide which half to
//!   keep; that is the algorithm layer's job.

// ============================================================================
// Data Structures
// ============================================================================

/// Half-open candidate range `[base, limit)` over sequence indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    /// Lower boundary index (inclusive).
    base: usize,

    /// Upper boundary index (exclusive).
    limit: usize,
}

impl SearchRange {
    /// Create the full range `[0, len)` over a sequence of `len` elements.
    #[inline]
    pub fn full(len: usize) -> Self {
        Self {
            base: 0,
            limit: len,
        }
    }

    /// Lower boundary (inclusive).
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Upper boundary (exclusive).
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Check if the range contains no candidate indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base >= self.limit
    }

    /// Number of candidate indices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.limit.saturating_sub(self.base)
    }

    /// Midpoint of the range, or `None` when the range is empty.
    ///
    /// Biased toward the lower half for even-length ranges. Computed
    /// overflow-free as `base + (limit - base) / 2`.
    #[inline]
    pub fn midpoint(&self) -> Option<usize> {
        if self.base < self.limit {
            Some(self.base + (self.limit - self.base) / 2)
        } else {
            None
        }
    }

    /// Narrow to the half above `mid`: `[mid + 1, limit)`.
    ///
    /// Used when the probed element is strictly less than the target.
    #[inline]
    pub fn above(self, mid: usize) -> Self {
        Self {
            base: mid + 1,
            limit: self.limit,
        }
    }

    /// Narrow to the half below `mid`: `[base, mid)`.
    ///
    /// Used when the probed element is strictly greater than the target.
    #[inline]
    pub fn below(self, mid: usize) -> Self {
        Self {
            base: self.base,
            limit: mid,
        }
    }
}
