//! Execution engine for instrumented binary searches.
//!
//! ## Purpose
//!
//! This module runs the same narrowing loop as the core algorithm while
//! collecting instrumentation: the number of comparisons performed and,
//! optionally, the trail of probed indices. The high-level API delegates
//! here so the bare `search` function stays allocation-free.
//!
//! ## Design notes
//!
//! * Shares all range arithmetic with the core via `SearchRange`, so the
//!   narrowing semantics cannot drift between the two loops.
//! * Probe recording allocates one `Vec` and is opt-in; comparison counting
//!   is always on and free.
//! * Generic over signed primitive integers.
//!
//! ## Invariants
//!
//! * The index produced is identical to what `algorithms::bisect::search`
//!   returns for the same input.
//! * When probes are recorded and a match is found, the last probe equals
//!   the returned index.
//! * `comparisons` equals the number of midpoint probes, at most
//!   `ceil(log2(n + 1))` for a sequence of length `n`.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not format results (handled by `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::primitives::range::SearchRange;

// ============================================================================
// Executor Output
// ============================================================================

/// Raw output from an instrumented search pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorOutput {
    /// Index of a matching element, if any.
    pub index: Option<usize>,

    /// Number of element comparisons performed.
    pub comparisons: usize,

    /// Probed indices in order, when recording was requested.
    pub probes: Option<Vec<usize>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Instrumented search pass.
pub struct SearchExecutor;

impl SearchExecutor {
    /// Run the narrowing loop over `seq`, counting comparisons and
    /// optionally recording the probe trail.
    pub fn run<T: PrimInt + Signed>(
        seq: &[T],
        target: T,
        record_probes: bool,
    ) -> ExecutorOutput {
        let mut range = SearchRange::full(seq.len());
        let mut comparisons = 0;
        let mut probes = record_probes.then(Vec::new);

        while let Some(mid) = range.midpoint() {
            if let Some(trail) = probes.as_mut() {
                trail.push(mid);
            }
            comparisons += 1;

            match seq[mid].cmp(&target) {
                Ordering::Less => range = range.above(mid),
                Ordering::Greater => range = range.below(mid),
                Ordering::Equal => {
                    return ExecutorOutput {
                        index: Some(mid),
                        comparisons,
                        probes,
                    };
                }
            }
        }

        ExecutorOutput {
            index: None,
            comparisons,
            probes,
        }
    }
}
