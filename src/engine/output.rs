//! Output types and result structures for bisect operations.
//!
//! ## Purpose
//!
//! This module defines the `SearchReport` struct which encapsulates the
//! outcome of a search performed through the high-level API: the match
//! index, the target it was searched for, and instrumentation.
//!
//! ## Design notes
//!
//! * **Optional Outputs**: The probe trail is only populated when recording
//!   was enabled on the builder.
//! * **Ergonomics**: Implements `Display` for human-readable one-line
//!   output in the form `search(<target>) = <index | not found>`.
//! * **Generics**: Reports are generic over signed primitive integers.
//!
//! ## Invariants
//!
//! * When `index` is `Some(i)`, the searched sequence held the target at
//!   position `i` at call time.
//! * When probes were recorded and a match was found, the last probe equals
//!   the returned index.
//!
//! ## Non-goals
//!
//! * This module does not perform searches; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a search, with instrumentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<T> {
    /// The value that was searched for.
    pub target: T,

    /// Index of a matching element, or `None` when absent.
    pub index: Option<usize>,

    /// Number of element comparisons performed.
    pub comparisons: usize,

    /// Probed indices in order, when recording was enabled.
    pub probes: Option<Vec<usize>>,
}

impl<T> SearchReport<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if the target was found.
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    /// Check if the probe trail was recorded.
    pub fn has_probes(&self) -> bool {
        self.probes.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for SearchReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.index {
            Some(index) => write!(f, "search({}) = {}", self.target, index),
            None => write!(f, "search({}) = not found", self.target),
        }
    }
}
