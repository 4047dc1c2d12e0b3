//! High-level API for binary search.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring opt-in behavior (input
//! validation, probe recording) around the core search.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Validated**: Configuration hygiene is checked when `.build()` is
//!   called; data validation runs per search when enabled.
//! * **Type-Safe**: Generic over signed primitive integer types.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//! * **Totality**: With validation disabled, `Bisector::search` cannot fail
//!   for any input.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BisectBuilder`] via `Bisect::new()`.
//! 2. Chain configuration methods (`.validate_input()`, `.record_probes()`).
//! 3. Call `.build()` to obtain a [`Bisector`].

// External dependencies
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::engine::executor::SearchExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SearchReport;
pub use crate::primitives::errors::BisectError;

// ============================================================================
// Bisect Builder
// ============================================================================

/// Fluent builder for configuring a binary searcher.
#[derive(Debug, Clone)]
pub struct BisectBuilder {
    /// Check sortedness of each input sequence before searching.
    pub validate_input: Option<bool>,

    /// Record the trail of probed indices in each report.
    pub record_probes: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for BisectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BisectBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            validate_input: None,
            record_probes: None,
            duplicate_param: None,
        }
    }

    /// Enable sortedness validation of input sequences.
    ///
    /// Validation costs O(n) per search; without it, unsorted input yields
    /// a meaningless (but panic-free) result.
    pub fn validate_input(mut self) -> Self {
        if self.validate_input.is_some() {
            self.duplicate_param = Some("validate_input");
        }
        self.validate_input = Some(true);
        self
    }

    /// Enable recording of the probed index trail in each report.
    pub fn record_probes(mut self) -> Self {
        if self.record_probes.is_some() {
            self.duplicate_param = Some("record_probes");
        }
        self.record_probes = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the searcher.
    pub fn build(self) -> Result<Bisector, BisectError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(Bisector {
            validate_input: self.validate_input.unwrap_or(false),
            record_probes: self.record_probes.unwrap_or(false),
        })
    }
}

// ============================================================================
// Bisector
// ============================================================================

/// Configured binary searcher.
#[derive(Debug, Clone, Copy)]
pub struct Bisector {
    validate_input: bool,
    record_probes: bool,
}

impl Bisector {
    /// Search `seq` for `target`, producing a report.
    ///
    /// Fails only when input validation is enabled and `seq` is not sorted
    /// in non-decreasing order. The sequence is borrowed for the duration of
    /// the call and never mutated or retained.
    pub fn search<T: PrimInt + Signed>(
        &self,
        seq: &[T],
        target: T,
    ) -> Result<SearchReport<T>, BisectError> {
        if self.validate_input {
            Validator::validate_sorted(seq)?;
        }

        let output = SearchExecutor::run(seq, target, self.record_probes);

        Ok(SearchReport {
            target,
            index: output.index,
            comparisons: output.comparisons,
            probes: output.probes,
        })
    }
}
