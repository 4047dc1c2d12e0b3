//! Input validation for bisect configuration and data.
//!
//! ## Purpose
//!
//! This module provides the opt-in checks used by the high-level API:
//! sortedness of the input sequence and builder configuration hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Opt-in**: The core search never calls into this module; sortedness
//!   checking is O(n) and only runs when the builder requests it.
//! * **Generics**: Validation is generic over signed primitive integers.
//!
//! ## Invariants
//!
//! * A sequence that passes `validate_sorted` is non-decreasing.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or repair input data.
//! * This module does not perform the search itself.

// External dependencies
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::primitives::errors::BisectError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for bisect configuration and input data.
///
/// Provides static methods returning `Result<(), BisectError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that a sequence is sorted in non-decreasing order.
    ///
    /// Empty and single-element sequences are trivially sorted. On failure
    /// the error carries the index of the first element greater than its
    /// successor.
    pub fn validate_sorted<T: PrimInt + Signed>(seq: &[T]) -> Result<(), BisectError> {
        for (index, pair) in seq.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(BisectError::UnsortedInput { index });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BisectError> {
        if let Some(parameter) = duplicate_param {
            return Err(BisectError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
