//! Error types for bisect operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur when the opt-in
//! checks of the high-level API are enabled: input validation and builder
//! configuration mistakes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the index of the
//!   first sortedness violation).
//! * **Optional**: The core search function is total and never produces an
//!   error; every variant here originates in the builder API.
//! * **No-std**: No variant allocates, so the type is available without
//!   `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for bisect operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectError {
    /// Input sequence is not sorted in non-decreasing order.
    UnsortedInput {
        /// Index of the first element greater than its successor.
        index: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BisectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsortedInput { index } => {
                write!(
                    f,
                    "Unsorted input: element at index {index} is greater than its successor"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BisectError {}
