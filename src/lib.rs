//! # Bisect — Binary Search for Rust
//!
//! A small, dependency-light binary search library for sorted sequences of
//! signed integers, built on the classic half-open bisection loop.
//!
//! ## What is bisection?
//!
//! Binary search locates a value in a sorted sequence by repeatedly halving
//! a candidate range. The implementation maintains a half-open range
//! `[base, limit)` with the invariant that every index holding the target
//! lies inside it. Each probe compares the midpoint element against the
//! target and discards the half that cannot contain a match, giving O(log n)
//! comparisons.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use bisect::prelude::*;
//!
//! let seq = vec![1, 2, 3, 4, 5, 7, 8, 9, 10];
//!
//! // Build the searcher
//! let searcher = Bisect::new()
//!     .validate_input()   // Reject unsorted sequences up front
//!     .build()?;
//!
//! let report = searcher.search(&seq, 7)?;
//! assert_eq!(report.index, Some(5));
//!
//! println!("{}", report);
//! # Result::<(), BisectError>::Ok(())
//! ```
//!
//! ```text
//! search(7) = 5
//! ```
//!
//! ### Minimal Use
//!
//! When no validation or instrumentation is needed, the free function runs
//! the bare narrowing loop. It is total: any slice and any target yield
//! either a matching index or `None`, never a panic.
//!
//! ```rust
//! use bisect::prelude::*;
//!
//! let seq = [1, 2, 3, 4, 5, 7, 8, 9, 10];
//! assert_eq!(search(&seq, 7), Some(5));
//! assert_eq!(search(&seq, 6), None);
//! assert_eq!(search::<i32>(&[], 6), None);
//! ```
//!
//! ### Result and Error Handling
//!
//! [`Bisector::search`](crate::prelude::Bisector::search) returns
//! `Result<SearchReport<T>, BisectError>`.
//!
//! - **`Ok(SearchReport<T>)`**: the match index (if any) plus instrumentation.
//! - **`Err(BisectError)`**: only possible when input validation is enabled
//!   and the sequence is not sorted.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use bisect::prelude::*;
//! # let seq = vec![1, 2, 3];
//!
//! let searcher = Bisect::new().build()?;
//! let report = searcher.search(&seq, 2)?;
//! # Result::<(), BisectError>::Ok(())
//! ```
//!
//! But you can also handle results explicitly:
//!
//! ```rust
//! use bisect::prelude::*;
//! # let seq = vec![3, 1, 2];
//!
//! let searcher = Bisect::new().validate_input().build()?;
//!
//! match searcher.search(&seq, 2) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Search rejected: {}", e),
//! }
//! # Result::<(), BisectError>::Ok(())
//! ```
//!
//! ## Duplicates
//!
//! When the target occurs more than once, the index returned is whichever
//! occurrence the narrowing converges on — not necessarily the first or the
//! last. Callers needing a specific occurrence have a stricter contract than
//! this crate provides.
//!
//! ## Unsorted input
//!
//! Sortedness is a precondition, not an enforced property. Without
//! `.validate_input()`, searching an unsorted sequence returns a meaningless
//! (but in-bounds and panic-free) answer.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! bisect = { version = "0.1", default-features = false }
//! ```
//!
//! The free `search` function allocates nothing; probe recording uses
//! `alloc` and is opt-in.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the core bisection loop.
mod algorithms;

// Layer 3: Engine - validation, instrumented execution, and reporting.
mod engine;

// High-level fluent API for binary search.
mod api;

// Standard bisect prelude.
pub mod prelude {
    pub use crate::algorithms::bisect::search;
    pub use crate::api::{BisectBuilder as Bisect, BisectError, Bisector, SearchReport};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
