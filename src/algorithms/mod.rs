//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core bisection loop. It depends only on the
//! primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Core binary search.
pub mod bisect;
