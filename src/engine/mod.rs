//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates searches on behalf of the high-level API: opt-in
//! input validation, the instrumented search pass, and result reporting.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Instrumented search execution.
pub mod executor;

/// Search report types.
pub mod output;
