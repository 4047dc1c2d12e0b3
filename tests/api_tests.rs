//! Tests for the high-level builder API.
//!
//! These tests verify the fluent builder and configured searcher for:
//! - Default configuration and option toggles
//! - Opt-in input validation
//! - Probe recording and comparison counting
//! - Report display formatting
//!
//! ## Test Organization
//!
//! 1. **Builder** - Construction, defaults, duplicate detection
//! 2. **Searching** - Reports, validation behavior
//! 3. **Display** - Driver line formatting

use bisect::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn reference_seq() -> Vec<i32> {
    vec![1, 2, 3, 4, 5, 7, 8, 9, 10]
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the default builder.
///
/// Verifies that an unconfigured builder builds and searches.
#[test]
fn test_default_build() {
    let searcher = Bisect::new().build().expect("Default build should succeed");

    let report = searcher
        .search(&reference_seq(), 7)
        .expect("Search cannot fail without validation");

    assert_eq!(report.index, Some(5));
    assert_eq!(report.target, 7);
    assert!(report.is_found());
    assert!(!report.has_probes(), "Probes are off by default");
}

/// Test duplicate parameter detection.
///
/// Verifies that setting an option twice produces DuplicateParameter at
/// build time.
#[test]
fn test_duplicate_parameter() {
    let result = Bisect::new().validate_input().validate_input().build();

    assert!(
        matches!(
            result,
            Err(BisectError::DuplicateParameter {
                parameter: "validate_input"
            })
        ),
        "Duplicate option should error"
    );

    let result = Bisect::new().record_probes().record_probes().build();

    assert!(
        matches!(
            result,
            Err(BisectError::DuplicateParameter {
                parameter: "record_probes"
            })
        ),
        "Duplicate option should error"
    );
}

// ============================================================================
// Searching Tests
// ============================================================================

/// Test the reference queries through the full API.
///
/// Verifies the same results as the free function for the demo dataset.
#[test]
fn test_reference_queries() {
    let seq = reference_seq();
    let searcher = Bisect::new().validate_input().build().unwrap();

    let cases = [(7, Some(5)), (6, None), (12, None), (0, None)];
    for (target, expected) in cases {
        let report = searcher.search(&seq, target).unwrap();
        assert_eq!(report.index, expected, "target={}", target);
    }
}

/// Test that enabled validation rejects unsorted input.
///
/// Verifies the error carries the index of the first inversion.
#[test]
fn test_validation_rejects_unsorted() {
    let searcher = Bisect::new().validate_input().build().unwrap();

    let result = searcher.search(&[1, 3, 2, 4], 2);
    assert!(
        matches!(result, Err(BisectError::UnsortedInput { index: 1 })),
        "First inversion is at index 1"
    );
}

/// Test that disabled validation accepts any input.
///
/// Verifies the search stays total (in-bounds, panic-free) even when the
/// precondition is violated; the result itself is meaningless.
#[test]
fn test_no_validation_is_total() {
    let searcher = Bisect::new().build().unwrap();

    let report = searcher.search(&[5, 1, 4, 2], 3).unwrap();
    if let Some(idx) = report.index {
        assert!(idx < 4, "Any returned index is in bounds");
    }
}

/// Test probe recording.
///
/// Verifies the recorded trail matches the narrowing order and ends at the
/// returned index on a hit.
#[test]
fn test_probe_recording() {
    let seq = reference_seq();
    let searcher = Bisect::new().record_probes().build().unwrap();

    let report = searcher.search(&seq, 7).unwrap();
    let probes = report.probes.as_ref().expect("Probes were requested");

    assert_eq!(probes, &vec![4, 7, 6, 5], "Narrowing order for target 7");
    assert_eq!(
        probes.last().copied(),
        report.index,
        "Hit trail ends at the match"
    );
    assert_eq!(
        report.comparisons,
        probes.len(),
        "One comparison per probe"
    );
}

/// Test comparison counting.
///
/// Verifies counts are positive for non-empty input, zero for empty input,
/// and within the logarithmic bound.
#[test]
fn test_comparison_counts() {
    let searcher = Bisect::new().build().unwrap();

    let empty: Vec<i32> = vec![];
    assert_eq!(searcher.search(&empty, 1).unwrap().comparisons, 0);

    for n in 1..128usize {
        let seq: Vec<i32> = (0..n as i32).collect();
        let bound = usize::BITS as usize - (n + 1).leading_zeros() as usize + 1;

        for target in [-1, 0, (n / 2) as i32, n as i32] {
            let report = searcher.search(&seq, target).unwrap();
            assert!(report.comparisons >= 1, "At least one probe when n > 0");
            assert!(
                report.comparisons <= bound,
                "n={}, target={}: {} probes exceeds log bound {}",
                n,
                target,
                report.comparisons,
                bound
            );
        }
    }
}

/// Test agreement between the API and the free function.
#[test]
fn test_api_matches_free_function() {
    let searcher = Bisect::new().record_probes().build().unwrap();

    for n in 0..32usize {
        let seq: Vec<i32> = (0..n as i32).map(|i| 2 * i).collect();
        for target in -1..(2 * n as i32 + 1) {
            let report = searcher.search(&seq, target).unwrap();
            assert_eq!(report.index, search(&seq, target), "n={} t={}", n, target);
        }
    }
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test report display formatting.
///
/// Verifies the driver line format `search(<target>) = <result>`.
#[test]
fn test_report_display() {
    let seq = reference_seq();
    let searcher = Bisect::new().build().unwrap();

    let hit = searcher.search(&seq, 7).unwrap();
    assert_eq!(hit.to_string(), "search(7) = 5");

    let miss = searcher.search(&seq, 6).unwrap();
    assert_eq!(miss.to_string(), "search(6) = not found");
}

/// Test error display formatting.
#[test]
fn test_error_display() {
    let err = BisectError::UnsortedInput { index: 3 };
    assert!(
        err.to_string().contains("index 3"),
        "Error should mention the violating index"
    );

    let err = BisectError::DuplicateParameter {
        parameter: "validate_input",
    };
    assert!(
        err.to_string().contains("validate_input"),
        "Error should mention the parameter"
    );
}
