//! Shared test utilities and fixtures.

#![allow(dead_code)]

use outcome::{Outcome, Pipeline};

// Re-export canonical test utilities from outcome::testing
pub use outcome::testing::{add, fail_with, multiply, CallCounter, IntOutcome, DIVISION_BY_ZERO};

// ============================================================================
// FIXTURES
// ============================================================================

/// Starting value used by the canonical scenario.
pub const START: i64 = 1;

/// `+1, *3, *3`: takes `START` to 18.
pub fn value_pipeline() -> Pipeline<i64, String> {
    Pipeline::new()
        .then_named("add1", add(1))
        .then_named("times3", multiply(3))
        .then_named("times3", multiply(3))
}

/// `+1, fail, *3`: fails at stage 1.
pub fn failing_pipeline() -> Pipeline<i64, String> {
    Pipeline::new()
        .then_named("add1", add(1))
        .then_named("div0", fail_with(DIVISION_BY_ZERO))
        .then_named("times3", multiply(3))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert the container holds `expected`, with a readable message otherwise.
pub fn assert_value(outcome: &IntOutcome, expected: i64) {
    assert!(
        outcome.holds(&expected),
        "expected value {}, got {:?}",
        expected,
        outcome
    );
}

/// Assert the container is an error with exactly `expected` as payload.
pub fn assert_error(outcome: &IntOutcome, expected: &str) {
    match outcome {
        Outcome::Error(message) => assert_eq!(message, expected),
        Outcome::Value(value) => panic!("expected error '{}', got value {}", expected, value),
    }
}
