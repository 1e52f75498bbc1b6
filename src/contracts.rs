// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the container and the chaining combinators.
//!
//! These are debug-mode assertions that state the properties the rest of the
//! crate relies on. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail **at the point of violation** instead of three stages later
//! 3. Are called from the combinators themselves, so every test run checks them
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_state`            | discriminant matches the transition just made     |
//! | `check_short_circuit`    | an error input skips the stage and stays an error |
//! | `check_pipeline_report`  | stage counts and failure index are consistent     |
//!
//! # Usage
//!
//! ```ignore
//! use outcome::contracts::*;
//!
//! // In debug builds, this panics if the stage ran on an error
//! check_short_circuit(State::Error, invoked, output.state());
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The container stores one member plus a tag, never both members.
/// If this fails, the crate won't build.
const _: () = {
    use std::mem::size_of;

    // INVARIANT: exactly one live member
    // Storing both u64 slots side by side would need 16 bytes before the tag.
    assert!(size_of::<Outcome<u64, u64>>() <= 2 * size_of::<u64>());

    // INVARIANT: zero-sized error still needs a discriminant, nothing more
    assert!(size_of::<Outcome<u32, ()>>() == size_of::<Option<u32>>());
};

use crate::error::State;
use crate::outcome::Outcome;
use crate::pipeline::PipelineReport;

// ============================================================================
// CONTAINER CONTRACTS
// ============================================================================

/// Check that a container is in the state a transition just put it in.
///
/// # Panics (debug builds only)
/// Panics if `outcome.state() != expected`.
#[inline]
pub fn check_state<T, E>(outcome: &Outcome<T, E>, expected: State) {
    debug_assert_eq!(
        outcome.state(),
        expected,
        "Contract violation: state - expected {} after transition, found {}",
        expected,
        outcome.state()
    );
}

// ============================================================================
// COMBINATOR CONTRACTS
// ============================================================================

/// Check one application of a stage against its input state.
///
/// `invoked` is recorded by the stage wrapper itself, not by the branch that
/// chose to call it.
///
/// # Panics (debug builds only)
/// Panics if an error-state input reached the stage, if it came out in value
/// state, or if a value-state input never reached the stage.
#[inline]
pub fn check_short_circuit(input: State, invoked: bool, output: State) {
    if input == State::Error {
        debug_assert!(
            !invoked,
            "Contract violation: short_circuit - stage invoked on an error-state container"
        );
        debug_assert_eq!(
            output,
            State::Error,
            "Contract violation: short_circuit - error-state input came out as {}",
            output
        );
    } else {
        debug_assert!(
            invoked,
            "Contract violation: short_circuit - value-state input skipped its stage"
        );
    }
}

/// Check that a traced pipeline run is self-consistent.
///
/// - never more stages invoked than registered
/// - an error-state input invokes nothing
/// - a failure at stage `i` means exactly `i + 1` stages ran
/// - a run that ends in value state ran every stage
///
/// # Panics (debug builds only)
/// Panics if any of the above is violated.
#[inline]
pub fn check_pipeline_report<T, E>(report: &PipelineReport<T, E>, input: State, stage_count: usize) {
    debug_assert!(
        report.invoked <= stage_count,
        "Contract violation: pipeline - invoked {} > stage count {}",
        report.invoked,
        stage_count
    );

    if input == State::Error {
        debug_assert_eq!(
            report.invoked, 0,
            "Contract violation: pipeline - {} stages ran on an error-state input",
            report.invoked
        );
        debug_assert!(
            report.failed_at.is_none(),
            "Contract violation: pipeline - failure blamed on a stage for an error-state input"
        );
    }

    if let Some(failure) = &report.failed_at {
        debug_assert_eq!(
            report.invoked,
            failure.index + 1,
            "Contract violation: pipeline - failure at stage {} but {} stages ran",
            failure.index,
            report.invoked
        );
        debug_assert!(
            report.output.has_error(),
            "Contract violation: pipeline - failure recorded but output holds a value"
        );
    }

    if report.output.has_value() {
        debug_assert_eq!(
            report.invoked, stage_count,
            "Contract violation: pipeline - value output after {} of {} stages",
            report.invoked, stage_count
        );
    }
}
