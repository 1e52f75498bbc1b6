//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical arithmetic stages and a call counter for tests,
//! benches and the fuzz target.

#![doc(hidden)]

use std::cell::Cell;
use std::rc::Rc;

use crate::outcome::Outcome;

/// The container every helper stage works on.
pub type IntOutcome = Outcome<i64, String>;

/// Error payload produced by [`fail_with`] in the canonical scenario.
pub const DIVISION_BY_ZERO: &str = "division by zero error!";

/// Stage that adds `n`. Overflow wraps.
pub fn add(n: i64) -> impl Fn(i64) -> IntOutcome + Clone {
    move |v| Outcome::from_value(v.wrapping_add(n))
}

/// Stage that multiplies by `n`. Overflow wraps.
pub fn multiply(n: i64) -> impl Fn(i64) -> IntOutcome + Clone {
    move |v| Outcome::from_value(v.wrapping_mul(n))
}

/// Stage that always fails with `message`.
pub fn fail_with(message: &str) -> impl Fn(i64) -> IntOutcome + Clone {
    let message = message.to_string();
    move |_| Outcome::from_error(message.clone())
}

/// Counts how many times wrapped stages are invoked.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Wrap a stage so every invocation bumps the counter.
    pub fn wrap<T, E, F>(&self, stage: F) -> impl Fn(T) -> Outcome<T, E>
    where
        F: Fn(T) -> Outcome<T, E>,
    {
        let calls = Rc::clone(&self.calls);
        move |value| {
            calls.set(calls.get() + 1);
            stage(value)
        }
    }
}
