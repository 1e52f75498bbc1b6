// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer stages the binary builds its pipelines from.
//!
//! Arithmetic wraps on overflow so `run` never panics on large `--stage`
//! arguments.

use outcome::Outcome;

/// The container every CLI stage works on.
pub type IntOutcome = Outcome<i64, String>;

/// Error payload of the failing stage in `outcome demo`.
pub const DIVISION_BY_ZERO: &str = "division by zero error!";

pub fn add(n: i64) -> impl Fn(i64) -> IntOutcome {
    move |v| Outcome::from_value(v.wrapping_add(n))
}

pub fn multiply(n: i64) -> impl Fn(i64) -> IntOutcome {
    move |v| Outcome::from_value(v.wrapping_mul(n))
}

/// Stage that always fails with `message`.
pub fn fail_with(message: &str) -> impl Fn(i64) -> IntOutcome {
    let message = message.to_string();
    move |_| Outcome::from_error(message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_wraps() {
        assert!(add(1)(i64::MAX).holds(&i64::MIN));
        assert!(multiply(2)(i64::MIN).holds(&0));
        assert!(multiply(-3)(4).holds(&-12));
    }

    #[test]
    fn test_fail_with_ignores_input() {
        let failed = fail_with(DIVISION_BY_ZERO)(5);
        assert_eq!(failed.error().map(String::as_str), Ok(DIVISION_BY_ZERO));
        assert!(fail_with("x")(0).has_error());
    }
}
