// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-state container.
//!
//! `Outcome<T, E>` holds a value or an error, never both and never neither.
//! It is a plain enum, so the discriminant and the live member can't drift
//! apart and dropping it releases only what is actually stored.
//!
//! # Construction
//!
//! | Path                      | State | Notes                                  |
//! |---------------------------|-------|----------------------------------------|
//! | `Outcome::default()`      | error | holds `E::default()`                   |
//! | `Outcome::from_value(v)`  | value |                                        |
//! | `v.into()`                | value | the only implicit path                 |
//! | `Outcome::from_error(e)`  | error | always named, even when `T == E`       |
//!
//! The implicit path only ever produces a value. With `Outcome<i32, i32>` there
//! is no way to tell "an `i32` meant as a value" from "an `i32` meant as an
//! error" at a call site, so the error side always goes through a named
//! constructor or [`Outcome::set_error`].
//!
//! # Equality
//!
//! `==` is coarse: any two error-state containers are equal regardless of the
//! payload or even the payload type, and two value-state containers are equal
//! when their values are. Use [`Outcome::strict_eq`] when error payloads matter.

use crate::contracts;
use crate::error::{InvalidStateAccess, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value of type `T` or an error of type `E`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    /// Value-state container.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Outcome::Value(value)
    }

    /// Error-state container.
    #[inline]
    pub fn from_error(error: E) -> Self {
        Outcome::Error(error)
    }

    /// Lift a standard `Result`: `Ok` becomes a value, `Err` an error.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Error(error),
        }
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Which member is live.
    #[inline]
    pub fn state(&self) -> State {
        match self {
            Outcome::Value(_) => State::Value,
            Outcome::Error(_) => State::Error,
        }
    }

    /// Borrow the value.
    ///
    /// Fails with [`InvalidStateAccess`] in error state; callers that already
    /// checked [`has_value`](Self::has_value) can treat the `Err` arm as
    /// unreachable.
    pub fn value(&self) -> Result<&T, InvalidStateAccess> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(_) => Err(InvalidStateAccess::value_in_error_state()),
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, InvalidStateAccess> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(_) => Err(InvalidStateAccess::value_in_error_state()),
        }
    }

    /// Borrow the error payload. Fails in value state.
    pub fn error(&self) -> Result<&E, InvalidStateAccess> {
        match self {
            Outcome::Error(error) => Ok(error),
            Outcome::Value(_) => Err(InvalidStateAccess::error_in_value_state()),
        }
    }

    /// Take the value out, consuming the container.
    ///
    /// This is the explicit replacement for converting a container straight
    /// into its value type.
    pub fn into_value(self) -> Result<T, InvalidStateAccess> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(_) => Err(InvalidStateAccess::value_in_error_state()),
        }
    }

    pub fn into_error(self) -> Result<E, InvalidStateAccess> {
        match self {
            Outcome::Error(error) => Ok(error),
            Outcome::Value(_) => Err(InvalidStateAccess::error_in_value_state()),
        }
    }

    /// True iff in value state and the value equals `other`.
    pub fn holds(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Outcome::Value(value) if value == other)
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Switch to value state. The previously live member is dropped first.
    pub fn set_value(&mut self, value: T) {
        *self = Outcome::Value(value);
        contracts::check_state(self, State::Value);
    }

    /// Switch to error state. The previously live member is dropped first.
    ///
    /// For `Outcome<T, T>` this (or [`from_error`](Self::from_error)) is the
    /// only way to get an error-state container.
    pub fn set_error(&mut self, error: E) {
        *self = Outcome::Error(error);
        contracts::check_state(self, State::Error);
    }

    // ------------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------------

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Error(error) => Some(error),
            Outcome::Value(_) => None,
        }
    }

    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Value(value) => value,
            Outcome::Error(_) => default,
        }
    }

    /// The value, or one computed from the error.
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Value(value) => value,
            Outcome::Error(error) => f(error),
        }
    }

    /// Transform the value, leaving an error untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Error(error) => Outcome::Error(error),
        }
    }

    /// Transform the error, leaving a value untouched.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Error(error) => Outcome::Error(f(error)),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }

    /// Equality that also compares error payloads.
    pub fn strict_eq(&self, other: &Outcome<T, E>) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        match (self, other) {
            (Outcome::Value(a), Outcome::Value(b)) => a == b,
            (Outcome::Error(a), Outcome::Error(b)) => a == b,
            _ => false,
        }
    }
}

/// Default construction yields the error state, like an empty optional.
impl<T, E: Default> Default for Outcome<T, E> {
    fn default() -> Self {
        // INVARIANT: default construction is the error state
        Outcome::Error(E::default())
    }
}

impl<T, E> From<T> for Outcome<T, E> {
    fn from(value: T) -> Self {
        // INVARIANT: the only implicit constructor produces a value
        Outcome::Value(value)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// Any two errors are equal, whatever their payload type.
impl<T: PartialEq, E1, E2> PartialEq<Outcome<T, E2>> for Outcome<T, E1> {
    fn eq(&self, other: &Outcome<T, E2>) -> bool {
        match (self, other) {
            (Outcome::Error(_), Outcome::Error(_)) => true,
            (Outcome::Value(a), Outcome::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E> Eq for Outcome<T, E> {}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => value.fmt(f),
            Outcome::Error(error) => error.fmt(f),
        }
    }
}
