// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chaining combinators: apply, compose, apply-assign.
//!
//! A stage is any `Fn(T) -> Outcome<T, E>`. It gets the value and reports
//! failure by returning an error-state container.
//!
//! | Combinator     | Function / method                | Operator  |
//! |----------------|----------------------------------|-----------|
//! | apply          | [`apply`], [`Outcome::apply`]    | `m >> f`  |
//! | apply-assign   | [`Outcome::apply_assign`]        | `m >>= f` |
//! | compose        | [`compose`]                      | -         |
//!
//! `>>` is left-associative in Rust, so `m >> f1 >> f2 >> f3` already runs `f1`
//! first. Composition has no operator; [`compose`] nests left-to-right and
//! [`Pipeline`](crate::Pipeline) is the better fit for anything longer than two
//! stages.

use std::cell::Cell;
use std::ops::{Shr, ShrAssign};

use crate::contracts;
use crate::outcome::Outcome;

/// `container ▷ f`: run `f` on the value, or pass an error through untouched.
///
/// `f` is never invoked on an error-state container.
#[inline]
pub fn apply<T, E, F>(container: Outcome<T, E>, f: F) -> Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<T, E>,
{
    let input = container.state();
    let invoked = Cell::new(false);
    let stage = |value: T| {
        invoked.set(true);
        f(value)
    };
    let output = match container {
        Outcome::Value(value) => stage(value),
        // INVARIANT: f never sees an error-state container
        error @ Outcome::Error(_) => error,
    };
    contracts::check_short_circuit(input, invoked.get(), output.state());
    output
}

/// `f ▷▷ g`: a single stage that runs `f`, then `g` on its value.
///
/// If `f` fails, `g` is skipped. Nesting is associative:
/// `compose(compose(f, g), h)` and `compose(f, compose(g, h))` both run
/// `f`, `g`, `h` in that order.
pub fn compose<T, E, F, G>(f: F, g: G) -> impl Fn(T) -> Outcome<T, E>
where
    F: Fn(T) -> Outcome<T, E>,
    G: Fn(T) -> Outcome<T, E>,
{
    move |value| apply(f(value), &g)
}

impl<T, E> Outcome<T, E> {
    /// Method form of [`apply`].
    #[inline]
    pub fn apply<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(T) -> Outcome<T, E>,
    {
        apply(self, f)
    }

    /// `container ▷= f`, i.e. `*self = self ▷ f`.
    ///
    /// The value has to be moved out from behind `&mut self` before `f` can
    /// take it, so the container briefly holds the default error state. That
    /// is why this needs `E: Default`.
    pub fn apply_assign<F>(&mut self, f: F)
    where
        E: Default,
        F: FnOnce(T) -> Outcome<T, E>,
    {
        if self.has_error() {
            return;
        }
        let current = std::mem::take(self);
        *self = apply(current, f);
    }
}

impl<T, E, F> Shr<F> for Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<T, E>,
{
    type Output = Outcome<T, E>;

    fn shr(self, f: F) -> Self::Output {
        apply(self, f)
    }
}

impl<T, E, F> ShrAssign<F> for Outcome<T, E>
where
    E: Default,
    F: FnOnce(T) -> Outcome<T, E>,
{
    fn shr_assign(&mut self, f: F) {
        self.apply_assign(f);
    }
}
