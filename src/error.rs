// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked failures for reading the wrong side of an [`Outcome`](crate::Outcome).
//!
//! A container holds exactly one of a value or an error. Asking for the member
//! that isn't live is a caller bug, but it is a recoverable one: every accessor
//! returns `Result<_, InvalidStateAccess>` instead of handing back garbage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which member of a container is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Value,
    Error,
}

impl State {
    /// The other state.
    pub fn flip(self) -> Self {
        match self {
            State::Value => State::Error,
            State::Error => State::Value,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Value => "value",
            State::Error => "error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accessor was called while the container held the other member.
///
/// `expected` is the state the accessor needs, `found` is the state the
/// container was actually in. The two always differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStateAccess {
    pub expected: State,
    pub found: State,
}

impl InvalidStateAccess {
    /// A value accessor was used on an error-state container.
    pub fn value_in_error_state() -> Self {
        InvalidStateAccess {
            expected: State::Value,
            found: State::Error,
        }
    }

    /// An error accessor was used on a value-state container.
    pub fn error_in_value_state() -> Self {
        InvalidStateAccess {
            expected: State::Error,
            found: State::Value,
        }
    }
}

impl fmt::Display for InvalidStateAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid state access: expected {} but container holds {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for InvalidStateAccess {}
