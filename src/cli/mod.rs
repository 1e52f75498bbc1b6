// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the outcome demo binary.
//!
//! Two subcommands: `run` to push an integer through stages given on the
//! command line, and `demo` to replay the canonical add/multiply/fail walk.

pub mod stages;

use std::fmt;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use outcome::Pipeline;
use stages::{add, fail_with, multiply, IntOutcome};

#[derive(Parser)]
#[command(
    name = "outcome",
    about = "Chain fallible integer stages and print the outcome",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an integer through a list of stages
    Run {
        /// Starting value
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        start: i64,

        /// Stage to append, in order: `add:N`, `mul:N` or `fail:MESSAGE`
        #[arg(long = "stage", value_name = "SPEC")]
        stages: Vec<StageSpec>,

        /// Print the final container as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the built-in walkthrough
    Demo,
}

/// One `--stage` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSpec {
    Add(i64),
    Mul(i64),
    Fail(String),
}

impl StageSpec {
    /// Label shown in failure reports, e.g. `add:1`.
    pub fn label(&self) -> String {
        match self {
            StageSpec::Add(n) => format!("add:{}", n),
            StageSpec::Mul(n) => format!("mul:{}", n),
            StageSpec::Fail(message) => format!("fail:{}", message),
        }
    }
}

/// A `--stage` argument that couldn't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageParseError {
    /// No `:` between kind and argument.
    MissingSeparator(String),
    /// Kind is not `add`, `mul` or `fail`.
    UnknownKind(String),
    /// `add`/`mul` argument is not an integer.
    InvalidNumber { kind: String, raw: String },
}

impl fmt::Display for StageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageParseError::MissingSeparator(raw) => {
                write!(f, "stage '{}' is missing ':' (expected KIND:ARG)", raw)
            }
            StageParseError::UnknownKind(kind) => {
                write!(f, "unknown stage kind '{}' (expected add, mul or fail)", kind)
            }
            StageParseError::InvalidNumber { kind, raw } => {
                write!(f, "stage '{}' needs an integer, got '{}'", kind, raw)
            }
        }
    }
}

impl std::error::Error for StageParseError {}

impl FromStr for StageSpec {
    type Err = StageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| StageParseError::MissingSeparator(s.to_string()))?;

        let number = || {
            arg.trim()
                .parse::<i64>()
                .map_err(|_| StageParseError::InvalidNumber {
                    kind: kind.to_string(),
                    raw: arg.to_string(),
                })
        };

        match kind.trim().to_lowercase().as_str() {
            "add" => Ok(StageSpec::Add(number()?)),
            "mul" => Ok(StageSpec::Mul(number()?)),
            "fail" => Ok(StageSpec::Fail(arg.to_string())),
            _ => Err(StageParseError::UnknownKind(kind.to_string())),
        }
    }
}

/// Build the pipeline described by a list of stage specs.
pub fn build_pipeline(specs: &[StageSpec]) -> Pipeline<i64, String> {
    specs.iter().fold(Pipeline::new(), |pipeline, spec| {
        let label = spec.label();
        match spec {
            StageSpec::Add(n) => pipeline.then_named(label, add(*n)),
            StageSpec::Mul(n) => pipeline.then_named(label, multiply(*n)),
            StageSpec::Fail(message) => pipeline.then_named(label, fail_with(message)),
        }
    })
}

/// Render a container for the terminal, or as JSON.
///
/// Only the JSON path can fail, and its failure is a serializer error, never
/// an error-state container.
pub fn render(outcome: &IntOutcome, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(outcome)
    } else {
        Ok(outcome.to_string())
    }
}
