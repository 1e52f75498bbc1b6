// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left-to-right pipelines of fallible stages.
//!
//! Stages run in the order they were registered. The first stage that returns
//! an error-state container stops the run; nothing after it is invoked.
//!
//! ```text
//!   input ──▶ stage#0 ──▶ stage#1 ──▶ stage#2 ──▶ output
//!                            │
//!                            └─ error ─────────────▶ output (stage#2 skipped)
//! ```
//!
//! ```ignore
//! let pipeline = Pipeline::new()
//!     .then_named("add1", |v: i64| Outcome::from_value(v + 1))
//!     .then_named("times3", |v| Outcome::from_value(v * 3));
//!
//! assert!(pipeline.run_value(1).holds(&6));
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace};

use crate::contracts;
use crate::outcome::Outcome;

type StageFn<T, E> = Box<dyn Fn(T) -> Outcome<T, E>>;

struct Stage<T, E> {
    label: Option<Cow<'static, str>>,
    func: StageFn<T, E>,
}

/// An ordered list of stages over `Outcome<T, E>`.
pub struct Pipeline<T, E> {
    stages: Vec<Stage<T, E>>,
}

/// The stage that turned a value into an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    /// Zero-based position in the pipeline.
    pub index: usize,
    pub label: Option<Cow<'static, str>>,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "stage {} ({})", self.index, label),
            None => write!(f, "stage {}", self.index),
        }
    }
}

/// Result of [`Pipeline::run_traced`].
#[derive(Debug, Clone)]
pub struct PipelineReport<T, E> {
    pub output: Outcome<T, E>,
    /// Stages actually invoked.
    pub invoked: usize,
    /// `None` when every stage succeeded or the input was already an error.
    pub failed_at: Option<StageFailure>,
}

impl<T, E> Pipeline<T, E> {
    /// Empty pipeline. Running it returns the input unchanged.
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Append an unnamed stage.
    pub fn then<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Outcome<T, E> + 'static,
    {
        self.stages.push(Stage {
            label: None,
            func: Box::new(f),
        });
        self
    }

    /// Append a stage with a label used in traces and failure reports.
    pub fn then_named<F>(mut self, label: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(T) -> Outcome<T, E> + 'static,
    {
        self.stages.push(Stage {
            label: Some(label.into()),
            func: Box::new(f),
        });
        self
    }

    /// Concatenate: `self`'s stages, then `other`'s.
    pub fn append(mut self, other: Pipeline<T, E>) -> Self {
        self.stages.extend(other.stages);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage labels in run order; unnamed stages show as `stage#N`.
    pub fn labels(&self) -> Vec<Cow<'static, str>> {
        self.stages
            .iter()
            .enumerate()
            .map(|(index, stage)| match &stage.label {
                Some(label) => label.clone(),
                None => Cow::Owned(format!("stage#{}", index)),
            })
            .collect()
    }

    /// Run every stage in order, stopping at the first error.
    pub fn run(&self, input: Outcome<T, E>) -> Outcome<T, E> {
        self.run_traced(input).output
    }

    pub fn run_value(&self, value: T) -> Outcome<T, E> {
        self.run(Outcome::from_value(value))
    }

    /// Like [`run`](Self::run), also reporting how far the run got.
    pub fn run_traced(&self, input: Outcome<T, E>) -> PipelineReport<T, E> {
        let input_state = input.state();
        let mut current = input;
        let mut invoked = 0;
        let mut failed_at = None;

        for (index, stage) in self.stages.iter().enumerate() {
            let value = match current {
                Outcome::Value(value) => value,
                error @ Outcome::Error(_) => {
                    // INVARIANT: nothing runs after the first error
                    trace!(index, remaining = self.stages.len() - index, "short-circuit");
                    current = error;
                    break;
                }
            };

            trace!(index, label = stage.label.as_deref(), "invoking stage");
            current = (stage.func)(value);
            invoked += 1;

            if current.has_error() {
                debug!(index, label = stage.label.as_deref(), "stage failed");
                failed_at = Some(StageFailure {
                    index,
                    label: stage.label.clone(),
                });
            }
        }

        let report = PipelineReport {
            output: current,
            invoked,
            failed_at,
        };
        contracts::check_pipeline_report(&report, input_state, self.stages.len());
        report
    }
}

impl<T, E> Default for Pipeline<T, E> {
    fn default() -> Self {
        Pipeline::new()
    }
}

impl<T, E> fmt::Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.labels())
            .finish()
    }
}

impl<T, E> Outcome<T, E> {
    /// Feed this container through a whole pipeline.
    pub fn pipe(self, pipeline: &Pipeline<T, E>) -> Outcome<T, E> {
        pipeline.run(self)
    }
}
