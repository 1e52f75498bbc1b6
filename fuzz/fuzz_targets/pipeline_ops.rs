// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for chaining arbitrary stage sequences.
//!
//! Every chaining form (operator, apply-assign, compose, pipeline) must agree
//! with a plain early-return loop, and no stage after the first failure may
//! ever run.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use outcome::testing::{add, fail_with, multiply, CallCounter, IntOutcome};
use outcome::{compose, Outcome, Pipeline};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Add(i64),
    Mul(i64),
    Fail(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    start: i64,
    start_in_error: bool,
    ops: Vec<Op>,
}

fn stage(op: &Op) -> impl Fn(i64) -> IntOutcome + Clone {
    let op = op.clone();
    move |v| match op {
        Op::Add(n) => add(n)(v),
        Op::Mul(n) => multiply(n)(v),
        Op::Fail(code) => fail_with(&format!("fail {code}"))(v),
    }
}

fn model(input: &IntOutcome, ops: &[Op]) -> IntOutcome {
    let mut v = match input {
        Outcome::Value(v) => *v,
        Outcome::Error(_) => return input.clone(),
    };
    for op in ops {
        match stage(op)(v) {
            Outcome::Value(next) => v = next,
            error => return error,
        }
    }
    Outcome::from_value(v)
}

fuzz_target!(|input: Input| {
    // Keep runs short; long sequences add nothing the short ones miss.
    let ops = &input.ops[..input.ops.len().min(64)];
    let start: IntOutcome = if input.start_in_error {
        Outcome::from_error(format!("start {}", input.start))
    } else {
        Outcome::from_value(input.start)
    };
    let expected = model(&start, ops);

    // Property 1: operator chain matches the model and stops at the first failure
    let counter = CallCounter::new();
    let by_operator = ops
        .iter()
        .fold(start.clone(), |acc, op| acc >> counter.wrap(stage(op)));
    assert!(by_operator.strict_eq(&expected), "operator chain diverged");

    let expected_calls = match &start {
        Outcome::Error(_) => 0,
        Outcome::Value(_) => ops
            .iter()
            .position(|op| matches!(op, Op::Fail(_)))
            .map_or(ops.len(), |i| i + 1),
    };
    assert_eq!(counter.calls(), expected_calls, "stage ran after a failure");

    // Property 2: apply-assign agrees
    let mut by_assign = start.clone();
    for op in ops {
        by_assign >>= stage(op);
    }
    assert!(by_assign.strict_eq(&expected), "apply-assign diverged");

    // Property 3: pipeline and its traced run agree
    let pipeline = ops
        .iter()
        .fold(Pipeline::new(), |p: Pipeline<i64, String>, op| p.then(stage(op)));
    assert!(start.clone().pipe(&pipeline).strict_eq(&expected));

    let report = pipeline.run_traced(start.clone());
    assert!(report.output.strict_eq(&expected));
    assert_eq!(report.invoked, expected_calls);
    assert_eq!(report.failed_at.is_some(), start.has_value() && expected.has_error());

    // Property 4: left-nested composition of the first two stages
    if let [first, second, ..] = ops {
        if let Outcome::Value(v) = &start {
            let composed = compose(stage(first), stage(second))(*v);
            assert!(composed.strict_eq(&model(&start, &ops[..2])));
        }
    }
});
