//! Pipeline builder: ordering, failure reporting, concatenation.

use super::common::{
    add, assert_error, assert_value, failing_pipeline, multiply, value_pipeline, CallCounter,
    IntOutcome, DIVISION_BY_ZERO, START,
};
use outcome::{Outcome, Pipeline, StageFailure};

#[test]
fn value_pipeline_reaches_eighteen() {
    let report = value_pipeline().run_traced(Outcome::from_value(START));
    assert_value(&report.output, 18);
    assert_eq!(report.invoked, 3);
    assert!(report.failed_at.is_none());
}

#[test]
fn failing_pipeline_reports_stage() {
    let report = failing_pipeline().run_traced(Outcome::from_value(START));
    assert_error(&report.output, DIVISION_BY_ZERO);
    assert_eq!(report.invoked, 2);
    assert_eq!(
        report.failed_at,
        Some(StageFailure {
            index: 1,
            label: Some("div0".into()),
        })
    );
}

#[test]
fn error_input_passes_through_untouched() {
    let counter = CallCounter::new();
    let pipeline = Pipeline::new().then(counter.wrap(add(1)));
    let input: IntOutcome = Outcome::from_error("before".into());
    let out = input.clone().pipe(&pipeline);
    assert!(out.strict_eq(&input));
    assert_eq!(counter.calls(), 0);
}

#[test]
fn append_is_sequential() {
    let joined = Pipeline::new()
        .then(add(1))
        .append(Pipeline::new().then(multiply(3)).then(multiply(3)));
    assert_eq!(joined.len(), 3);
    assert_value(&joined.run_value(START), 18);
}

#[test]
fn append_is_associative() {
    let build = || {
        (
            Pipeline::new().then(add(2)),
            Pipeline::new().then(multiply(5)),
            Pipeline::new().then(add(-7)),
        )
    };
    let (a, b, c) = build();
    let left = a.append(b).append(c);
    let (a, b, c) = build();
    let right = a.append(b.append(c));

    for start in -10..10 {
        assert!(left.run_value(start).strict_eq(&right.run_value(start)));
    }
}

#[test]
fn reused_pipeline_is_stateless() {
    let pipeline = value_pipeline();
    assert_value(&pipeline.run_value(START), 18);
    assert_value(&pipeline.run_value(START), 18);
    assert_value(&pipeline.run_value(2), 27);
}

#[test]
fn labels_follow_registration_order() {
    let labels = failing_pipeline().labels();
    assert_eq!(labels, vec!["add1", "div0", "times3"]);
}
