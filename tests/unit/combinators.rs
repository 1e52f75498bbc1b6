//! Apply, compose and apply-assign.

use super::common::{
    add, assert_error, assert_value, fail_with, multiply, CallCounter, IntOutcome,
    DIVISION_BY_ZERO, START,
};
use outcome::{apply, compose, Outcome};

#[test]
fn apply_on_value_invokes_stage_once() {
    let counter = CallCounter::new();
    let out = apply(Outcome::from_value(START), counter.wrap(add(1)));
    assert_value(&out, 2);
    assert_eq!(counter.calls(), 1);
}

#[test]
fn apply_on_error_returns_identical_payload() {
    let counter = CallCounter::new();
    let input: IntOutcome = Outcome::from_error("upstream".into());
    let out = input.clone() >> counter.wrap(multiply(3));
    assert_eq!(counter.calls(), 0);
    assert!(out.strict_eq(&input));
}

#[test]
fn compose_then_apply_equals_sequential_apply() {
    let m: IntOutcome = Outcome::from_value(START);
    let composed = m.clone() >> compose(add(1), multiply(3));
    let sequential = m >> add(1) >> multiply(3);
    assert_value(&composed, 6);
    assert_value(&sequential, 6);
}

#[test]
fn compose_nesting_does_not_change_order() {
    let left = compose(compose(add(1), multiply(3)), add(-2));
    let right = compose(add(1), compose(multiply(3), add(-2)));
    for start in -5..5 {
        assert!(left(start).strict_eq(&right(start)));
    }
    assert_value(&left(START), 4);
}

#[test]
fn composed_failure_skips_later_stages() {
    let counter = CallCounter::new();
    let stage = compose(compose(add(1), fail_with(DIVISION_BY_ZERO)), counter.wrap(multiply(3)));
    assert_error(&stage(START), DIVISION_BY_ZERO);
    assert_eq!(counter.calls(), 0);
}

#[test]
fn scenario_operator_chain() {
    let m: IntOutcome = Outcome::from_value(START);
    assert_value(&(m >> add(1) >> multiply(3) >> multiply(3)), 18);
}

#[test]
fn scenario_apply_assign_with_failure() {
    let counter = CallCounter::new();
    let mut m: IntOutcome = Outcome::from_value(START);
    m >>= add(1);
    m >>= fail_with(DIVISION_BY_ZERO);
    m >>= counter.wrap(multiply(3));
    assert_error(&m, DIVISION_BY_ZERO);
    assert_eq!(counter.calls(), 0);
}

#[test]
fn method_form_matches_operator() {
    let m: IntOutcome = Outcome::from_value(START);
    let by_method = m.clone().apply(add(1)).apply(multiply(3));
    let by_operator = m >> add(1) >> multiply(3);
    assert!(by_method.strict_eq(&by_operator));
}
