//! Construction, state transitions and equality of the container.

use outcome::{InvalidStateAccess, Outcome, State};
use std::rc::Rc;

#[test]
fn default_construction_is_error_with_default_payload() {
    let m: Outcome<i64, String> = Outcome::default();
    assert!(!m.has_value());
    assert_eq!(m.state(), State::Error);
    assert_eq!(m.error().map(String::as_str), Ok(""));
}

#[test]
fn value_construction_paths_agree() {
    let named: Outcome<i64, String> = Outcome::from_value(5);
    let converted: Outcome<i64, String> = 5i64.into();
    let from_trait = Outcome::<i64, String>::from(5i64);
    assert!(named.strict_eq(&converted));
    assert!(named.strict_eq(&from_trait));
}

#[test]
fn same_type_container_needs_named_error_path() {
    let implicit: Outcome<i64, i64> = 1i64.into();
    assert!(implicit.has_value());

    let explicit: Outcome<i64, i64> = Outcome::from_error(1);
    assert!(explicit.has_error());

    let mut set = implicit;
    set.set_error(2);
    assert_eq!(set.error(), Ok(&2));
    assert_eq!(set.value(), Err(InvalidStateAccess::value_in_error_state()));
}

#[test]
fn setters_release_previous_member() {
    let payload = Rc::new("shared".to_string());
    let mut m: Outcome<i64, Rc<String>> = Outcome::from_error(Rc::clone(&payload));
    assert_eq!(Rc::strong_count(&payload), 2);

    m.set_value(3);
    assert_eq!(Rc::strong_count(&payload), 1);

    m.set_error(Rc::clone(&payload));
    m.set_error(Rc::clone(&payload));
    assert_eq!(Rc::strong_count(&payload), 2);

    drop(m);
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn clone_copies_live_member_only() {
    let value = Rc::new(7);
    let a: Outcome<Rc<i32>, String> = Outcome::from_value(Rc::clone(&value));
    let b = a.clone();
    assert_eq!(Rc::strong_count(&value), 3);
    assert!(a == b);
}

#[test]
fn value_mut_edits_in_place() {
    let mut m: Outcome<i64, String> = Outcome::from_value(1);
    if let Ok(v) = m.value_mut() {
        *v += 41;
    }
    assert!(m.holds(&42));

    let mut e: Outcome<i64, String> = Outcome::from_error("x".into());
    assert!(e.value_mut().is_err());
}

#[test]
fn invalid_state_access_is_a_std_error() {
    let m: Outcome<i64, String> = Outcome::from_error("x".into());
    let err: Box<dyn std::error::Error> = Box::new(m.into_value().unwrap_err());
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn coarse_equality_across_error_types() {
    let a: Outcome<i64, String> = Outcome::from_error("x".into());
    let b: Outcome<i64, bool> = Outcome::from_error(false);
    assert!(a == b);
    assert!(b == a);

    let c: Outcome<i64, String> = Outcome::from_value(5);
    let d: Outcome<i64, bool> = Outcome::from_value(5);
    assert!(c == d);
    assert!(c != b);
}

#[test]
fn equality_against_bare_value() {
    let m: Outcome<i64, String> = Outcome::from_value(5);
    assert!(m.holds(&5));
    assert!(!m.holds(&6));
    let e: Outcome<i64, String> = Outcome::from_error("5".into());
    assert!(!e.holds(&5));
}

#[test]
fn option_and_result_conversions() {
    let m: Outcome<i64, String> = Outcome::from_value(9);
    assert_eq!(m.clone().ok(), Some(9));
    assert_eq!(m.clone().err(), None);
    assert_eq!(Result::from(m), Ok(9));

    let e: Outcome<i64, String> = Outcome::from_result(Err("bad".into()));
    assert_eq!(e.as_ref().err().map(String::as_str), Some("bad"));
    assert_eq!(e.into_result(), Err("bad".to_string()));
}
