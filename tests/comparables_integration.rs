//! Ordering checks on numbers and generic comparables
//!
//! Each test injects a recording reporter and verifies that a failed check
//! reports exactly one descriptor, and that a passing check reports nothing.

use touchstone::failures::{
    should_be_greater, should_be_less_or_equal, should_not_be_null,
};
use touchstone::testing::RecordingFailures;
use touchstone::{assert_failure, assert_passes};
use touchstone::{AssertionInfo, Comparables, Numbers};

fn some_info() -> AssertionInfo {
    AssertionInfo::new().with_description("some info")
}

// Bytes: greater than

#[test]
fn bytes_greater_than_fails_if_actual_is_null() {
    let failures = RecordingFailures::new();
    let bytes = Numbers::<i8, _>::with_failures(&failures);
    let info = some_info();

    assert_failure!(
        bytes.assert_greater_than(&info, None, 8),
        should_not_be_null()
    );
    failures.assert_reported(&info, &should_not_be_null());
}

#[test]
fn bytes_greater_than_passes_if_actual_is_greater_than_other() {
    let failures = RecordingFailures::new();
    let bytes = Numbers::<i8, _>::with_failures(&failures);

    assert_passes!(bytes.assert_greater_than(&some_info(), Some(8), 6));
    failures.assert_nothing_reported();
}

#[test]
fn bytes_greater_than_fails_if_actual_is_equal_to_other() {
    let failures = RecordingFailures::new();
    let bytes = Numbers::<i8, _>::with_failures(&failures);
    let info = some_info();

    let err = bytes.assert_greater_than(&info, Some(6), 6).unwrap_err();
    assert!(err.is_failure());
    failures.assert_reported(&info, &should_be_greater(&6_i8, &6_i8));
}

#[test]
fn bytes_greater_than_fails_if_actual_is_less_than_other() {
    let failures = RecordingFailures::new();
    let bytes = Numbers::<i8, _>::with_failures(&failures);
    let info = some_info();

    assert_failure!(bytes.assert_greater_than(&info, Some(6), 8));
    failures.assert_reported(&info, &should_be_greater(&6_i8, &8_i8));
}

#[test]
fn bytes_greater_than_renders_message_with_description() {
    let bytes = touchstone::Bytes::new();
    let err = bytes
        .assert_greater_than(&some_info(), Some(6), 8)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[some info] expected:<6> to be greater than:<8>"
    );
}

// Comparables: less than or equal to

#[test]
fn comparables_less_than_or_equal_to_fails_if_actual_is_null() {
    let failures = RecordingFailures::new();
    let comparables = Comparables::with_failures(&failures);
    let info = some_info();

    assert_failure!(
        comparables.assert_less_than_or_equal_to(&info, None, 8),
        should_not_be_null()
    );
    failures.assert_reported(&info, &should_not_be_null());
}

#[test]
fn comparables_less_than_or_equal_to_passes_if_actual_is_less_than_other() {
    let failures = RecordingFailures::new();
    let comparables = Comparables::with_failures(&failures);

    assert_passes!(comparables.assert_less_than_or_equal_to(&some_info(), Some(6), 8));
    failures.assert_nothing_reported();
}

#[test]
fn comparables_less_than_or_equal_to_passes_if_actual_is_equal_to_other() {
    let failures = RecordingFailures::new();
    let comparables = Comparables::with_failures(&failures);

    assert_passes!(comparables.assert_less_than_or_equal_to(&some_info(), Some(6), 6));
    failures.assert_nothing_reported();
}

#[test]
fn comparables_less_than_or_equal_to_fails_if_actual_is_greater_than_other() {
    let failures = RecordingFailures::new();
    let comparables = Comparables::with_failures(&failures);
    let info = some_info();

    assert_failure!(comparables.assert_less_than_or_equal_to(&info, Some(8), 6));
    failures.assert_reported(&info, &should_be_less_or_equal(&8, &6));
}

#[test]
fn comparables_work_with_strings() {
    let comparables = Comparables::new();
    let info = AssertionInfo::new();

    assert_passes!(comparables.assert_less_than_or_equal_to(
        &info,
        Some("Leia".to_string()),
        "Luke".to_string()
    ));
    assert_failure!(
        comparables.assert_greater_than(&info, Some("Leia"), "Luke"),
        should_be_greater(&"Leia", &"Luke")
    );
}

#[test]
fn one_gate_serves_many_independent_checks() {
    let failures = RecordingFailures::new();
    let comparables = Comparables::with_failures(&failures);
    let info = some_info();

    for _ in 0..3 {
        assert_passes!(comparables.assert_greater_than(&info, Some(2), 1));
        assert_failure!(comparables.assert_greater_than(&info, Some(1), 2));
    }
    assert_eq!(failures.count(), 3);
    assert!(failures
        .descriptors()
        .iter()
        .all(|d| d == &should_be_greater(&1, &2)));
}
