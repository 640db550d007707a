//! Descriptors and indexes survive a JSON round trip
#![cfg(feature = "serde")]

use touchstone::failures::{should_contain_at_index, should_have_size, ErrorDescriptor};
use touchstone::{at_index, AssertionInfo, Index, Representation};

#[test]
fn descriptor_round_trips_through_json() {
    let descriptor = should_contain_at_index(&[6, 8, 10][..], &6, at_index(1));

    let json = serde_json::to_string(&descriptor).unwrap();
    let back: ErrorDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(back, descriptor);
    assert_eq!(
        back.describe(AssertionInfo::new().representation()),
        "expecting <[6, 8, 10]> to contain <6> at index <1>"
    );
}

#[test]
fn deserialized_descriptor_renders_with_any_representation() {
    let json = serde_json::to_string(&should_have_size(&["Yoda"], 1, 8)).unwrap();
    let back: ErrorDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(
        back.describe(Representation::Plain),
        "expected size:8 but was:1 in:[\"Yoda\"]"
    );
}

#[test]
fn index_serializes_as_its_position() {
    let json = serde_json::to_string(&at_index(3)).unwrap();
    let back: Index = serde_json::from_str(&json).unwrap();
    assert_eq!(back, at_index(3));
}
