//! Sequence predicates
//!
//! Checks over slices: size, emptiness, positional membership and contiguous
//! runs. Gates for other containers collect their elements into a slice of
//! references and reuse the same predicates.

use super::combinators::Predicate;

/// Predicate that checks if a slice is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<T> Predicate<[T]> for IsEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a slice is empty.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks the exact element count of a slice.
#[derive(Clone, Copy, Debug)]
pub struct HasSize {
    expected: usize,
}

impl<T> Predicate<[T]> for HasSize {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.len() == self.expected
    }
}

/// Create a predicate that checks if a slice has exactly `expected` elements.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(has_size(2).check(&["Luke", "Yoda"][..]));
/// assert!(!has_size(8).check(&["Yoda"][..]));
/// ```
pub fn has_size(expected: usize) -> HasSize {
    HasSize { expected }
}

/// Predicate that checks the element at a position.
///
/// A position outside the slice never matches.
#[derive(Clone, Copy, Debug)]
pub struct ContainsAt<'a, T> {
    value: &'a T,
    position: usize,
}

impl<T: PartialEq> Predicate<[T]> for ContainsAt<'_, T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.get(self.position) == Some(self.value)
    }
}

/// Create a predicate that checks if `value` sits at `position`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let actual = [6, 8, 10];
/// assert!(contains_at(&8, 1).check(&actual[..]));
/// assert!(!contains_at(&6, 1).check(&actual[..]));
/// ```
pub fn contains_at<T: PartialEq>(value: &T, position: usize) -> ContainsAt<'_, T> {
    ContainsAt { value, position }
}

/// Predicate that checks for a contiguous, order-preserving run.
#[derive(Clone, Copy, Debug)]
pub struct ContainsSequence<'a, T> {
    sequence: &'a [T],
}

impl<T: PartialEq> Predicate<[T]> for ContainsSequence<'_, T> {
    fn check(&self, value: &[T]) -> bool {
        if self.sequence.is_empty() {
            return true;
        }
        self.sequence.len() <= value.len()
            && value
                .windows(self.sequence.len())
                .any(|window| window == self.sequence)
    }
}

/// Create a predicate that checks if `sequence` occurs as a contiguous run.
///
/// Duplicated elements are matched like any others; the first window that
/// equals `sequence` wins.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let actual = [6, 8, 10, 12];
/// assert!(contains_sequence(&[8, 10][..]).check(&actual[..]));
/// assert!(!contains_sequence(&[6, 10][..]).check(&actual[..]));
/// assert!(!contains_sequence(&[10, 8][..]).check(&actual[..]));
/// ```
pub fn contains_sequence<T: PartialEq>(sequence: &[T]) -> ContainsSequence<'_, T> {
    ContainsSequence { sequence }
}

/// Predicate that checks the leading elements of a slice.
#[derive(Clone, Copy, Debug)]
pub struct StartsWith<'a, T> {
    sequence: &'a [T],
}

impl<T: PartialEq> Predicate<[T]> for StartsWith<'_, T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.starts_with(self.sequence)
    }
}

/// Create a predicate that checks if a slice begins with `sequence`.
pub fn starts_with<T: PartialEq>(sequence: &[T]) -> StartsWith<'_, T> {
    StartsWith { sequence }
}

/// Predicate that checks the trailing elements of a slice.
#[derive(Clone, Copy, Debug)]
pub struct EndsWith<'a, T> {
    sequence: &'a [T],
}

impl<T: PartialEq> Predicate<[T]> for EndsWith<'_, T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.ends_with(self.sequence)
    }
}

/// Create a predicate that checks if a slice ends with `sequence`.
pub fn ends_with<T: PartialEq>(sequence: &[T]) -> EndsWith<'_, T> {
    EndsWith { sequence }
}

/// Elements of `values` that do not occur in `actual`, in the order given.
pub fn missing<'v, T: PartialEq>(actual: &[T], values: &'v [T]) -> Vec<&'v T> {
    values.iter().filter(|v| !actual.contains(v)).collect()
}

/// Elements of `values` that do occur in `actual`, in the order given.
pub fn present<'v, T: PartialEq>(actual: &[T], values: &'v [T]) -> Vec<&'v T> {
    values.iter().filter(|v| actual.contains(v)).collect()
}

/// Elements that occur more than once in `actual`, each listed once in order
/// of first repetition.
///
/// Only `PartialEq` is required, so this is quadratic.
pub fn duplicates<T: PartialEq>(actual: &[T]) -> Vec<&T> {
    let mut found: Vec<&T> = Vec::new();
    for (i, item) in actual.iter().enumerate() {
        if actual[..i].contains(item) && !found.contains(&item) {
            found.push(item);
        }
    }
    found
}
