//! Gate for collections
//!
//! Any container implementing [`Collection`] can be checked. Elements are
//! visited in the container's iteration order, which is what positional and
//! sequence checks see.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;

use super::{elements, Checks};
use crate::error::CheckError;
use crate::failures::{should_be_null_or_empty, should_not_be_empty, Failures, StandardFailures};
use crate::index::Index;
use crate::info::AssertionInfo;

/// A container whose elements can be counted and visited in order.
pub trait Collection: Debug {
    /// Element type.
    type Item: PartialEq + Debug;

    /// Visit the elements in iteration order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;

    /// Number of elements.
    fn size(&self) -> usize {
        self.elements().count()
    }
}

impl<T: PartialEq + Debug> Collection for [T] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq + Debug, const N: usize> Collection for [T; N] {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T: PartialEq + Debug> Collection for Vec<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq + Debug> Collection for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq + Debug> Collection for LinkedList<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq + Debug> Collection for BTreeSet<T> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq + Debug, S> Collection for HashSet<T, S> {
    type Item = T;

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Checks over any [`Collection`].
///
/// # Example
///
/// ```
/// use touchstone::{AssertionInfo, Collections};
///
/// let collections = Collections::new();
/// let info = AssertionInfo::new();
///
/// assert!(collections.assert_has_size(&info, Some(&vec!["Luke", "Yoda"]), 2).is_ok());
///
/// let err = collections.assert_has_size(&info, Some(&vec!["Yoda"]), 8).unwrap_err();
/// assert_eq!(err.to_string(), "expected size:<8> but was:<1> in:<[\"Yoda\"]>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Collections<F = StandardFailures> {
    failures: F,
}

impl Collections<StandardFailures> {
    /// Gate reporting through [`StandardFailures`].
    pub fn new() -> Self {
        Self::with_failures(StandardFailures::instance())
    }
}

impl<F: Failures> Collections<F> {
    /// Gate reporting through `failures`.
    pub fn with_failures(failures: F) -> Self {
        Collections { failures }
    }

    /// The reporter this gate delegates to.
    pub fn failures(&self) -> &F {
        &self.failures
    }

    fn checks<'a>(&'a self, info: &'a AssertionInfo) -> Checks<'a, F> {
        Checks::new(&self.failures, info)
    }

    /// Passes when `actual` is absent or has no elements.
    pub fn assert_null_or_empty<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        match actual {
            None => Ok(()),
            Some(actual) => self
                .checks(info)
                .ensure(actual.size() == 0, || should_be_null_or_empty(actual)),
        }
    }

    /// Passes when `actual` has no elements.
    pub fn assert_empty<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::empty(&checks, actual, &collect(actual))
    }

    /// Passes when `actual` has at least one element.
    pub fn assert_not_empty<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(actual.size() > 0, should_not_be_empty)
    }

    /// Passes when `actual` has exactly `expected` elements.
    pub fn assert_has_size<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        expected: usize,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::size(&checks, actual, &collect(actual), expected)
    }

    /// Passes when every one of `values` occurs in `actual`, in any order.
    pub fn assert_contains<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        values: Option<&[C::Item]>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        let values = values.map(refs);
        elements::contains(&checks, actual, &collect(actual), values.as_deref())
    }

    /// Passes when none of `values` occurs in `actual`.
    pub fn assert_does_not_contain<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        values: Option<&[C::Item]>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        let values = values.map(refs);
        elements::does_not_contain(&checks, actual, &collect(actual), values.as_deref())
    }

    /// Passes when the element at `index`, in iteration order, equals `value`.
    pub fn assert_contains_at_index<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        value: &C::Item,
        index: Option<Index>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::contains_at_index(&checks, actual, &collect(actual), &value, index)
    }

    /// Passes unless the element at `index`, in iteration order, equals `value`.
    pub fn assert_does_not_contain_at_index<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        value: &C::Item,
        index: Option<Index>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::does_not_contain_at_index(&checks, actual, &collect(actual), &value, index)
    }

    /// Passes when `sequence` occurs in `actual` as a contiguous run.
    pub fn assert_contains_sequence<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        sequence: Option<&[C::Item]>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        let sequence = sequence.map(refs);
        elements::contains_run(&checks, actual, &collect(actual), sequence.as_deref())
    }

    /// Passes when `actual` begins with `sequence`.
    pub fn assert_starts_with<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        sequence: Option<&[C::Item]>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        let sequence = sequence.map(refs);
        elements::starts(&checks, actual, &collect(actual), sequence.as_deref())
    }

    /// Passes when `actual` ends with `sequence`.
    pub fn assert_ends_with<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
        sequence: Option<&[C::Item]>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        let sequence = sequence.map(refs);
        elements::ends(&checks, actual, &collect(actual), sequence.as_deref())
    }

    /// Passes when no element of `actual` occurs twice.
    pub fn assert_does_not_have_duplicates<C>(
        &self,
        info: &AssertionInfo,
        actual: Option<&C>,
    ) -> Result<(), CheckError>
    where
        C: Collection + ?Sized,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::no_duplicates(&checks, actual, &collect(actual))
    }
}

fn collect<C: Collection + ?Sized>(actual: &C) -> Vec<&C::Item> {
    actual.elements().collect()
}

fn refs<T>(values: &[T]) -> Vec<&T> {
    values.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UsageError;
    use crate::failures::{should_contain_sequence, should_have_size, should_not_be_null};
    use crate::index::at_index;

    fn descriptor_of(result: Result<(), CheckError>) -> Option<crate::failures::ErrorDescriptor> {
        result
            .err()
            .and_then(|e| e.as_failure().map(|f| f.descriptor().clone()))
    }

    #[test]
    fn test_has_size_across_containers() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        let deque: VecDeque<i32> = (1..=3).collect();
        let set: BTreeSet<&str> = ["Luke", "Yoda"].into_iter().collect();

        assert!(collections.assert_has_size(&info, Some(&deque), 3).is_ok());
        assert!(collections.assert_has_size(&info, Some(&set), 2).is_ok());
        assert!(collections.assert_has_size(&info, Some(&[1, 2][..]), 2).is_ok());
        assert_eq!(
            descriptor_of(collections.assert_has_size(&info, Some(&set), 3)),
            Some(should_have_size(&set, 2, 3))
        );
    }

    #[test]
    fn test_null_actual() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        assert_eq!(
            descriptor_of(collections.assert_has_size::<Vec<i32>>(&info, None, 8)),
            Some(should_not_be_null())
        );
        assert!(collections
            .assert_null_or_empty::<Vec<i32>>(&info, None)
            .is_ok());
    }

    #[test]
    fn test_emptiness() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        let empty: Vec<String> = Vec::new();
        assert!(collections.assert_empty(&info, Some(&empty)).is_ok());
        assert!(collections.assert_null_or_empty(&info, Some(&empty)).is_ok());
        assert!(collections.assert_not_empty(&info, Some(&empty)).is_err());
        assert!(collections
            .assert_empty(&info, Some(&vec!["Yoda".to_string()]))
            .is_err());
    }

    #[test]
    fn test_sequences_in_iteration_order() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        let list: LinkedList<i64> = [6, 8, 10, 12].into_iter().collect();

        assert!(collections
            .assert_contains_sequence(&info, Some(&list), Some(&[8, 10][..]))
            .is_ok());
        assert!(collections
            .assert_starts_with(&info, Some(&list), Some(&[6][..]))
            .is_ok());
        assert!(collections
            .assert_ends_with(&info, Some(&list), Some(&[10, 12][..]))
            .is_ok());
        assert_eq!(
            descriptor_of(collections.assert_contains_sequence(
                &info,
                Some(&list),
                Some(&[6, 20][..])
            )),
            Some(should_contain_sequence(&list, &[6, 20][..]))
        );
        assert_eq!(
            collections.assert_contains_sequence(&info, Some(&list), None),
            Err(CheckError::Usage(UsageError::ValuesToLookForIsNull))
        );
    }

    #[test]
    fn test_contains_and_duplicates() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        let names = vec!["Luke", "Yoda", "Leia", "Yoda"];

        assert!(collections
            .assert_contains(&info, Some(&names), Some(&["Leia", "Luke"][..]))
            .is_ok());
        assert!(collections
            .assert_contains(&info, Some(&names), Some(&["Han"][..]))
            .is_err());
        assert!(collections
            .assert_does_not_contain(&info, Some(&names), Some(&["Han"][..]))
            .is_ok());
        let err = collections
            .assert_does_not_have_duplicates(&info, Some(&names))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "found duplicate(s):<[\"Yoda\"]> in:<[\"Luke\", \"Yoda\", \"Leia\", \"Yoda\"]>"
        );
    }

    #[test]
    fn test_at_index() {
        let collections = Collections::new();
        let info = AssertionInfo::new();
        let names = vec!["Luke", "Yoda"];

        assert!(collections
            .assert_contains_at_index(&info, Some(&names), &"Yoda", Some(at_index(1)))
            .is_ok());
        assert!(collections
            .assert_contains_at_index(&info, Some(&names), &"Luke", Some(at_index(1)))
            .is_err());
        assert_eq!(
            collections.assert_contains_at_index(&info, Some(&names), &"Luke", Some(at_index(2))),
            Err(CheckError::Usage(UsageError::IndexOutOfBounds { index: 2, max: 1 }))
        );
        assert!(collections
            .assert_does_not_contain_at_index(&info, Some(&names), &"Luke", Some(at_index(1)))
            .is_ok());
    }
}
