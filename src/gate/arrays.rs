//! Gate for arrays of values
//!
//! One generic gate serves every element type; the category names
//! (`IntArrays`, `DoubleArrays`, ...) are aliases over it.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::{elements, Checks};
use crate::error::CheckError;
use crate::failures::{should_be_null_or_empty, should_not_be_empty, Failures, StandardFailures};
use crate::index::Index;
use crate::info::AssertionInfo;
use crate::predicate::{is_empty, Predicate};

/// Checks over arrays whose elements are `T`.
///
/// # Example
///
/// ```
/// use touchstone::{at_index, AssertionInfo, IntArrays};
///
/// let arrays = IntArrays::new();
/// let info = AssertionInfo::new();
/// let actual = [6, 8, 10];
///
/// assert!(arrays.assert_contains_at_index(&info, Some(&actual), 8, Some(at_index(1))).is_ok());
/// assert!(arrays.assert_contains_at_index(&info, Some(&actual), 6, Some(at_index(1))).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Arrays<T, F = StandardFailures> {
    failures: F,
    _elements: PhantomData<fn(&T)>,
}

/// Arrays of signed bytes.
pub type ByteArrays<F = StandardFailures> = Arrays<i8, F>;
/// Arrays of shorts.
pub type ShortArrays<F = StandardFailures> = Arrays<i16, F>;
/// Arrays of ints.
pub type IntArrays<F = StandardFailures> = Arrays<i32, F>;
/// Arrays of longs.
pub type LongArrays<F = StandardFailures> = Arrays<i64, F>;
/// Arrays of floats.
pub type FloatArrays<F = StandardFailures> = Arrays<f32, F>;
/// Arrays of doubles.
pub type DoubleArrays<F = StandardFailures> = Arrays<f64, F>;

impl<T> Arrays<T, StandardFailures> {
    /// Gate reporting through [`StandardFailures`].
    pub fn new() -> Self {
        Self::with_failures(StandardFailures::instance())
    }
}

impl<T, F: Failures> Arrays<T, F> {
    /// Gate reporting through `failures`.
    pub fn with_failures(failures: F) -> Self {
        Arrays {
            failures,
            _elements: PhantomData,
        }
    }

    /// The reporter this gate delegates to.
    pub fn failures(&self) -> &F {
        &self.failures
    }

    fn checks<'a>(&'a self, info: &'a AssertionInfo) -> Checks<'a, F> {
        Checks::new(&self.failures, info)
    }
}

impl<T, F> Arrays<T, F>
where
    T: PartialEq + Debug,
    F: Failures,
{
    /// Passes when `actual` is absent or has no elements.
    pub fn assert_null_or_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), CheckError> {
        match actual {
            None => Ok(()),
            Some(actual) => self.checks(info).ensure(is_empty().check(actual), || {
                should_be_null_or_empty(actual)
            }),
        }
    }

    /// Passes when `actual` has no elements.
    pub fn assert_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::empty(&checks, actual, actual)
    }

    /// Passes when `actual` has at least one element.
    pub fn assert_not_empty(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(!actual.is_empty(), should_not_be_empty)
    }

    /// Passes when `actual` has exactly `expected` elements.
    pub fn assert_has_size(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        expected: usize,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::size(&checks, actual, actual, expected)
    }

    /// Passes when every one of `values` occurs in `actual`, in any order.
    pub fn assert_contains(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        values: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::contains(&checks, actual, actual, values)
    }

    /// Passes when none of `values` occurs in `actual`.
    pub fn assert_does_not_contain(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        values: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::does_not_contain(&checks, actual, actual, values)
    }

    /// Passes when `actual[index] == value`.
    ///
    /// An empty `actual` is an assertion failure; a missing or out-of-range
    /// `index` is a usage error.
    pub fn assert_contains_at_index(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        value: T,
        index: Option<Index>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::contains_at_index(&checks, actual, actual, &value, index)
    }

    /// Passes unless `actual[index] == value`.
    pub fn assert_does_not_contain_at_index(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        value: T,
        index: Option<Index>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::does_not_contain_at_index(&checks, actual, actual, &value, index)
    }

    /// Passes when `sequence` occurs in `actual` as a contiguous run.
    ///
    /// # Example
    ///
    /// ```
    /// use touchstone::{AssertionInfo, LongArrays, UsageError};
    ///
    /// let arrays = LongArrays::new();
    /// let info = AssertionInfo::new();
    /// let actual = [6_i64, 8, 10, 12];
    ///
    /// assert!(arrays.assert_contains_sequence(&info, Some(&actual), Some(&[6, 8])).is_ok());
    /// assert!(arrays.assert_contains_sequence(&info, Some(&actual), Some(&[6, 20, 22])).is_err());
    ///
    /// let err = arrays.assert_contains_sequence(&info, Some(&actual), Some(&[])).unwrap_err();
    /// assert_eq!(err.as_usage(), Some(&UsageError::ValuesToLookForIsEmpty));
    /// ```
    pub fn assert_contains_sequence(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::contains_run(&checks, actual, actual, sequence)
    }

    /// Passes when `actual` begins with `sequence`.
    pub fn assert_starts_with(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::starts(&checks, actual, actual, sequence)
    }

    /// Passes when `actual` ends with `sequence`.
    pub fn assert_ends_with(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
        sequence: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::ends(&checks, actual, actual, sequence)
    }

    /// Passes when no element of `actual` occurs twice.
    pub fn assert_does_not_have_duplicates(
        &self,
        info: &AssertionInfo,
        actual: Option<&[T]>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        elements::no_duplicates(&checks, actual, actual)
    }
}
