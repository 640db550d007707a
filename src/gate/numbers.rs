//! Gate for primitive numbers
//!
//! Everything [`Comparables`] offers, fixed to one number type, plus sign
//! checks. Zero is the type's `Default`.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::{Checks, Comparables};
use crate::error::CheckError;
use crate::failures::{
    should_be_equal, should_be_greater, should_be_less, should_not_be_equal, Failures,
    StandardFailures,
};
use crate::info::AssertionInfo;
use crate::predicate::{negative, positive, zero, Predicate, PredicateExt};

/// Checks over numbers of type `T`.
///
/// # Example
///
/// ```
/// use touchstone::{AssertionInfo, Bytes};
///
/// let bytes = Bytes::new();
/// let info = AssertionInfo::new();
///
/// assert!(bytes.assert_greater_than(&info, Some(8), 6).is_ok());
/// assert!(bytes.assert_greater_than(&info, Some(6), 6).is_err());
/// assert!(bytes.assert_is_negative(&info, Some(-1)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Numbers<T, F = StandardFailures> {
    comparables: Comparables<F>,
    _number: PhantomData<fn(T)>,
}

/// Signed bytes.
pub type Bytes<F = StandardFailures> = Numbers<i8, F>;
/// Shorts.
pub type Shorts<F = StandardFailures> = Numbers<i16, F>;
/// Ints.
pub type Integers<F = StandardFailures> = Numbers<i32, F>;
/// Longs.
pub type Longs<F = StandardFailures> = Numbers<i64, F>;
/// Floats.
pub type Floats<F = StandardFailures> = Numbers<f32, F>;
/// Doubles.
pub type Doubles<F = StandardFailures> = Numbers<f64, F>;

impl<T> Numbers<T, StandardFailures>
where
    T: PartialOrd + Default + Debug,
{
    /// Gate reporting through [`StandardFailures`].
    pub fn new() -> Self {
        Self::with_failures(StandardFailures::instance())
    }
}

impl<T, F> Numbers<T, F>
where
    T: PartialOrd + Default + Debug,
    F: Failures,
{
    /// Gate reporting through `failures`.
    pub fn with_failures(failures: F) -> Self {
        Numbers {
            comparables: Comparables::with_failures(failures),
            _number: PhantomData,
        }
    }

    /// The reporter this gate delegates to.
    pub fn failures(&self) -> &F {
        self.comparables.failures()
    }

    /// Passes when `actual == expected`.
    pub fn assert_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        expected: T,
    ) -> Result<(), CheckError> {
        self.comparables.assert_equal(info, actual, expected)
    }

    /// Passes when `actual != other`.
    pub fn assert_not_equal(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError> {
        self.comparables.assert_not_equal(info, actual, other)
    }

    /// Passes when `actual < other`.
    pub fn assert_less_than(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError> {
        self.comparables.assert_less_than(info, actual, other)
    }

    /// Passes when `actual <= other`.
    pub fn assert_less_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError> {
        self.comparables
            .assert_less_than_or_equal_to(info, actual, other)
    }

    /// Passes when `actual > other`.
    pub fn assert_greater_than(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError> {
        self.comparables.assert_greater_than(info, actual, other)
    }

    /// Passes when `actual >= other`.
    pub fn assert_greater_than_or_equal_to(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError> {
        self.comparables
            .assert_greater_than_or_equal_to(info, actual, other)
    }

    /// Passes when `actual` is zero.
    pub fn assert_is_zero(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(zero::<T>().check(&actual), || {
            should_be_equal(&actual, &T::default())
        })
    }

    /// Passes when `actual` is not zero.
    pub fn assert_is_not_zero(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(zero::<T>().not().check(&actual), || {
            should_not_be_equal(&actual, &T::default())
        })
    }

    /// Passes when `actual` is greater than zero.
    pub fn assert_is_positive(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(positive::<T>().check(&actual), || {
            should_be_greater(&actual, &T::default())
        })
    }

    /// Passes when `actual` is less than zero.
    pub fn assert_is_negative(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
    ) -> Result<(), CheckError> {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(negative::<T>().check(&actual), || {
            should_be_less(&actual, &T::default())
        })
    }

    fn checks<'a>(&'a self, info: &'a AssertionInfo) -> Checks<'a, F> {
        Checks::new(self.comparables.failures(), info)
    }
}
