//! Gate for values with a natural ordering

use std::fmt::Debug;

use super::Checks;
use crate::error::CheckError;
use crate::failures::{
    should_be_equal, should_be_greater, should_be_greater_or_equal, should_be_less,
    should_be_less_or_equal, should_not_be_equal, Failures, StandardFailures,
};
use crate::info::AssertionInfo;
use crate::predicate::{eq, ge, gt, le, lt, ne, Predicate};

/// Equality and ordering checks for any `PartialOrd` value.
///
/// # Example
///
/// ```
/// use touchstone::{AssertionInfo, Comparables};
///
/// let comparables = Comparables::new();
/// let info = AssertionInfo::new();
///
/// assert!(comparables.assert_less_than_or_equal_to(&info, Some(6), 6).is_ok());
/// assert!(comparables.assert_less_than_or_equal_to(&info, Some("b"), "a").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparables<F = StandardFailures> {
    failures: F,
}

impl Comparables<StandardFailures> {
    /// Gate reporting through [`StandardFailures`].
    pub fn new() -> Self {
        Self::with_failures(StandardFailures::instance())
    }
}

impl<F: Failures> Comparables<F> {
    /// Gate reporting through `failures`.
    pub fn with_failures(failures: F) -> Self {
        Comparables { failures }
    }

    /// The reporter this gate delegates to.
    pub fn failures(&self) -> &F {
        &self.failures
    }

    fn checks<'a>(&'a self, info: &'a AssertionInfo) -> Checks<'a, F> {
        Checks::new(&self.failures, info)
    }

    /// Passes when `actual == expected`.
    pub fn assert_equal<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        expected: T,
    ) -> Result<(), CheckError>
    where
        T: PartialEq + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(eq(&expected).check(&&actual), || {
            should_be_equal(&actual, &expected)
        })
    }

    /// Passes when `actual != other`.
    pub fn assert_not_equal<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError>
    where
        T: PartialEq + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(ne(&other).check(&&actual), || {
            should_not_be_equal(&actual, &other)
        })
    }

    /// Passes when `actual < other`.
    pub fn assert_less_than<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError>
    where
        T: PartialOrd + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(lt(&other).check(&&actual), || {
            should_be_less(&actual, &other)
        })
    }

    /// Passes when `actual <= other`.
    pub fn assert_less_than_or_equal_to<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError>
    where
        T: PartialOrd + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(le(&other).check(&&actual), || {
            should_be_less_or_equal(&actual, &other)
        })
    }

    /// Passes when `actual > other`; equal values fail.
    pub fn assert_greater_than<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError>
    where
        T: PartialOrd + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(gt(&other).check(&&actual), || {
            should_be_greater(&actual, &other)
        })
    }

    /// Passes when `actual >= other`.
    pub fn assert_greater_than_or_equal_to<T>(
        &self,
        info: &AssertionInfo,
        actual: Option<T>,
        other: T,
    ) -> Result<(), CheckError>
    where
        T: PartialOrd + Debug,
    {
        let checks = self.checks(info);
        let actual = checks.not_null(actual)?;
        checks.ensure(ge(&other).check(&&actual), || {
            should_be_greater_or_equal(&actual, &other)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failures::should_not_be_null;

    fn descriptor_of(result: Result<(), CheckError>) -> Option<crate::failures::ErrorDescriptor> {
        result
            .err()
            .and_then(|e| e.as_failure().map(|f| f.descriptor().clone()))
    }

    #[test]
    fn test_equal() {
        let c = Comparables::new();
        let info = AssertionInfo::new();
        assert!(c.assert_equal(&info, Some("Yoda"), "Yoda").is_ok());
        assert_eq!(
            descriptor_of(c.assert_equal(&info, Some("Luke"), "Yoda")),
            Some(should_be_equal(&"Luke", &"Yoda"))
        );
    }

    #[test]
    fn test_not_equal() {
        let c = Comparables::new();
        let info = AssertionInfo::new();
        assert!(c.assert_not_equal(&info, Some(6), 8).is_ok());
        assert_eq!(
            descriptor_of(c.assert_not_equal(&info, Some(6), 6)),
            Some(should_not_be_equal(&6, &6))
        );
    }

    #[test]
    fn test_ordering() {
        let c = Comparables::new();
        let info = AssertionInfo::new();
        assert!(c.assert_less_than(&info, Some(6), 8).is_ok());
        assert!(c.assert_less_than(&info, Some(6), 6).is_err());
        assert!(c.assert_greater_than_or_equal_to(&info, Some(6), 6).is_ok());
        assert_eq!(
            descriptor_of(c.assert_greater_than_or_equal_to(&info, Some(6), 8)),
            Some(should_be_greater_or_equal(&6, &8))
        );
    }

    #[test]
    fn test_null_actual_comes_first() {
        let c = Comparables::new();
        let info = AssertionInfo::new();
        assert_eq!(
            descriptor_of(c.assert_greater_than(&info, None, 8)),
            Some(should_not_be_null())
        );
    }

    #[test]
    fn test_incomparable_values_fail() {
        let c = Comparables::new();
        let info = AssertionInfo::new();
        assert!(c.assert_greater_than(&info, Some(f64::NAN), 1.0).is_err());
        assert!(c
            .assert_less_than_or_equal_to(&info, Some(f64::NAN), 1.0)
            .is_err());
    }

    #[test]
    fn test_message_uses_description() {
        let c = Comparables::new();
        let info = AssertionInfo::new().with_description("age");
        let err = c.assert_less_than(&info, Some(30), 18).unwrap_err();
        assert_eq!(err.to_string(), "[age] expected:<30> to be less than:<18>");
    }
}
