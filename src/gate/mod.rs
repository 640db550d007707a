//! Validation gates
//!
//! A gate is the entry point for one value category. Each `assert_*` method
//! runs its preconditions in a fixed order, evaluates a
//! [`predicate`](crate::predicate) and either returns `Ok(())` or exactly one
//! [`CheckError`]:
//!
//! 1. a missing `actual` is reported as
//!    [`ShouldNotBeNull`](crate::failures::ErrorDescriptor::ShouldNotBeNull)
//!    through the gate's [`Failures`];
//! 2. an empty `actual`, where the check needs elements, is reported as
//!    [`ShouldNotBeEmpty`](crate::failures::ErrorDescriptor::ShouldNotBeEmpty)
//!    the same way;
//! 3. invalid auxiliary arguments (missing or empty values to look for, a
//!    missing or out-of-range index) return a [`UsageError`] directly;
//! 4. a false predicate is reported through the gate's [`Failures`].
//!
//! Every gate holds its reporter and nothing else, so one instance can run
//! any number of checks in any order.

mod arrays;
mod collections;
mod comparables;
mod elements;
mod numbers;

pub use arrays::{
    Arrays, ByteArrays, DoubleArrays, FloatArrays, IntArrays, LongArrays, ShortArrays,
};
pub use collections::{Collection, Collections};
pub use comparables::Comparables;
pub use numbers::{Bytes, Doubles, Floats, Integers, Longs, Numbers, Shorts};

use crate::error::{CheckError, UsageError};
use crate::failures::{should_not_be_empty, should_not_be_null, ErrorDescriptor, Failures};
use crate::info::AssertionInfo;

/// Precondition and reporting steps shared by every gate for one call.
struct Checks<'a, F> {
    failures: &'a F,
    info: &'a AssertionInfo,
}

impl<'a, F: Failures> Checks<'a, F> {
    fn new(failures: &'a F, info: &'a AssertionInfo) -> Self {
        Checks { failures, info }
    }

    /// Report `descriptor` unless `holds`.
    fn ensure(
        &self,
        holds: bool,
        descriptor: impl FnOnce() -> ErrorDescriptor,
    ) -> Result<(), CheckError> {
        if holds {
            Ok(())
        } else {
            Err(self.fail(descriptor()))
        }
    }

    fn fail(&self, descriptor: ErrorDescriptor) -> CheckError {
        CheckError::Failure(self.failures.failure(self.info, descriptor))
    }

    fn not_null<T>(&self, actual: Option<T>) -> Result<T, CheckError> {
        actual.ok_or_else(|| self.fail(should_not_be_null()))
    }

    fn not_empty(&self, len: usize) -> Result<(), CheckError> {
        self.ensure(len > 0, should_not_be_empty)
    }
}

fn misuse(err: UsageError) -> CheckError {
    #[cfg(feature = "tracing")]
    tracing::trace!(error = %err, "check called with invalid arguments");
    CheckError::Usage(err)
}

/// The values to look for must be given and must not be empty.
fn values_to_look_for<V>(values: Option<&[V]>) -> Result<&[V], CheckError> {
    match values {
        None => Err(misuse(UsageError::ValuesToLookForIsNull)),
        Some([]) => Err(misuse(UsageError::ValuesToLookForIsEmpty)),
        Some(values) => Ok(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failures::StandardFailures;

    #[test]
    fn test_values_to_look_for() {
        assert_eq!(
            values_to_look_for::<i32>(None),
            Err(CheckError::Usage(UsageError::ValuesToLookForIsNull))
        );
        assert_eq!(
            values_to_look_for::<i32>(Some(&[])),
            Err(CheckError::Usage(UsageError::ValuesToLookForIsEmpty))
        );
        assert_eq!(values_to_look_for(Some(&[1, 2][..])), Ok(&[1, 2][..]));
    }

    #[test]
    fn test_checks_report_through_failures() {
        let info = AssertionInfo::new();
        let checks = Checks::new(&StandardFailures, &info);

        assert_eq!(checks.not_null(Some(3)), Ok(3));
        let err = checks.not_null::<i32>(None).unwrap_err();
        assert_eq!(
            err.as_failure().map(|e| e.descriptor()),
            Some(&should_not_be_null())
        );

        assert!(checks.not_empty(1).is_ok());
        assert_eq!(
            checks
                .not_empty(0)
                .unwrap_err()
                .as_failure()
                .map(|e| e.message()),
            Some("expecting actual not to be empty")
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use crate::error::UsageError;
        use crate::gate::IntArrays;
        use crate::info::AssertionInfo;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_usage_error_is_traced() {
            let result = IntArrays::new().assert_contains_at_index(
                &AssertionInfo::new(),
                Some(&[6, 8, 10]),
                8,
                None,
            );
            assert_eq!(
                result.unwrap_err().as_usage(),
                Some(&UsageError::IndexIsNull)
            );
            assert!(logs_contain("invalid arguments"));
            assert!(logs_contain("Index should not be null"));
        }
    }
}
