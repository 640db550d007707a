//! Failure reporting shared by every validation gate
//!
//! Gates never build an [`AssertionError`] themselves. When a check fails
//! they build an [`ErrorDescriptor`] and hand it, together with the call
//! site's [`AssertionInfo`], to a [`Failures`] implementation. The standard
//! reporter renders the message; tests swap in a recording fake.
//!
//! # Example
//!
//! ```
//! use touchstone::failures::{should_be_greater, Failures, StandardFailures};
//! use touchstone::AssertionInfo;
//!
//! let info = AssertionInfo::new().with_description("speed");
//! let err = StandardFailures::instance().failure(&info, should_be_greater(&6, &8));
//! assert_eq!(err.message(), "[speed] expected:<6> to be greater than:<8>");
//! ```

mod descriptor;

use std::rc::Rc;
use std::sync::Arc;

use crate::error::AssertionError;
use crate::info::AssertionInfo;

pub use descriptor::{
    should_be_empty, should_be_equal, should_be_greater, should_be_greater_or_equal,
    should_be_less, should_be_less_or_equal, should_be_null_or_empty, should_contain,
    should_contain_at_index, should_contain_sequence, should_end_with, should_have_size,
    should_not_be_empty, should_not_be_equal, should_not_be_null, should_not_contain,
    should_not_contain_at_index, should_not_have_duplicates, should_start_with, ErrorDescriptor,
    Operand,
};

/// Turns a failed check into an [`AssertionError`].
///
/// Implementations must not hold per-call state: one reporter is shared by
/// any number of gates and checks.
pub trait Failures {
    /// Build the assertion error for `descriptor` as seen from `info`.
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError;
}

impl<F: Failures + ?Sized> Failures for &F {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        (**self).failure(info, descriptor)
    }
}

impl<F: Failures + ?Sized> Failures for Box<F> {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        (**self).failure(info, descriptor)
    }
}

impl<F: Failures + ?Sized> Failures for Rc<F> {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        (**self).failure(info, descriptor)
    }
}

impl<F: Failures + ?Sized> Failures for Arc<F> {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        (**self).failure(info, descriptor)
    }
}

/// The reporter used when none is injected.
///
/// Renders the descriptor with the info's representation and prefixes the
/// description, when there is one, as `[description] `.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardFailures;

impl StandardFailures {
    /// The shared reporter.
    pub const fn instance() -> Self {
        StandardFailures
    }

    /// Render the full message for `descriptor` without building an error.
    pub fn message(&self, info: &AssertionInfo, descriptor: &ErrorDescriptor) -> String {
        let body = descriptor.describe(info.representation());
        match info.description() {
            Some(description) => format!("[{}] {}", description, body),
            None => body,
        }
    }
}

impl Failures for StandardFailures {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        let message = self.message(info, &descriptor);
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = descriptor.kind(), %message, "assertion failed");
        AssertionError::new(message, descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::Representation;

    #[test]
    fn test_failure_without_description() {
        let err = StandardFailures.failure(&AssertionInfo::new(), should_be_greater(&6, &6));
        assert_eq!(err.message(), "expected:<6> to be greater than:<6>");
        assert_eq!(err.descriptor(), &should_be_greater(&6, &6));
    }

    #[test]
    fn test_failure_with_description_and_representation() {
        let info = AssertionInfo::new()
            .with_description("size check")
            .with_representation(Representation::Plain);
        let err = StandardFailures.failure(&info, should_have_size(&vec!["Yoda"], 1, 8));
        assert_eq!(
            err.message(),
            "[size check] expected size:8 but was:1 in:[\"Yoda\"]"
        );
    }

    #[test]
    fn test_shared_reporter_through_pointers() {
        let shared = Arc::new(StandardFailures::instance());
        let boxed: Box<dyn Failures> = Box::new(StandardFailures);
        let info = AssertionInfo::new();

        let a = shared.failure(&info, should_not_be_null());
        let b = boxed.failure(&info, should_not_be_null());
        let c = (&StandardFailures).failure(&info, should_not_be_null());
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.message(), "expecting actual not to be null");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_failure_is_logged() {
            let _ = StandardFailures.failure(&AssertionInfo::new(), should_not_be_empty());
            assert!(logs_contain("should_not_be_empty"));
        }
    }
}
