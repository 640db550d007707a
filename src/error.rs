//! Error types for failed checks
//!
//! A check can go wrong in two unrelated ways, and [`CheckError`] keeps them
//! apart:
//!
//! - [`AssertionError`]: the check was used correctly and the actual data
//!   violated the expectation. Always built by a
//!   [`Failures`](crate::failures::Failures) implementation from an
//!   [`ErrorDescriptor`].
//! - [`UsageError`]: the check itself was called with invalid arguments (a
//!   missing sequence, an empty sequence, a missing or out-of-range index).
//!   These bypass the reporter and point at a bug in the caller.
//!
//! # Examples
//!
//! ```
//! use touchstone::{AssertionInfo, CheckError, Comparables, UsageError};
//!
//! let comparables = Comparables::new();
//! let err = comparables
//!     .assert_greater_than(&AssertionInfo::new(), Some(6), 6)
//!     .unwrap_err();
//! assert!(err.is_failure());
//! assert_eq!(err.to_string(), "expected:<6> to be greater than:<6>");
//!
//! let usage: CheckError = UsageError::IndexIsNull.into();
//! assert!(usage.is_usage());
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::failures::ErrorDescriptor;

/// A rendered assertion failure.
///
/// Carries the message produced by the reporter together with the descriptor
/// it was rendered from, so callers can match on the failure kind without
/// parsing text.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionError {
    message: String,
    descriptor: ErrorDescriptor,
}

impl AssertionError {
    /// Create an assertion error from an already rendered message.
    pub fn new(message: impl Into<String>, descriptor: ErrorDescriptor) -> Self {
        AssertionError {
            message: message.into(),
            descriptor,
        }
    }

    /// The rendered, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The descriptor the message was rendered from.
    pub fn descriptor(&self) -> &ErrorDescriptor {
        &self.descriptor
    }

    /// Consume the error and keep only its descriptor.
    pub fn into_descriptor(self) -> ErrorDescriptor {
        self.descriptor
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for AssertionError {}

/// Misuse of a check's own arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageError {
    /// The values (or sequence) to look for were not given.
    ValuesToLookForIsNull,
    /// The values (or sequence) to look for were empty.
    ValuesToLookForIsEmpty,
    /// No index was given to a positional check.
    IndexIsNull,
    /// The index does not point inside the actual value.
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// The largest valid position.
        max: usize,
    },
    /// An index was built from a negative position.
    NegativeIndex(isize),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::ValuesToLookForIsNull => {
                f.write_str("The array of values to look for should not be null")
            }
            UsageError::ValuesToLookForIsEmpty => {
                f.write_str("The array of values to look for should not be empty")
            }
            UsageError::IndexIsNull => f.write_str("Index should not be null"),
            UsageError::IndexOutOfBounds { index, max } => write!(
                f,
                "Index should be between <0> and <{}> (inclusive,) but was <{}>",
                max, index
            ),
            UsageError::NegativeIndex(value) => {
                write!(f, "Index should not be negative but was <{}>", value)
            }
        }
    }
}

impl StdError for UsageError {}

/// The single error outcome of a check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckError {
    /// The actual data violated the expectation.
    Failure(AssertionError),
    /// The check was called with invalid arguments.
    Usage(UsageError),
}

impl CheckError {
    /// `true` for a data-driven assertion failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failure(_))
    }

    /// `true` for a misuse of the check's arguments.
    pub fn is_usage(&self) -> bool {
        matches!(self, CheckError::Usage(_))
    }

    /// The assertion failure, if this is one.
    pub fn as_failure(&self) -> Option<&AssertionError> {
        match self {
            CheckError::Failure(err) => Some(err),
            CheckError::Usage(_) => None,
        }
    }

    /// The usage error, if this is one.
    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            CheckError::Usage(err) => Some(err),
            CheckError::Failure(_) => None,
        }
    }
}

impl From<AssertionError> for CheckError {
    fn from(err: AssertionError) -> Self {
        CheckError::Failure(err)
    }
}

impl From<UsageError> for CheckError {
    fn from(err: UsageError) -> Self {
        CheckError::Usage(err)
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Failure(err) => fmt::Display::fmt(err, f),
            CheckError::Usage(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for CheckError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CheckError::Failure(err) => Some(err),
            CheckError::Usage(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failures::should_not_be_null;

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            UsageError::ValuesToLookForIsNull.to_string(),
            "The array of values to look for should not be null"
        );
        assert_eq!(
            UsageError::ValuesToLookForIsEmpty.to_string(),
            "The array of values to look for should not be empty"
        );
        assert_eq!(UsageError::IndexIsNull.to_string(), "Index should not be null");
        assert_eq!(
            UsageError::IndexOutOfBounds { index: 6, max: 2 }.to_string(),
            "Index should be between <0> and <2> (inclusive,) but was <6>"
        );
        assert_eq!(
            UsageError::NegativeIndex(-1).to_string(),
            "Index should not be negative but was <-1>"
        );
    }

    #[test]
    fn test_check_error_kinds() {
        let failure: CheckError =
            AssertionError::new("expecting actual not to be null", should_not_be_null()).into();
        assert!(failure.is_failure());
        assert!(!failure.is_usage());
        assert!(failure.as_usage().is_none());
        assert_eq!(
            failure.as_failure().map(|e| e.descriptor()),
            Some(&should_not_be_null())
        );

        let usage: CheckError = UsageError::IndexIsNull.into();
        assert!(usage.is_usage());
        assert_eq!(usage.as_usage(), Some(&UsageError::IndexIsNull));
    }

    #[test]
    fn test_display_delegates() {
        let failure = CheckError::from(AssertionError::new("boom", should_not_be_null()));
        assert_eq!(failure.to_string(), "boom");
        assert!(failure.source().is_some());
    }
}
