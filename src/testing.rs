//! Testing utilities for code built on the gates
//!
//! [`RecordingFailures`] is a [`Failures`] implementation that renders
//! messages exactly like [`StandardFailures`] and also records every
//! `(info, descriptor)` pair it was asked to report. Inject it into a gate to
//! verify which failure was reported, and how often, without parsing text.
//!
//! # Examples
//!
//! ## Recording reporter
//!
//! ```rust
//! use touchstone::failures::should_be_greater;
//! use touchstone::testing::RecordingFailures;
//! use touchstone::{AssertionInfo, Numbers};
//!
//! let failures = RecordingFailures::new();
//! let bytes = Numbers::<i8, _>::with_failures(&failures);
//! let info = AssertionInfo::new();
//!
//! assert!(bytes.assert_greater_than(&info, Some(6), 6).is_err());
//! failures.assert_reported(&info, &should_be_greater(&6_i8, &6_i8));
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use touchstone::failures::should_not_be_null;
//! use touchstone::{assert_failure, assert_passes, assert_usage_error};
//! use touchstone::{at_index, AssertionInfo, Comparables, IntArrays, UsageError};
//!
//! let info = AssertionInfo::new();
//! assert_passes!(Comparables::new().assert_less_than(&info, Some(1), 2));
//! assert_failure!(Comparables::new().assert_less_than(&info, None, 2), should_not_be_null());
//! assert_usage_error!(
//!     IntArrays::new().assert_contains_at_index(&info, Some(&[6, 8, 10]), 8, None),
//!     UsageError::IndexIsNull
//! );
//! ```

use std::sync::{Mutex, PoisonError};

use crate::error::AssertionError;
use crate::failures::{ErrorDescriptor, Failures, StandardFailures};
use crate::info::AssertionInfo;

/// A reporter that records every failure it renders.
#[derive(Debug, Default)]
pub struct RecordingFailures {
    calls: Mutex<Vec<(AssertionInfo, ErrorDescriptor)>>,
}

impl RecordingFailures {
    /// A recorder with no calls yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<(AssertionInfo, ErrorDescriptor)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The recorded descriptors, oldest first.
    pub fn descriptors(&self) -> Vec<ErrorDescriptor> {
        self.calls().into_iter().map(|(_, d)| d).collect()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Panic unless exactly one call was recorded and it matches.
    pub fn assert_reported(&self, info: &AssertionInfo, descriptor: &ErrorDescriptor) {
        let calls = self.calls();
        match calls.as_slice() {
            [(seen_info, seen)] if seen_info == info && seen == descriptor => {}
            _ => panic!(
                "Expected exactly one failure {:?} for {:?}, recorded: {:?}",
                descriptor, info, calls
            ),
        }
    }

    /// Panic if anything was recorded.
    pub fn assert_nothing_reported(&self) {
        let calls = self.calls();
        if !calls.is_empty() {
            panic!("Expected no failures, recorded: {:?}", calls);
        }
    }
}

impl Failures for RecordingFailures {
    fn failure(&self, info: &AssertionInfo, descriptor: ErrorDescriptor) -> AssertionError {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((info.clone(), descriptor.clone()));
        StandardFailures::instance().failure(info, descriptor)
    }
}

/// Assert that a check passed.
///
/// # Example
///
/// ```rust
/// use touchstone::{assert_passes, AssertionInfo, Comparables};
///
/// assert_passes!(Comparables::new().assert_greater_than(&AssertionInfo::new(), Some(8), 6));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected check to pass, got: {:?}", e);
            }
        }
    };
}

/// Assert that a check failed as an assertion failure, optionally with a
/// specific descriptor.
///
/// # Example
///
/// ```rust
/// use touchstone::failures::should_be_greater;
/// use touchstone::{assert_failure, AssertionInfo, Comparables};
///
/// let result = Comparables::new().assert_greater_than(&AssertionInfo::new(), Some(6), 6);
/// assert_failure!(result.clone());
/// assert_failure!(result, should_be_greater(&6, &6));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::Failure(_)) => {}
            other => {
                panic!("Expected assertion failure, got: {:?}", other);
            }
        }
    };
    ($result:expr, $descriptor:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::Failure(e)) => {
                assert_eq!(e.descriptor(), &$descriptor);
            }
            other => {
                panic!(
                    "Expected assertion failure {:?}, got: {:?}",
                    $descriptor, other
                );
            }
        }
    };
}

/// Assert that a check rejected its arguments with a specific usage error.
///
/// # Example
///
/// ```rust
/// use touchstone::{assert_usage_error, AssertionInfo, IntArrays, UsageError};
///
/// let result = IntArrays::new().assert_contains_sequence(&AssertionInfo::new(), Some(&[1]), None);
/// assert_usage_error!(result, UsageError::ValuesToLookForIsNull);
/// ```
#[macro_export]
macro_rules! assert_usage_error {
    ($result:expr, $usage:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::Usage(e)) => {
                assert_eq!(e, $usage);
            }
            other => {
                panic!("Expected usage error {:?}, got: {:?}", $usage, other);
            }
        }
    };
}
