//! # Touchstone
//!
//! The truth-checking core behind a fluent assertion library.
//!
//! Higher-level assertion methods delegate here. Each value category has a
//! validation gate ([`Comparables`], [`Numbers`], [`Arrays`], [`Collections`])
//! whose `assert_*` methods run their preconditions in a fixed order, evaluate
//! a pure [`predicate`], and report a failed check through an injected
//! [`Failures`](failures::Failures) reporter.
//!
//! Two kinds of error never mix:
//!
//! - **assertion failures** ([`CheckError::Failure`]): the data violated the
//!   expectation. Rendered from an [`ErrorDescriptor`](failures::ErrorDescriptor).
//! - **usage errors** ([`CheckError::Usage`]): the check was called with
//!   invalid arguments, such as an empty sequence to look for or an index
//!   past the end.
//!
//! ## Quick Example
//!
//! ```rust
//! use touchstone::{at_index, AssertionInfo, Bytes, Collections, IntArrays, UsageError};
//!
//! let info = AssertionInfo::new();
//!
//! assert!(Bytes::new().assert_greater_than(&info, Some(8), 6).is_ok());
//!
//! let err = Bytes::new().assert_greater_than(&info, Some(6), 6).unwrap_err();
//! assert_eq!(err.to_string(), "expected:<6> to be greater than:<6>");
//!
//! let arrays = IntArrays::new();
//! let actual = [6, 8, 10];
//! let err = arrays
//!     .assert_contains_at_index(&info, Some(&actual), 8, Some(at_index(6)))
//!     .unwrap_err();
//! assert_eq!(
//!     err.as_usage(),
//!     Some(&UsageError::IndexOutOfBounds { index: 6, max: 2 })
//! );
//!
//! assert!(Collections::new()
//!     .assert_has_size(&info, Some(&vec!["Luke", "Yoda"]), 2)
//!     .is_ok());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod failures;
pub mod gate;
pub mod index;
pub mod info;
pub mod predicate;
pub mod testing;

// Re-exports
pub use error::{AssertionError, CheckError, UsageError};
pub use gate::{
    Arrays, ByteArrays, Bytes, Collection, Collections, Comparables, DoubleArrays, Doubles,
    FloatArrays, Floats, IntArrays, Integers, LongArrays, Longs, Numbers, ShortArrays, Shorts,
};
pub use index::{at_index, Index};
pub use info::{AssertionInfo, Representation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{AssertionError, CheckError, UsageError};
    pub use crate::failures::{ErrorDescriptor, Failures, StandardFailures};
    pub use crate::gate::{Arrays, Collection, Collections, Comparables, Numbers};
    pub use crate::index::{at_index, Index};
    pub use crate::info::{AssertionInfo, Representation};
}
