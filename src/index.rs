//! Validated positions for positional checks
//!
//! An [`Index`] is constructed once and checked against the bounds of the
//! actual value only when a check uses it. The two failure points are kept
//! apart: a negative position is rejected at construction, an out-of-range
//! position is rejected by the gate that receives it.
//!
//! # Example
//!
//! ```
//! use touchstone::{at_index, Index, UsageError};
//!
//! assert_eq!(at_index(2).value(), 2);
//! assert_eq!(Index::new(-1), Err(UsageError::NegativeIndex(-1)));
//! ```

use std::fmt;

use crate::error::UsageError;

/// A non-negative position inside an array or collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    value: usize,
}

impl Index {
    /// Create an index from a possibly negative position.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NegativeIndex`] when `value` is negative.
    pub fn new(value: isize) -> Result<Self, UsageError> {
        usize::try_from(value)
            .map(|value| Index { value })
            .map_err(|_| UsageError::NegativeIndex(value))
    }

    /// The position this index points at.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Check this index against a container of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::IndexOutOfBounds`] when the position is not in
    /// `[0, len)`. An empty container has no valid position at all.
    pub fn check_bounds(&self, len: usize) -> Result<usize, UsageError> {
        if self.value < len {
            Ok(self.value)
        } else {
            Err(UsageError::IndexOutOfBounds {
                index: self.value,
                max: len.saturating_sub(1),
            })
        }
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Index { value }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Create an index pointing at `value`.
///
/// # Example
///
/// ```
/// use touchstone::at_index;
///
/// assert_eq!(at_index(0).value(), 0);
/// ```
pub fn at_index(value: usize) -> Index {
    Index::from(value)
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Index {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        (0usize..1024).prop_map(Index::from).boxed()
    }
}
