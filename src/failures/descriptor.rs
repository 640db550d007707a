//! Error descriptors and the functions that build them
//!
//! Each failure kind has exactly one constructor function. Operands are
//! captured through their `Debug` form when the descriptor is built, so a
//! descriptor is a plain value: it can be compared in tests, serialized, and
//! rendered later with whatever [`Representation`] the call site asked for.

use std::fmt::{self, Debug};

use crate::index::Index;
use crate::info::Representation;

/// One operand of a failed check, captured through its `Debug` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operand(String);

impl Operand {
    /// Capture `value` as an operand.
    pub fn of<T: Debug + ?Sized>(value: &T) -> Self {
        Operand(format!("{:?}", value))
    }

    /// The captured text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn render(&self, representation: Representation) -> String {
        representation.render(&self.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable description of one failed check.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorDescriptor {
    /// `actual` was absent.
    ShouldNotBeNull,
    /// `actual` had no elements where at least one was needed.
    ShouldNotBeEmpty,
    /// `actual` had elements.
    ShouldBeEmpty {
        /// The checked value.
        actual: Operand,
    },
    /// `actual` was present and had elements.
    ShouldBeNullOrEmpty {
        /// The checked value.
        actual: Operand,
    },
    /// `actual` differed from `expected`.
    ShouldBeEqual {
        /// The checked value.
        actual: Operand,
        /// The value it had to equal.
        expected: Operand,
    },
    /// `actual` equalled `other`.
    ShouldNotBeEqual {
        /// The checked value.
        actual: Operand,
        /// The value it had to differ from.
        other: Operand,
    },
    /// `actual` was not strictly greater than `other`.
    ShouldBeGreater {
        /// The checked value.
        actual: Operand,
        /// The lower bound.
        other: Operand,
    },
    /// `actual` was below `other`.
    ShouldBeGreaterOrEqual {
        /// The checked value.
        actual: Operand,
        /// The inclusive lower bound.
        other: Operand,
    },
    /// `actual` was not strictly less than `other`.
    ShouldBeLess {
        /// The checked value.
        actual: Operand,
        /// The upper bound.
        other: Operand,
    },
    /// `actual` was above `other`.
    ShouldBeLessOrEqual {
        /// The checked value.
        actual: Operand,
        /// The inclusive upper bound.
        other: Operand,
    },
    /// `actual` had `actual_size` elements instead of `expected_size`.
    ShouldHaveSize {
        /// The checked value.
        actual: Operand,
        /// Elements found.
        actual_size: usize,
        /// Elements required.
        expected_size: usize,
    },
    /// The element at `index` was not `value`.
    ShouldContainAtIndex {
        /// The checked value.
        actual: Operand,
        /// The element looked for.
        value: Operand,
        /// Where it was looked for.
        index: Index,
    },
    /// The element at `index` was `value`.
    ShouldNotContainAtIndex {
        /// The checked value.
        actual: Operand,
        /// The element that had to be absent.
        value: Operand,
        /// Where it was found.
        index: Index,
    },
    /// Some of `values` were missing from `actual`.
    ShouldContain {
        /// The checked value.
        actual: Operand,
        /// Everything looked for.
        values: Operand,
        /// The subset that was missing.
        not_found: Operand,
    },
    /// Some of `values` occurred in `actual`.
    ShouldNotContain {
        /// The checked value.
        actual: Operand,
        /// Everything that had to be absent.
        values: Operand,
        /// The subset that was present.
        found: Operand,
    },
    /// `sequence` did not occur as a contiguous run of `actual`.
    ShouldContainSequence {
        /// The checked value.
        actual: Operand,
        /// The run looked for.
        sequence: Operand,
    },
    /// `actual` did not begin with `sequence`.
    ShouldStartWith {
        /// The checked value.
        actual: Operand,
        /// The expected prefix.
        sequence: Operand,
    },
    /// `actual` did not end with `sequence`.
    ShouldEndWith {
        /// The checked value.
        actual: Operand,
        /// The expected suffix.
        sequence: Operand,
    },
    /// Some elements of `actual` occurred more than once.
    ShouldNotHaveDuplicates {
        /// The checked value.
        actual: Operand,
        /// Each repeated element, once, in order of first repetition.
        duplicates: Operand,
    },
}

impl ErrorDescriptor {
    /// Short, stable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorDescriptor::ShouldNotBeNull => "should_not_be_null",
            ErrorDescriptor::ShouldNotBeEmpty => "should_not_be_empty",
            ErrorDescriptor::ShouldBeEmpty { .. } => "should_be_empty",
            ErrorDescriptor::ShouldBeNullOrEmpty { .. } => "should_be_null_or_empty",
            ErrorDescriptor::ShouldBeEqual { .. } => "should_be_equal",
            ErrorDescriptor::ShouldNotBeEqual { .. } => "should_not_be_equal",
            ErrorDescriptor::ShouldBeGreater { .. } => "should_be_greater",
            ErrorDescriptor::ShouldBeGreaterOrEqual { .. } => "should_be_greater_or_equal",
            ErrorDescriptor::ShouldBeLess { .. } => "should_be_less",
            ErrorDescriptor::ShouldBeLessOrEqual { .. } => "should_be_less_or_equal",
            ErrorDescriptor::ShouldHaveSize { .. } => "should_have_size",
            ErrorDescriptor::ShouldContainAtIndex { .. } => "should_contain_at_index",
            ErrorDescriptor::ShouldNotContainAtIndex { .. } => "should_not_contain_at_index",
            ErrorDescriptor::ShouldContain { .. } => "should_contain",
            ErrorDescriptor::ShouldNotContain { .. } => "should_not_contain",
            ErrorDescriptor::ShouldContainSequence { .. } => "should_contain_sequence",
            ErrorDescriptor::ShouldStartWith { .. } => "should_start_with",
            ErrorDescriptor::ShouldEndWith { .. } => "should_end_with",
            ErrorDescriptor::ShouldNotHaveDuplicates { .. } => "should_not_have_duplicates",
        }
    }

    /// Render the message body with the given operand representation.
    pub fn describe(&self, representation: Representation) -> String {
        let r = |operand: &Operand| operand.render(representation);
        let n = |value: usize| representation.render(&value.to_string());
        match self {
            ErrorDescriptor::ShouldNotBeNull => "expecting actual not to be null".to_string(),
            ErrorDescriptor::ShouldNotBeEmpty => "expecting actual not to be empty".to_string(),
            ErrorDescriptor::ShouldBeEmpty { actual } => {
                format!("expecting empty but was:{}", r(actual))
            }
            ErrorDescriptor::ShouldBeNullOrEmpty { actual } => {
                format!("expecting null or empty but was:{}", r(actual))
            }
            ErrorDescriptor::ShouldBeEqual { actual, expected } => {
                format!("expected:{} but was:{}", r(expected), r(actual))
            }
            ErrorDescriptor::ShouldNotBeEqual { actual, other } => {
                format!("{} should not be equal to:{}", r(actual), r(other))
            }
            ErrorDescriptor::ShouldBeGreater { actual, other } => {
                format!("expected:{} to be greater than:{}", r(actual), r(other))
            }
            ErrorDescriptor::ShouldBeGreaterOrEqual { actual, other } => format!(
                "expected:{} to be greater than or equal to:{}",
                r(actual),
                r(other)
            ),
            ErrorDescriptor::ShouldBeLess { actual, other } => {
                format!("expected:{} to be less than:{}", r(actual), r(other))
            }
            ErrorDescriptor::ShouldBeLessOrEqual { actual, other } => format!(
                "expected:{} to be less than or equal to:{}",
                r(actual),
                r(other)
            ),
            ErrorDescriptor::ShouldHaveSize {
                actual,
                actual_size,
                expected_size,
            } => format!(
                "expected size:{} but was:{} in:{}",
                n(*expected_size),
                n(*actual_size),
                r(actual)
            ),
            ErrorDescriptor::ShouldContainAtIndex {
                actual,
                value,
                index,
            } => format!(
                "expecting {} to contain {} at index {}",
                r(actual),
                r(value),
                n(index.value())
            ),
            ErrorDescriptor::ShouldNotContainAtIndex {
                actual,
                value,
                index,
            } => format!(
                "expecting {} not to contain {} at index {}",
                r(actual),
                r(value),
                n(index.value())
            ),
            ErrorDescriptor::ShouldContain {
                actual,
                values,
                not_found,
            } => format!(
                "expecting:{} to contain:{} but could not find:{}",
                r(actual),
                r(values),
                r(not_found)
            ),
            ErrorDescriptor::ShouldNotContain {
                actual,
                values,
                found,
            } => format!(
                "expecting:{} not to contain:{} but found:{}",
                r(actual),
                r(values),
                r(found)
            ),
            ErrorDescriptor::ShouldContainSequence { actual, sequence } => format!(
                "expecting:{} to contain sequence:{}",
                r(actual),
                r(sequence)
            ),
            ErrorDescriptor::ShouldStartWith { actual, sequence } => {
                format!("expecting:{} to start with:{}", r(actual), r(sequence))
            }
            ErrorDescriptor::ShouldEndWith { actual, sequence } => {
                format!("expecting:{} to end with:{}", r(actual), r(sequence))
            }
            ErrorDescriptor::ShouldNotHaveDuplicates { actual, duplicates } => format!(
                "found duplicate(s):{} in:{}",
                r(duplicates),
                r(actual)
            ),
        }
    }
}

/// `actual` was absent.
pub fn should_not_be_null() -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotBeNull
}

/// `actual` was empty where elements were required.
pub fn should_not_be_empty() -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotBeEmpty
}

/// `actual` had elements where none were expected.
pub fn should_be_empty<A: Debug + ?Sized>(actual: &A) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeEmpty {
        actual: Operand::of(actual),
    }
}

/// `actual` was neither absent nor empty.
pub fn should_be_null_or_empty<A: Debug + ?Sized>(actual: &A) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeNullOrEmpty {
        actual: Operand::of(actual),
    }
}

/// `actual` differs from `expected`.
pub fn should_be_equal<T: Debug + ?Sized>(actual: &T, expected: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeEqual {
        actual: Operand::of(actual),
        expected: Operand::of(expected),
    }
}

/// `actual` equals `other`.
pub fn should_not_be_equal<T: Debug + ?Sized>(actual: &T, other: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotBeEqual {
        actual: Operand::of(actual),
        other: Operand::of(other),
    }
}

/// `actual` is not strictly greater than `other`.
///
/// # Example
///
/// ```
/// use touchstone::failures::should_be_greater;
/// use touchstone::Representation;
///
/// let descriptor = should_be_greater(&6, &8);
/// assert_eq!(
///     descriptor.describe(Representation::Standard),
///     "expected:<6> to be greater than:<8>"
/// );
/// ```
pub fn should_be_greater<T: Debug + ?Sized>(actual: &T, other: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeGreater {
        actual: Operand::of(actual),
        other: Operand::of(other),
    }
}

/// `actual` is less than `other`.
pub fn should_be_greater_or_equal<T: Debug + ?Sized>(actual: &T, other: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeGreaterOrEqual {
        actual: Operand::of(actual),
        other: Operand::of(other),
    }
}

/// `actual` is not strictly less than `other`.
pub fn should_be_less<T: Debug + ?Sized>(actual: &T, other: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeLess {
        actual: Operand::of(actual),
        other: Operand::of(other),
    }
}

/// `actual` is greater than `other`.
pub fn should_be_less_or_equal<T: Debug + ?Sized>(actual: &T, other: &T) -> ErrorDescriptor {
    ErrorDescriptor::ShouldBeLessOrEqual {
        actual: Operand::of(actual),
        other: Operand::of(other),
    }
}

/// `actual` holds `actual_size` elements instead of `expected_size`.
pub fn should_have_size<A: Debug + ?Sized>(
    actual: &A,
    actual_size: usize,
    expected_size: usize,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldHaveSize {
        actual: Operand::of(actual),
        actual_size,
        expected_size,
    }
}

/// `actual` does not hold `value` at `index`.
pub fn should_contain_at_index<A: Debug + ?Sized, T: Debug + ?Sized>(
    actual: &A,
    value: &T,
    index: Index,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldContainAtIndex {
        actual: Operand::of(actual),
        value: Operand::of(value),
        index,
    }
}

/// `actual` holds `value` at `index`.
pub fn should_not_contain_at_index<A: Debug + ?Sized, T: Debug + ?Sized>(
    actual: &A,
    value: &T,
    index: Index,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotContainAtIndex {
        actual: Operand::of(actual),
        value: Operand::of(value),
        index,
    }
}

/// Some of `values` are missing from `actual`.
pub fn should_contain<A: Debug + ?Sized, V: Debug + ?Sized, N: Debug + ?Sized>(
    actual: &A,
    values: &V,
    not_found: &N,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldContain {
        actual: Operand::of(actual),
        values: Operand::of(values),
        not_found: Operand::of(not_found),
    }
}

/// Some of `values` are present in `actual`.
pub fn should_not_contain<A: Debug + ?Sized, V: Debug + ?Sized, F: Debug + ?Sized>(
    actual: &A,
    values: &V,
    found: &F,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotContain {
        actual: Operand::of(actual),
        values: Operand::of(values),
        found: Operand::of(found),
    }
}

/// `sequence` is not a contiguous run of `actual`.
pub fn should_contain_sequence<A: Debug + ?Sized, S: Debug + ?Sized>(
    actual: &A,
    sequence: &S,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldContainSequence {
        actual: Operand::of(actual),
        sequence: Operand::of(sequence),
    }
}

/// `actual` does not begin with `sequence`.
pub fn should_start_with<A: Debug + ?Sized, S: Debug + ?Sized>(
    actual: &A,
    sequence: &S,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldStartWith {
        actual: Operand::of(actual),
        sequence: Operand::of(sequence),
    }
}

/// `actual` does not end with `sequence`.
pub fn should_end_with<A: Debug + ?Sized, S: Debug + ?Sized>(
    actual: &A,
    sequence: &S,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldEndWith {
        actual: Operand::of(actual),
        sequence: Operand::of(sequence),
    }
}

/// `actual` holds the listed `duplicates` more than once.
pub fn should_not_have_duplicates<A: Debug + ?Sized, D: Debug + ?Sized>(
    actual: &A,
    duplicates: &D,
) -> ErrorDescriptor {
    ErrorDescriptor::ShouldNotHaveDuplicates {
        actual: Operand::of(actual),
        duplicates: Operand::of(duplicates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::at_index;

    #[test]
    fn test_operand_captures_debug_form() {
        assert_eq!(Operand::of(&6).as_str(), "6");
        assert_eq!(Operand::of(&[6.0, 8.0][..]).as_str(), "[6.0, 8.0]");
        assert_eq!(Operand::of("Yoda").as_str(), "\"Yoda\"");
    }

    #[test]
    fn test_descriptors_compare_by_operands() {
        assert_eq!(should_be_greater(&6, &6), should_be_greater(&6, &6));
        assert_ne!(should_be_greater(&6, &6), should_be_greater(&6, &8));
        assert_ne!(should_be_greater(&6, &8), should_be_less(&6, &8));
    }

    #[test]
    fn test_describe_ordering() {
        let repr = Representation::Standard;
        assert_eq!(
            should_be_less_or_equal(&8, &6).describe(repr),
            "expected:<8> to be less than or equal to:<6>"
        );
        assert_eq!(
            should_be_greater_or_equal(&1, &2).describe(Representation::Plain),
            "expected:1 to be greater than or equal to:2"
        );
        assert_eq!(
            should_be_equal(&1, &2).describe(repr),
            "expected:<2> but was:<1>"
        );
    }

    #[test]
    fn test_describe_containers() {
        let repr = Representation::Standard;
        assert_eq!(
            should_have_size(&vec!["Yoda"], 1, 8).describe(repr),
            "expected size:<8> but was:<1> in:<[\"Yoda\"]>"
        );
        assert_eq!(
            should_contain_at_index(&[6, 8, 10][..], &6, at_index(1)).describe(repr),
            "expecting <[6, 8, 10]> to contain <6> at index <1>"
        );
        assert_eq!(
            should_contain_sequence(&[6, 8][..], &[6, 20][..]).describe(Representation::Quoted),
            "expecting:`[6, 8]` to contain sequence:`[6, 20]`"
        );
        assert_eq!(
            should_not_have_duplicates(&[1, 1][..], &[1][..]).describe(repr),
            "found duplicate(s):<[1]> in:<[1, 1]>"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(should_not_be_null().kind(), "should_not_be_null");
        assert_eq!(
            should_contain_sequence(&[1][..], &[2][..]).kind(),
            "should_contain_sequence"
        );
    }
}
