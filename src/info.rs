//! Call-site context attached to every check
//!
//! [`AssertionInfo`] never influences whether a check passes. It only decides
//! how a failure is rendered: an optional description that prefixes the
//! message and the [`Representation`] used to print operands.
//!
//! # Example
//!
//! ```
//! use touchstone::{AssertionInfo, Representation};
//!
//! let info = AssertionInfo::new()
//!     .with_description("age")
//!     .with_representation(Representation::Plain);
//!
//! assert_eq!(info.description(), Some("age"));
//! assert_eq!(info.representation(), Representation::Plain);
//! ```

use std::fmt;

/// Strategy for printing operands inside failure messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    /// `<value>`
    #[default]
    Standard,
    /// `value`
    Plain,
    /// `` `value` ``
    Quoted,
}

impl Representation {
    /// Print an already formatted operand using this strategy.
    pub fn render(&self, value: &str) -> String {
        match self {
            Representation::Standard => format!("<{}>", value),
            Representation::Plain => value.to_string(),
            Representation::Quoted => format!("`{}`", value),
        }
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Representation {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![
            Just(Representation::Standard),
            Just(Representation::Plain),
            Just(Representation::Quoted),
        ]
        .boxed()
    }
}

/// Immutable context for a single check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AssertionInfo {
    description: Option<String>,
    representation: Representation,
}

impl AssertionInfo {
    /// Context with no description and the standard representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a description that prefixes every rendered message.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Choose how operands are printed.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// The description override, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The operand printing strategy.
    pub fn representation(&self) -> Representation {
        self.representation
    }
}

impl fmt::Display for AssertionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "[{}]", description),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_info() {
        let info = AssertionInfo::new();
        assert_eq!(info.description(), None);
        assert_eq!(info.representation(), Representation::Standard);
        assert_eq!(info.to_string(), "");
    }

    #[test]
    fn test_description_display() {
        let info = AssertionInfo::new().with_description("user age");
        assert_eq!(info.to_string(), "[user age]");
    }

    #[test]
    fn test_representations() {
        assert_eq!(Representation::Standard.render("6"), "<6>");
        assert_eq!(Representation::Plain.render("6"), "6");
        assert_eq!(Representation::Quoted.render("6"), "`6`");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn representation_arbitrary_renders_every_variant(
                representation in any::<Representation>(),
                value in "[a-z0-9]{1,8}",
            ) {
                let rendered = representation.render(&value);
                match representation {
                    Representation::Standard => prop_assert_eq!(rendered, format!("<{}>", value)),
                    Representation::Plain => prop_assert_eq!(rendered, value),
                    Representation::Quoted => prop_assert_eq!(rendered, format!("`{}`", value)),
                }
            }
        }
    }
}
