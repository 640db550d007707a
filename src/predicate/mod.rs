//! Pure comparison predicates
//!
//! The truth-checking behind every gate. Predicates take their inputs by
//! reference, never mutate them and never report anything: they answer
//! `true` or `false` and leave failure reporting to the gates.
//!
//! # Example
//!
//! ```rust
//! use touchstone::predicate::*;
//!
//! assert!(gt(6).check(&8));
//! assert!(le(6).check(&6));
//! assert!(contains_sequence(&[6, 8][..]).check(&[6, 8, 10, 12][..]));
//! assert!(has_size(2).check(&["Luke", "Yoda"][..]));
//! ```

mod combinators;
mod number;
mod sequence;

// Re-export core trait
pub use combinators::{Not, Predicate, PredicateExt};

// Re-export ordering predicates
pub use number::{eq, ge, gt, le, lt, ne, negative, positive, zero, Eq, Ge, Gt, Le, Lt, Ne};

// Re-export sequence predicates
pub use sequence::{
    contains_at, contains_sequence, duplicates, ends_with, has_size, is_empty, missing, present,
    starts_with, ContainsAt, ContainsSequence, EndsWith, HasSize, IsEmpty, StartsWith,
};
