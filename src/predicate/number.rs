//! Ordering predicates
//!
//! Natural ordering through `PartialOrd`. Values that do not compare (a NaN
//! on either side) fail every ordering predicate and every equality
//! predicate except [`ne`].

use super::combinators::Predicate;

/// Matches values equal to the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual == self.0
    }
}

/// `actual == expected`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(eq(8).check(&8));
/// assert!(!eq(8).check(&6));
/// ```
pub fn eq<T: PartialEq>(expected: T) -> Eq<T> {
    Eq(expected)
}

/// Matches values different from the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq> Predicate<T> for Ne<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual != self.0
    }
}

/// `actual != other`.
pub fn ne<T: PartialEq>(other: T) -> Ne<T> {
    Ne(other)
}

/// Matches values strictly above the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual > self.0
    }
}

/// `actual > other`. Equal values fail.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(gt(6).check(&8));
/// assert!(!gt(6).check(&6));
/// assert!(!gt(8).check(&6));
/// ```
pub fn gt<T: PartialOrd>(other: T) -> Gt<T> {
    Gt(other)
}

/// Matches values at or above the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual >= self.0
    }
}

/// `actual >= other`.
pub fn ge<T: PartialOrd>(other: T) -> Ge<T> {
    Ge(other)
}

/// Matches values strictly below the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual < self.0
    }
}

/// `actual < other`. Equal values fail.
pub fn lt<T: PartialOrd>(other: T) -> Lt<T> {
    Lt(other)
}

/// Matches values at or below the held operand.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, actual: &T) -> bool {
        *actual <= self.0
    }
}

/// `actual <= other`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(le(8).check(&6));
/// assert!(le(6).check(&6));
/// assert!(!le(6).check(&8));
/// ```
pub fn le<T: PartialOrd>(other: T) -> Le<T> {
    Le(other)
}

/// `actual` equals the type's `Default`.
pub fn zero<T>() -> Eq<T>
where
    T: PartialEq + Default,
{
    Eq(T::default())
}

/// `actual` is above the type's `Default`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let p = positive::<i32>();
/// assert!(p.check(&1));
/// assert!(!p.check(&0));
/// assert!(!p.check(&-1));
/// ```
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default,
{
    Gt(T::default())
}

/// `actual` is below the type's `Default`.
pub fn negative<T>() -> Lt<T>
where
    T: PartialOrd + Default,
{
    Lt(T::default())
}
