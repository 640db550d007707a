//! Core predicate trait and negation
//!
//! Every comparison the gates run is a [`Predicate`]: a pure `&T -> bool`
//! check that never mutates what it looks at.

/// A pure check over values of type T.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(gt(6).check(&8));
/// assert!(!gt(6).check(&6));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use touchstone::predicate::*;
    ///
    /// let p = eq(0).not();
    /// assert!(p.check(&5));
    /// assert!(!p.check(&0));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_predicate() {
        let even = |x: &i32| x % 2 == 0;
        assert!(even.check(&4));
        assert!(!even.check(&3));
    }

    #[test]
    fn test_not() {
        let odd = Not(|x: &i32| x % 2 == 0);
        assert!(odd.check(&3));
        assert!(!odd.check(&4));
    }

    #[test]
    fn test_double_not() {
        let p = Not(Not(|x: &i32| *x > 0));
        assert!(p.check(&1));
        assert!(!p.check(&-1));
    }
}
