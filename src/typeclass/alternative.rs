//! Alternative type class - choice between computations.
//!
//! # Laws
//!
//! ```text
//! empty.alt(x) == x                              // left identity
//! x.alt(empty) == x                              // right identity
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))           // associativity
//! ```
//!
//! For `Optional`, `alt` keeps the first present value, the same rule as
//! [`Optional::or_else`].
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Alternative;
//! use optional::{none, some, Optional};
//!
//! assert_eq!(none().alt(some(1)), some(1));
//! assert_eq!(some(2).alt(some(1)), some(2));
//!
//! let first = Optional::choice(vec![none(), some("b"), some("c")]);
//! assert_eq!(first, some("b"));
//! ```

use super::applicative::Applicative;
use crate::Optional;

/// A type class for applicatives with an empty element and a choice operator.
pub trait Alternative: Applicative {
    /// The empty computation.
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` unless it is empty, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when `condition` holds, otherwise empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::{Alternative, Monad};
    /// use optional::{none, some, Optional};
    ///
    /// let even = |n: i32| Optional::<()>::guard(n % 2 == 0).then(some(n));
    /// assert_eq!(even(4), some(4));
    /// assert_eq!(even(3), none());
    /// ```
    #[inline]
    fn guard(condition: bool) -> Self::WithType<()> {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Returns the first non-empty alternative, or empty.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Optional<A> {
    #[inline]
    fn empty<B>() -> Optional<B> {
        Optional::None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or_else(alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_defined)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{none, some};
    use rstest::rstest;

    #[rstest]
    fn choice_of_nothing_is_empty() {
        let alternatives: Vec<Optional<i32>> = Vec::new();
        assert_eq!(Optional::choice(alternatives), none());
    }

    #[rstest]
    fn choice_stops_at_first_defined() {
        let mut visited = 0;
        let alternatives = [none(), some(1), some(2)].into_iter().inspect(|_| visited += 1);
        assert_eq!(Optional::choice(alternatives), some(1));
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn empty_is_none_for_any_type() {
        let empty: Optional<String> = <Optional<i32> as Alternative>::empty();
        assert_eq!(empty, none());
    }
}
