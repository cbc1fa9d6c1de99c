//! Semigroup type class - associative binary operations.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Semigroup;
//! use optional::{none, some};
//!
//! assert_eq!(some(String::from("a")).combine(some(String::from("b"))), some(String::from("ab")));
//! assert_eq!(some(String::from("a")).combine(none()), some(String::from("a")));
//! ```

use std::ops::Add;

use super::wrappers::{Max, Sum};
use crate::Optional;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// `Optional` forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{none, some};
    use rstest::rstest;

    #[rstest]
    #[case(some(Sum(1)), some(Sum(2)), some(Sum(3)))]
    #[case(some(Sum(1)), none(), some(Sum(1)))]
    #[case(none(), some(Sum(2)), some(Sum(2)))]
    #[case(none(), none(), none())]
    fn optional_sum_combine(
        #[case] left: Optional<Sum<i32>>,
        #[case] right: Optional<Sum<i32>>,
        #[case] expected: Optional<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn max_keeps_the_larger_value() {
        assert_eq!(some(Max(3)).combine(some(Max(9))), some(Max(9)));
    }

    #[rstest]
    fn vec_combine_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }
}
