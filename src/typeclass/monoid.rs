//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a    // left identity
//! a.combine(Self::empty()) == a    // right identity
//! ```
//!
//! Any semigroup lifted into `Optional` becomes a monoid whose identity is
//! `None`, which is why `Optional<Max<T>>` has an identity even though
//! `Max<T>` alone does not.
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::{Max, Monoid};
//! use optional::{none, some, Optional};
//!
//! let values = vec![some(Max(3)), none(), some(Max(7))];
//! assert_eq!(Optional::combine_all(values), some(Max(7)));
//!
//! let empty: Vec<Optional<Max<i32>>> = Vec::new();
//! assert_eq!(Optional::combine_all(empty), none());
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::Sum;
use crate::Optional;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from the identity.
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(Self::empty(), |accumulator, value| accumulator.combine(value))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// The identity element is `None`.
impl<T: Semigroup> Monoid for Optional<T> {
    fn empty() -> Self {
        Self::None
    }
}
