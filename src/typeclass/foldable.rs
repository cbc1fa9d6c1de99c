//! Foldable type class - folding over data structures.
//!
//! An `Optional` is a structure of zero or one element, so every fold either
//! returns the initial value untouched or applies the function once.
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Foldable;
//! use optional::{none, some};
//!
//! let result = some(10).fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 15);
//!
//! let result = none::<i32>().fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::Optional;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
/// - `length`: Number of elements
pub trait Foldable: TypeConstructor {
    /// Folds the structure from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::{Foldable, Sum};
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(3).fold_map(Sum), Sum(3));
    /// assert_eq!(none::<i32>().fold_map(Sum), Sum(0));
    /// ```
    #[inline]
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Collects the elements into a `Vec`.
    #[inline]
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element matching `predicate`, as a standard `Option`.
    #[inline]
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }
}

impl<A> Foldable for Optional<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_defined())
    }
}
