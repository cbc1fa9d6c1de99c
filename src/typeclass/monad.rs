//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Monad;
//! use optional::{none, some, Optional};
//!
//! fn parse_positive(s: &str) -> Optional<i32> {
//!     Optional::from(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = some("42").and_then(parse_positive).and_then(|n| some(n * 2));
//! assert_eq!(result, some(84));
//!
//! let result = some("-1").and_then(parse_positive);
//! assert_eq!(result, none());
//! ```

use super::applicative::Applicative;
use crate::Optional;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` lets the result of one computation decide which computation
/// runs next.
pub trait Monad: Applicative {
    /// Sequentially composes two computations, passing the result of the
    /// first to the second.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::Monad;
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(5).then(some("hello")), some("hello"));
    /// assert_eq!(none::<i32>().then(some("hello")), none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}
