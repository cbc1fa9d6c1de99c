//! Applicative type class - applying functions within a context.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                                  // identity
//! pure(f).apply(pure(x)) == pure(f(x))                    // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)             // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Applicative;
//! use optional::{none, some, Optional};
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(lifted, some(42));
//!
//! assert_eq!(some(1).map2(some(2), |x, y| x + y), some(3));
//! assert_eq!(some(1).map2(none::<i32>(), |x, y| x + y), none());
//! ```

use super::functor::Functor;
use crate::Optional;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::Applicative;
    /// use optional::some;
    ///
    /// let function = some(|x: i32| x + 1);
    /// assert_eq!(function.apply(some(41)), some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| function(a, b))
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip(other).map(|(function, b)| function(b))
    }
}
