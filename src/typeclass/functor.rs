//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::Functor;
//! use optional::{none, some, Optional};
//!
//! let transformed: Optional<String> = some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, some("5".to_string()));
//!
//! let transformed: Optional<String> = none::<i32>().fmap(|n| n.to_string());
//! assert_eq!(transformed, none());
//! ```

use super::higher::TypeConstructor;
use crate::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` applies a function to the value(s) inside a container while
/// preserving the container's structure.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::Functor;
    /// use optional::some;
    ///
    /// assert_eq!(some(5).fmap(|n| n * 2), some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::Functor;
    /// use optional::some;
    ///
    /// let x = some("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), some(5));
    /// assert!(x.is_defined());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::typeclass::Functor;
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(5).replace("replaced"), some("replaced"));
    /// assert_eq!(none::<i32>().replace("replaced"), none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
