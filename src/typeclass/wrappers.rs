//! Newtype wrappers selecting a `Semigroup` for numeric payloads.
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Max`]: maximum, no identity on its own; `Optional<Max<A>>` supplies one

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use optional::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// The maximum semigroup.
///
/// # Examples
///
/// ```rust
/// use optional::typeclass::{Max, Semigroup};
///
/// assert_eq!(Max(3).combine(Max(5)), Max(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

impl<A> Sum<A> {
    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Max<A> {
    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}
