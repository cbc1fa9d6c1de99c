//! Type class traits implemented for [`Optional`](crate::Optional).
//!
//! - [`Functor`]: Mapping over the wrapped value
//! - [`Applicative`]: Lifting values and combining independent optionals
//! - [`Monad`]: Sequencing computations that may produce no value
//! - [`Foldable`]: Folding the zero or one element to a summary value
//! - [`Semigroup`] / [`Monoid`]: Combining payloads, with `None` as identity
//! - [`Alternative`]: Choosing the first present value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates them
//! with Generic Associated Types so that `Functor` and `Monad` can speak of
//! `Optional<B>` given `Optional<A>`.
//!
//! # Examples
//!
//! ```rust
//! use optional::typeclass::{Applicative, Functor, Monad};
//! use optional::{some, Optional};
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(20);
//! let result = lifted
//!     .fmap(|n| n + 1)
//!     .and_then(|n| some(n * 2));
//! assert_eq!(result, some(42));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Max, Sum};
