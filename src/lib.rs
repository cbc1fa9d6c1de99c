//! # optional
//!
//! An optional-value container for Rust with a closed algebra of combinators.
//!
//! ## Overview
//!
//! [`Optional<T>`] models the presence (`Some`) or absence (`None`) of a value
//! and offers combinators to query, transform and extract it without null
//! checks:
//!
//! - **Queries**: `is_empty`, `non_empty`, `is_defined`, `contains`, `exists`, `for_all`
//! - **Extraction**: `get`, `get_or_else`, `get_or_else_with`, `or_null`
//! - **Transformation**: `map`, `flat_map`, `fold`, `filter`, `filter_not`, `or_else`, `for_each`
//! - **Iteration**: a sequence of at most one element
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup, Monoid, Alternative
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits implemented for `Optional` (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optional::prelude::*;
//!
//! let something = some("thing").map(|s| format!("some{s}"));
//! assert_eq!(something, some("something".to_string()));
//!
//! let nothing: Optional<&str> = none();
//! assert_eq!(nothing.flat_map(|_| some("something")), none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Optional` type, its constructors and, with the `typeclass`
/// feature, the type class traits.
///
/// # Usage
///
/// ```rust
/// use optional::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::{none, some, EmptyOptionalError, Optional};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use optional::{none, some, EmptyOptionalError, IntoIter, Iter, Optional};
