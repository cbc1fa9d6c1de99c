//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] recovers that ability: an implementing type
//! names its current element type and the same constructor applied to any
//! other type.
//!
//! # Example
//!
//! ```rust
//! use optional::typeclass::TypeConstructor;
//! use optional::{none, some, Optional};
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let result: Optional<String> = emptied(some(42));
//! assert_eq!(result, none());
//! ```

use crate::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn nested_optional_is_a_type_constructor() {
        fn assert_inner<T: TypeConstructor<Inner = Optional<i32>>>() {}
        assert_inner::<Optional<Optional<i32>>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Optional<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_optional_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_optional_bool::<Step2>();

        let value: Step2 = Optional::Some(true);
        assert!(value.is_defined());
    }
}
