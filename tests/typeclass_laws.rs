#![cfg(feature = "typeclass")]
//! Property-based tests for the type class laws of `Optional<T>`.
//!
//! - **Functor**: identity and composition
//! - **Monad**: left identity, right identity and associativity
//! - **Alternative**: identities and associativity
//! - **Semigroup / Monoid**: associativity and identity

use optional::typeclass::{
    Alternative, Applicative, Foldable, Functor, Monad, Monoid, Semigroup, Sum,
};
use optional::{none, some, Optional};
use proptest::prelude::*;
use rstest::rstest;

fn arb_optional_i32() -> impl Strategy<Value = Optional<i32>> {
    any::<Option<i32>>().prop_map(Optional::from)
}

fn arb_optional_sum() -> impl Strategy<Value = Optional<Sum<i64>>> {
    any::<Option<i32>>().prop_map(|value| Optional::from(value).map(|n| Sum(i64::from(n))))
}

fn alternative_empty() -> Optional<i32> {
    <Optional<i32> as Alternative>::empty()
}

fn monoid_empty() -> Optional<Sum<i64>> {
    <Optional<Sum<i64>> as Monoid>::empty()
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity_law(value in arb_optional_i32()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_functor_composition_law(value in arb_optional_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

fn checked_double(value: i32) -> Optional<i32> {
    value.checked_mul(2).into()
}

fn checked_increment(value: i32) -> Optional<i32> {
    value.checked_add(1).into()
}

proptest! {
    #[test]
    fn prop_monad_left_identity_law(value in any::<i32>()) {
        let lifted: Optional<i32> = <Optional<()>>::pure(value);
        prop_assert_eq!(lifted.and_then(checked_double), checked_double(value));
    }

    #[test]
    fn prop_monad_right_identity_law(value in arb_optional_i32()) {
        prop_assert_eq!(value.and_then(<Optional<()>>::pure), value);
    }

    #[test]
    fn prop_monad_associativity_law(value in arb_optional_i32()) {
        let left = value.and_then(checked_double).and_then(checked_increment);
        let right = value.and_then(|x| checked_double(x).and_then(checked_increment));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Alternative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_alternative_left_identity(value in arb_optional_i32()) {
        prop_assert_eq!(alternative_empty().alt(value), value);
    }

    #[test]
    fn prop_alternative_right_identity(value in arb_optional_i32()) {
        prop_assert_eq!(value.alt(alternative_empty()), value);
    }

    #[test]
    fn prop_alternative_associativity(
        x in arb_optional_i32(),
        y in arb_optional_i32(),
        z in arb_optional_i32()
    ) {
        prop_assert_eq!(x.alt(y).alt(z), x.alt(y.alt(z)));
    }

    #[test]
    fn prop_alt_agrees_with_or_else(x in arb_optional_i32(), y in arb_optional_i32()) {
        prop_assert_eq!(x.alt(y), x.or_else(y));
    }
}

// =============================================================================
// Semigroup and Monoid Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_semigroup_associativity(
        x in arb_optional_sum(),
        y in arb_optional_sum(),
        z in arb_optional_sum()
    ) {
        prop_assert_eq!(x.combine(y).combine(z), x.combine(y.combine(z)));
    }

    #[test]
    fn prop_monoid_identity(value in arb_optional_sum()) {
        prop_assert_eq!(monoid_empty().combine(value), value);
        prop_assert_eq!(value.combine(monoid_empty()), value);
    }

    #[test]
    fn prop_fold_map_agrees_with_fold(value in arb_optional_i32()) {
        let folded: Sum<i64> = value.fold_map(|n| Sum(i64::from(n)));
        prop_assert_eq!(folded.into_inner(), value.fold(|| 0, i64::from));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn guard_filters_like_filter() {
    let via_guard = some(4).and_then(|n| Optional::<()>::guard(n > 3).then(some(n)));
    assert_eq!(via_guard, some(4).filter(|&n| n > 3));
}

#[rstest]
fn map2_sums_present_values() {
    assert_eq!(some(20).map2(some(22), |a, b| a + b), some(42));
    assert_eq!(none::<i32>().map2(some(22), |a, b| a + b), none());
}

#[rstest]
fn combine_all_skips_empty_values() {
    let values = vec![some(Sum(1_i64)), none(), some(Sum(2))];
    assert_eq!(Optional::combine_all(values), some(Sum(3)));
}
