#![cfg(all(feature = "typeclass", feature = "data"))]
//! Property-based tests for the Semigroup and Monoid laws.
//!
//! - Associativity: (a <> b) <> c == a <> (b <> c)
//! - Left Identity: zero <> a == a
//! - Right Identity: a <> zero == a
//!
//! Both instances are also MonadPlus, so `zero` must short-circuit `bind`.

use monadic_do::data::List;
use monadic_do::typeclass::{Monad, MonadPlus, Monoid, Semigroup};
use proptest::prelude::*;

fn option_strategy() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(any::<i32>())
}

fn list_strategy() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..6).prop_map(List::from)
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_associativity(
        a in option_strategy(),
        b in option_strategy(),
        c in option_strategy(),
    ) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    #[test]
    fn prop_option_left_identity(a in option_strategy()) {
        prop_assert_eq!(Option::zero().combine(a), a);
    }

    #[test]
    fn prop_option_right_identity(a in option_strategy()) {
        prop_assert_eq!(a.combine(Option::zero()), a);
    }

    #[test]
    fn prop_option_combine_all_is_first_present(
        options in prop::collection::vec(option_strategy(), 0..6),
    ) {
        let expected = options.iter().find_map(|option| *option);
        prop_assert_eq!(Option::first_of(options), expected);
    }

    #[test]
    fn prop_option_zero_short_circuits(value: i32) {
        let zero: Option<i32> = Option::zero();
        prop_assert_eq!(zero.bind(move |n| Some(n.wrapping_add(value))), None);
        prop_assert!(zero.is_zero());
    }
}

// =============================================================================
// List
// =============================================================================

proptest! {
    #[test]
    fn prop_list_associativity(
        a in list_strategy(),
        b in list_strategy(),
        c in list_strategy(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_list_left_identity(a in list_strategy()) {
        prop_assert_eq!(List::zero().combine(a.clone()), a);
    }

    #[test]
    fn prop_list_right_identity(a in list_strategy()) {
        prop_assert_eq!(a.clone().combine(List::zero()), a);
    }

    #[test]
    fn prop_list_bit_or_is_combine(a in list_strategy(), b in list_strategy()) {
        prop_assert_eq!(a.clone() | b.clone(), a.combine(b));
    }

    #[test]
    fn prop_list_combine_all_preserves_length(
        lists in prop::collection::vec(list_strategy(), 0..5),
    ) {
        let expected: usize = lists.iter().map(List::len).sum();
        prop_assert_eq!(List::combine_all(lists).len(), expected);
    }

    #[test]
    fn prop_list_zero_short_circuits(value: i32) {
        let zero: List<i32> = List::zero();
        prop_assert!(zero.clone().bind(move |n| List::singleton(n ^ value)).is_empty());
        prop_assert!(zero.is_zero());
    }
}
