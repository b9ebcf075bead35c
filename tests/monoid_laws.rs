//! Property-based tests for Semigroup/Monoid laws and `collapse`.
//!
//! Verified laws:
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Left/Right Identity**: `empty.combine(a) == a == a.combine(empty)`
//! - **Collapse**: left fold from the identity, returning it exactly for
//!   empty input.
//!
//! Numeric inputs are range-limited so addition and multiplication stay in
//! range; the laws themselves do not depend on magnitude.

#![cfg(feature = "typeclass")]

use fpcore::typeclass::{Monoid, Product, Semigroup, Sum, collapse};
use proptest::prelude::*;

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    /// Associativity for the additive monoid
    #[test]
    fn prop_sum_combine_is_associative(
        a in -10_000_i64..10_000,
        b in -10_000_i64..10_000,
        c in -10_000_i64..10_000,
    ) {
        let left = Sum::new(a).combine(Sum::new(b)).combine(Sum::new(c));
        let right = Sum::new(a).combine(Sum::new(b).combine(Sum::new(c)));
        prop_assert_eq!(left, right);
    }

    /// Associativity for the multiplicative monoid
    #[test]
    fn prop_product_combine_is_associative(
        a in -100_i64..100,
        b in -100_i64..100,
        c in -100_i64..100,
    ) {
        let left = Product::new(a).combine(Product::new(b)).combine(Product::new(c));
        let right = Product::new(a).combine(Product::new(b).combine(Product::new(c)));
        prop_assert_eq!(left, right);
    }

    /// Associativity for string concatenation
    #[test]
    fn prop_string_combine_is_associative(
        a in any::<String>(),
        b in any::<String>(),
        c in any::<String>(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    /// Two-sided identity for the additive monoid
    #[test]
    fn prop_sum_empty_is_identity(a in -10_000_i64..10_000) {
        let value = Sum::new(a);
        prop_assert_eq!(Sum::empty().combine(value), value);
        prop_assert_eq!(value.combine(Sum::empty()), value);
    }

    /// Two-sided identity for the multiplicative monoid
    #[test]
    fn prop_product_empty_is_identity(a in -10_000_i64..10_000) {
        let value = Product::new(a);
        prop_assert_eq!(Product::empty().combine(value), value);
        prop_assert_eq!(value.combine(Product::empty()), value);
    }

    /// Two-sided identity for string concatenation
    #[test]
    fn prop_string_empty_is_identity(a in any::<String>()) {
        prop_assert_eq!(String::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(String::empty()), a);
    }
}

// =============================================================================
// Collapse
// =============================================================================

proptest! {
    /// Collapsing sums agrees with the standard library fold
    #[test]
    fn prop_collapse_sum_agrees_with_fold(values in prop::collection::vec(-1_000_i64..1_000, 0..50)) {
        let expected: i64 = values.iter().sum();
        let collapsed: Sum<i64> = collapse(values.into_iter().map(Sum::new));
        prop_assert_eq!(collapsed, Sum::new(expected));
    }

    /// Collapsing products agrees with the standard library fold
    #[test]
    fn prop_collapse_product_agrees_with_fold(values in prop::collection::vec(-4_i64..=4, 0..8)) {
        let expected: i64 = values.iter().product();
        let collapsed: Product<i64> = collapse(values.into_iter().map(Product::new));
        prop_assert_eq!(collapsed, Product::new(expected));
    }

    /// Collapsing strings preserves contents and order
    #[test]
    fn prop_collapse_string_concatenates_in_order(
        values in prop::collection::vec(any::<String>(), 0..10),
    ) {
        let expected: String = values.concat();
        prop_assert_eq!(collapse(values), expected);
    }
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn collapse_sum_example() {
    let values = vec![Sum::new(1), Sum::new(2), Sum::new(3), Sum::new(4)];
    assert_eq!(collapse(values), Sum::new(10));
}

#[test]
fn collapse_product_example() {
    let values = vec![Product::new(1), Product::new(2), Product::new(3), Product::new(4)];
    assert_eq!(collapse(values), Product::new(24));
}

#[test]
fn collapse_string_example() {
    let values = vec![
        String::from("Hello"),
        String::from(", "),
        String::from("world"),
        String::from("!"),
    ];
    assert_eq!(collapse(values), "Hello, world!");
}

#[test]
fn collapse_empty_returns_the_identity_exactly() {
    assert_eq!(collapse(Vec::<Sum<i32>>::new()), Sum::new(0));
    assert_eq!(collapse(Vec::<Product<i32>>::new()), Product::new(1));
    assert_eq!(collapse(Vec::<String>::new()), String::new());
}
