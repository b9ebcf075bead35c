//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. In other words, a type `T`
//! is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! The identity element is what makes [`collapse`] total: an empty sequence
//! collapses to `empty` rather than needing a seed value.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::{Monoid, Semigroup, collapse};
//!
//! // String monoid with empty string as identity
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! // Collapsing a sequence of strings
//! let parts = vec![
//!     String::from("Hello"),
//!     String::from(", "),
//!     String::from("world"),
//!     String::from("!"),
//! ];
//! assert_eq!(collapse(parts), "Hello, world!");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Monoid, Semigroup};
///
/// // Combining with empty yields the original value
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// The identity element satisfies:
    /// - `Self::empty().combine(a) == a` for all `a`
    /// - `a.combine(Self::empty()) == a` for all `a`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;
}

/// Collapses a sequence of monoid values into one.
///
/// Performs a left fold over `items` starting from the identity element,
/// combining each element in sequence order. An empty sequence collapses to
/// `A::empty()` exactly - this is why the operation requires a monoid rather
/// than a bare semigroup, whose seedless reduction
/// ([`Semigroup::reduce_all`]) has no answer for empty input.
///
/// The result depends only on the contents and order of `items` and the
/// monoid instance: two calls with equal inputs produce equal results.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Product, Sum, collapse};
///
/// let sum = collapse(vec![Sum::new(1), Sum::new(2), Sum::new(3), Sum::new(4)]);
/// assert_eq!(sum, Sum::new(10));
///
/// let product = collapse(vec![Product::new(1), Product::new(2), Product::new(3), Product::new(4)]);
/// assert_eq!(product, Product::new(24));
///
/// let empty: Vec<Sum<i32>> = vec![];
/// assert_eq!(collapse(empty), Sum::new(0));
/// ```
pub fn collapse<A, I>(items: I) -> A
where
    A: Monoid,
    I: IntoIterator<Item = A>,
{
    items
        .into_iter()
        .fold(A::empty(), |accumulator, element| {
            accumulator.combine(element)
        })
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Product forms a monoid under multiplication with 1 as the identity.
///
/// Implemented per numeric type since `Default` yields 0, not 1.
macro_rules! product_monoid {
    ($($type:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$type> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(
    i8 => 1,
    i16 => 1,
    i32 => 1,
    i64 => 1,
    i128 => 1,
    isize => 1,
    u8 => 1,
    u16 => 1,
    u32 => 1,
    u64 => 1,
    u128 => 1,
    usize => 1,
    f32 => 1.0,
    f64 => 1.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Identity Elements
    // =========================================================================

    #[rstest]
    fn string_empty_is_identity() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn numeric_identities() {
        assert_eq!(Sum::<i32>::empty(), Sum::new(0));
        assert_eq!(Product::<i32>::empty(), Product::new(1));
        assert_eq!(Product::<f64>::empty(), Product::new(1.0));
    }

    // =========================================================================
    // Collapse
    // =========================================================================

    #[rstest]
    fn collapse_sums_a_sequence() {
        let values = vec![Sum::new(1), Sum::new(2), Sum::new(3), Sum::new(4)];
        assert_eq!(collapse(values), Sum::new(10));
    }

    #[rstest]
    fn collapse_multiplies_a_sequence() {
        let values = vec![Product::new(1), Product::new(2), Product::new(3), Product::new(4)];
        assert_eq!(collapse(values), Product::new(24));
    }

    #[rstest]
    fn collapse_concatenates_strings() {
        let values = vec![
            String::from("Hello"),
            String::from(", "),
            String::from("world"),
            String::from("!"),
        ];
        assert_eq!(collapse(values), "Hello, world!");
    }

    #[rstest]
    fn collapse_empty_returns_identity() {
        let empty: Vec<Sum<i32>> = vec![];
        assert_eq!(collapse(empty), Sum::empty());

        let empty: Vec<String> = vec![];
        assert_eq!(collapse(empty), String::empty());
    }

    #[rstest]
    fn collapse_does_not_depend_on_call_site() {
        let values = || vec![Sum::new(7), Sum::new(-2), Sum::new(5)];
        assert_eq!(collapse(values()), collapse(values()));
    }
}
