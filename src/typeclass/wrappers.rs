//! Numeric wrapper types for different algebraic operations.
//!
//! This module provides newtype wrappers that allow the same underlying type
//! to have different [`Semigroup`](super::Semigroup) and
//! [`Monoid`](super::Monoid) implementations. For example, integers can be
//! combined using addition (`Sum`) or multiplication (`Product`), and a
//! witness is selected simply by wrapping the value.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition-based semigroup/monoid (identity: 0)
//! - [`Product`]: Multiplication-based semigroup/monoid (identity: 1)

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// When used with `Semigroup`, `Sum(a).combine(Sum(b))` equals `Sum(a + b)`.
/// When used with `Monoid`, the identity element is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Monoid, Semigroup, Sum};
///
/// let a = Sum::new(3);
/// let b = Sum::new(5);
/// assert_eq!(a.combine(b), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Sum;
    ///
    /// let sum = Sum::new(42);
    /// assert_eq!(sum.into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// When used with `Semigroup`, `Product(a).combine(Product(b))` equals
/// `Product(a * b)`. When used with `Monoid`, the identity element is
/// `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Monoid, Product, Semigroup};
///
/// let a = Product::new(3);
/// let b = Product::new(5);
/// assert_eq!(a.combine(b), Product::new(15));
/// assert_eq!(Product::<i32>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Product;
    ///
    /// let product = Product::new(42);
    /// assert_eq!(product.into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
