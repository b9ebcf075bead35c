//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value(s) while preserving the structure.
//!
//! A `Functor` is one of the fundamental abstractions in functional programming,
//! allowing you to transform the contents of a container without unwrapping it
//! manually. The generic machinery performs no logic of its own: each container
//! shape supplies its own witness implementation, and all behavior lives there.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::Functor;
//!
//! // Option as a Functor
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let none_value: Option<i32> = None;
//! let transformed: Option<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s) inside
/// a container while preserving the container's structure. Implementing this
/// trait is how a container shape provides its witness: calling code stays
/// polymorphic over "any shape with a Functor witness", even when the
/// container type is not under the caller's control.
///
/// # Laws
///
/// ## Identity Law
///
/// Mapping the identity function returns an equivalent functor:
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// Mapping composed functions is equivalent to mapping them in sequence:
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// This is the primary operation of the Functor type class. It takes a
    /// function that transforms the inner type and returns a new functor
    /// with the transformed value(s).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// This method is useful when you want to transform the functor's contents
    /// without consuming it, or when the inner type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    ///
    /// let y: Option<i32> = None;
    /// assert_eq!(y.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// This is useful when you only care about the structure of the functor
    /// and not the value it contains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}
