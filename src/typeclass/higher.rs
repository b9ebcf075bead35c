//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is what lets a type
//! class like [`Functor`](super::Functor) be declared once and implemented
//! per container shape.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we cannot
//! write a trait that abstracts over `Option<_>` and `Either<L, _>` as type
//! constructors. This module uses GAT to work around this limitation: each
//! container shape supplies one witness implementation of [`TypeConstructor`],
//! and generic code dispatches through that witness.
//!
//! # Example
//!
//! ```rust
//! use fpcore::typeclass::TypeConstructor;
//!
//! // Option implements TypeConstructor
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Result<_, E>`, or [`Either<L, _>`](crate::control::Either).
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use fpcore::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Option<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Option<i32>`, `WithType<String>` would be `Option<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
