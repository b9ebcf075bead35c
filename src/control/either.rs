//! Either type - a failure-or-success container.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Failure(L)` or a `Success(R)`. It is the crate's
//! rendering of sum-type error handling: functions never succeed or fail,
//! they always return the same `Either` for the same input.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Either;
//!
//! // Creating Either values
//! let failure: Either<String, i32> = Either::failure("error".to_string());
//! let success: Either<String, i32> = Either::success(42);
//!
//! // Using fold to handle both cases
//! let report = success.fold(
//!     |error| format!("failed: {error}"),
//!     |value| format!("got {value}"),
//! );
//! assert_eq!(report, "got 42");
//! ```

use std::fmt;

use crate::control::error::UnwrapOnFailure;
use crate::typeclass::{Functor, TypeConstructor};

/// A value that is either a failure or a success.
///
/// `Either<L, R>` holds exactly one value at any time: a `Failure(L)` or a
/// `Success(R)`. The tag is fixed at construction; no operation mutates it.
/// Domain failures travel as `Failure` payloads and are never thrown - the
/// only panicking operations are the explicitly unsafe
/// [`get_or_throw`](Either::get_or_throw) family, intended for the boundary
/// where a program leaves the pure world.
///
/// # Type Parameters
///
/// * `L` - The type of the failure value
/// * `R` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use fpcore::control::Either;
///
/// let success: Either<String, i32> = Either::success(42);
/// let failure: Either<String, i32> = Either::failure("error".to_string());
///
/// // Map over the success value
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Either::success(84));
///
/// // Failures pass through unchanged
/// let still_failed = failure.map(|x| x * 2);
/// assert!(still_failed.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant, holding one value of type `L`.
    Failure(L),
    /// The success variant, holding one value of type `R`.
    Success(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a failure-tagged instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::failure("bad input");
    /// assert!(value.is_failure());
    /// ```
    #[inline]
    pub const fn failure(value: L) -> Self {
        Self::Failure(value)
    }

    /// Creates a success-tagged instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::success(42);
    /// assert!(value.is_success());
    /// ```
    #[inline]
    pub const fn success(value: R) -> Self {
        Self::Success(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert!(failure.is_failure());
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// assert!(success.is_success());
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two handlers.
    ///
    /// This is "pattern matching as a function": exactly one handler runs,
    /// receiving the original payload. The match is exhaustive over both
    /// variants with no wildcard arm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// let result = failure.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// let result = success.fold(|x: i32| x.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Failure(value) => on_failure(value),
            Self::Success(value) => on_success(value),
        }
    }

    // =========================================================================
    // Safe Extraction
    // =========================================================================

    /// Returns the success value, or `default` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<String, i32> = Either::success(42);
    /// assert_eq!(success.get_or_else(0), 42);
    ///
    /// let failure: Either<String, i32> = Either::failure("error".to_string());
    /// assert_eq!(failure.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.fold(|_| default, |value| value)
    }

    /// Converts into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Success(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// assert_eq!(success.into_success(), Some("hello".to_string()));
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert_eq!(failure.into_success(), None);
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<R> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Converts into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Failure(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert_eq!(failure.into_failure(), Some(42));
    ///
    /// let success: Either<i32, String> = Either::success("hello".to_string());
    /// assert_eq!(success.into_failure(), None);
    /// ```
    #[inline]
    pub fn into_failure(self) -> Option<L> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&R> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&L> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// If this is `Success(r)`, returns `Success(function(r))`.
    /// If this is `Failure(l)`, returns `Failure(l)` unchanged.
    ///
    /// This is the success-biased convenience form of the
    /// [`Functor`](crate::typeclass::Functor) witness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<String, i32> = Either::success(5);
    /// assert_eq!(success.map(|x| x * 2), Either::success(10));
    ///
    /// let failure: Either<String, i32> = Either::failure("error".to_string());
    /// let result = failure.map(|x| x * 2);
    /// assert_eq!(result, Either::failure("error".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Failure(value) => Either::Failure(value),
            Self::Success(value) => Either::Success(function(value)),
        }
    }

    /// Applies a function to the failure value if present.
    ///
    /// If this is `Failure(l)`, returns `Failure(function(l))`.
    /// If this is `Success(r)`, returns `Success(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert_eq!(failure.map_failure(|x| x * 2), Either::failure(84));
    /// ```
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Failure(value) => Either::Failure(function(value)),
            Self::Success(value) => Either::Success(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Failure and Success variants.
    ///
    /// `Failure(l)` becomes `Success(l)`, and `Success(r)` becomes `Failure(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::failure(42);
    /// assert_eq!(failure.swap(), Either::success(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Failure(value) => Either::Success(value),
            Self::Success(value) => Either::Failure(value),
        }
    }

    // =========================================================================
    // Unsafe Boundary Operations
    // =========================================================================

    /// Returns the success value, panicking with a custom message on failure.
    ///
    /// This is part of the single sanctioned escape hatch from the `Either`
    /// abstraction, intended only for the boundary where unsafe operations
    /// are permitted. The panic message is the given message, carried as an
    /// [`UnwrapOnFailure`].
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<String, i32> = Either::success(42);
    /// assert_eq!(success.get_or_throw_with("expected a validated value"), 42);
    /// ```
    #[inline]
    pub fn get_or_throw_with(self, message: &str) -> R {
        self.fold(
            |_| {
                let error = UnwrapOnFailure {
                    message: message.to_string(),
                };
                panic!("{error}")
            },
            |value| value,
        )
    }
}

impl<L: fmt::Debug, R> Either<L, R> {
    /// Returns the success value, panicking on failure.
    ///
    /// This is part of the single sanctioned escape hatch from the `Either`
    /// abstraction, intended only for the boundary where unsafe operations
    /// are permitted. The panic message is an [`UnwrapOnFailure`] embedding
    /// the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<String, i32> = Either::success(42);
    /// assert_eq!(success.get_or_throw(), 42);
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> R {
        self.fold(
            |failure| {
                let error = UnwrapOnFailure {
                    message: format!(
                        "called `Either::get_or_throw()` on a failure value: {failure:?}"
                    ),
                };
                panic!("{error}")
            },
            |value| value,
        )
    }
}

// =============================================================================
// Typeclass Witnesses
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

/// Either is a functor over its success value.
///
/// `fmap_ref` requires `L: Clone` to rebuild the failure side without
/// consuming it.
impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Failure(value) => Either::Failure(value.clone()),
            Self::Success(value) => Either::Success(function(value)),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure(value) => formatter.debug_tuple("Failure").field(value).finish(),
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Success(r)`, and `Err(e)` becomes `Failure(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::success(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Success(r)` becomes `Ok(r)`, and `Failure(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let success: Either<String, i32> = Either::success(42);
    /// let result: Result<i32, String> = success.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Failure(value) => Err(value),
            Either::Success(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn failure_construction() {
        let value: Either<i32, String> = Either::failure(42);
        assert!(value.is_failure());
        assert!(!value.is_success());
    }

    #[rstest]
    fn success_construction() {
        let value: Either<i32, String> = Either::success("hello".to_string());
        assert!(value.is_success());
        assert!(!value.is_failure());
    }

    #[rstest]
    fn fold_runs_exactly_one_handler() {
        let success: Either<i32, i32> = Either::success(2);
        assert_eq!(success.fold(|x| x - 1, |x| x + 1), 3);

        let failure: Either<i32, i32> = Either::failure(2);
        assert_eq!(failure.fold(|x| x - 1, |x| x + 1), 1);
    }

    #[rstest]
    fn get_or_throw_returns_success_value() {
        let success: Either<String, i32> = Either::success(42);
        assert_eq!(success.get_or_throw(), 42);
    }

    #[rstest]
    #[should_panic(expected = "on a failure value")]
    fn get_or_throw_panics_on_failure() {
        let failure: Either<String, i32> = Either::failure("bad".to_string());
        let _ = failure.get_or_throw();
    }

    #[rstest]
    #[should_panic(expected = "custom message")]
    fn get_or_throw_with_uses_the_given_message() {
        let failure: Either<String, i32> = Either::failure("bad".to_string());
        let _ = failure.get_or_throw_with("custom message");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn debug_output_names_the_variant() {
        let failure: Either<i32, String> = Either::failure(42);
        assert_eq!(format!("{failure:?}"), "Failure(42)");

        let success: Either<i32, String> = Either::success("hi".to_string());
        assert_eq!(format!("{success:?}"), "Success(\"hi\")");
    }

    #[rstest]
    fn fmap_ref_does_not_consume() {
        let success: Either<String, i32> = Either::success(5);
        let doubled = success.fmap_ref(|x| x * 2);
        assert_eq!(doubled, Either::success(10));
        assert_eq!(success, Either::success(5));
    }
}
