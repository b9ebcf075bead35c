//! Error types for the control structures.
//!
//! This module provides the error surfaced when a caller crosses the
//! boundary out of the [`Either`](super::Either) abstraction on a failure
//! value.

/// Represents an unwrap of an [`Either`](super::Either) holding a failure.
///
/// This error occurs only through
/// [`Either::get_or_throw`](super::Either::get_or_throw) and
/// [`Either::get_or_throw_with`](super::Either::get_or_throw_with), the
/// single sanctioned escape hatch from the `Either` abstraction. All other
/// operations on `Either` are total.
///
/// # Examples
///
/// ```rust
/// use fpcore::control::UnwrapOnFailure;
///
/// let error = UnwrapOnFailure {
///     message: "the price of the plate cannot be negative".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "the price of the plate cannot be negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapOnFailure {
    /// Human-readable description of the failed unwrap.
    pub message: String,
}

impl std::fmt::Display for UnwrapOnFailure {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.message)
    }
}

impl std::error::Error for UnwrapOnFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_the_message() {
        let error = UnwrapOnFailure {
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn implements_the_error_trait() {
        fn assert_error<E: std::error::Error>(_error: &E) {}
        assert_error(&UnwrapOnFailure {
            message: "boom".to_string(),
        });
    }
}
