//! Comparison-driven reductions - selecting the greatest element.
//!
//! This module provides a generic "pick the extreme element" operation
//! parameterized by a comparison strategy. Three strategies are supported:
//!
//! - [`greatest_by`]: an explicit comparator function
//! - [`greatest`]: the [`Orderable`] type class
//! - [`greatest_by_key`]: an adapter extracting an `Ord` key from each element
//!
//! All three fail with [`EmptySequence`] on empty input rather than inventing
//! a seed value, which has no sound answer for non-numeric or all-negative
//! element types.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::{EmptySequence, greatest_by};
//!
//! assert_eq!(greatest_by(vec![3, 1, 4, 1, 5], |lhs, rhs| lhs.cmp(rhs)), Ok(5));
//!
//! let empty: Vec<i32> = vec![];
//! assert_eq!(greatest_by(empty, |lhs, rhs| lhs.cmp(rhs)), Err(EmptySequence));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A type class for values with a three-way comparison.
///
/// Unlike `Ord`, this trait is meant for ad-hoc instances: a type picks one
/// comparison strategy (a `Person` comparing by age, say) without committing
/// to a total order for every other purpose.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fpcore::typeclass::{Orderable, greatest};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Orderable for Person {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.age.cmp(&other.age)
///     }
/// }
///
/// let people = vec![
///     Person { name: "Juan".to_string(), age: 23 },
///     Person { name: "Pablo".to_string(), age: 28 },
/// ];
/// let eldest = greatest(people).unwrap();
/// assert_eq!(eldest.name, "Pablo");
/// ```
pub trait Orderable {
    /// Compares `self` with `other`, returning the three-way result.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! orderable_via_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl Orderable for $type {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

orderable_via_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String);

// =============================================================================
// Error Type
// =============================================================================

/// The error returned when selecting an element from an empty sequence.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{EmptySequence, greatest};
///
/// let empty: Vec<i32> = vec![];
/// assert_eq!(greatest(empty), Err(EmptySequence));
/// assert_eq!(
///     EmptySequence.to_string(),
///     "cannot select the greatest element of an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequence;

impl fmt::Display for EmptySequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "cannot select the greatest element of an empty sequence"
        )
    }
}

impl std::error::Error for EmptySequence {}

// =============================================================================
// Greatest-Element Selection
// =============================================================================

/// Returns the greatest element according to an explicit comparator.
///
/// Performs a left fold keeping the running best element, replacing it only
/// on strict improvement (`compare(best, candidate)` returns
/// `Ordering::Less`). Ties therefore keep the earlier element.
///
/// The comparator must implement three-way semantics; no validation is
/// performed.
///
/// # Errors
///
/// Returns [`EmptySequence`] if `items` yields no elements.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::greatest_by;
///
/// let result = greatest_by(vec![3, 1, 4, 1, 5], |lhs, rhs| lhs.cmp(rhs));
/// assert_eq!(result, Ok(5));
/// ```
pub fn greatest_by<A, I, F>(items: I, compare: F) -> Result<A, EmptySequence>
where
    I: IntoIterator<Item = A>,
    F: Fn(&A, &A) -> Ordering,
{
    let mut iterator = items.into_iter();
    let first = iterator.next().ok_or(EmptySequence)?;

    Ok(iterator.fold(first, |best, candidate| {
        if compare(&best, &candidate) == Ordering::Less {
            candidate
        } else {
            best
        }
    }))
}

/// Returns the greatest element according to the type's [`Orderable`] instance.
///
/// # Errors
///
/// Returns [`EmptySequence`] if `items` yields no elements.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::greatest;
///
/// assert_eq!(greatest(vec![3, 1, 4, 1, 5]), Ok(5));
/// ```
pub fn greatest<A, I>(items: I) -> Result<A, EmptySequence>
where
    A: Orderable,
    I: IntoIterator<Item = A>,
{
    greatest_by(items, Orderable::compare)
}

/// Returns the greatest element according to a key extraction function.
///
/// This is the adapter form: it lets a caller order elements of a type it
/// does not control by projecting each one onto an `Ord` key.
///
/// # Errors
///
/// Returns [`EmptySequence`] if `items` yields no elements.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::greatest_by_key;
///
/// let words = vec!["hi", "hello", "hey"];
/// assert_eq!(greatest_by_key(words, |word| word.len()), Ok("hello"));
/// ```
pub fn greatest_by_key<A, I, K, F>(items: I, key: F) -> Result<A, EmptySequence>
where
    I: IntoIterator<Item = A>,
    K: Ord,
    F: Fn(&A) -> K,
{
    greatest_by(items, |lhs, rhs| key(lhs).cmp(&key(rhs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![3, 1, 4, 1, 5], 5)]
    #[case(vec![42], 42)]
    #[case(vec![-7, -3, -11], -3)]
    fn greatest_by_selects_maximum(#[case] items: Vec<i32>, #[case] expected: i32) {
        assert_eq!(greatest_by(items, |lhs, rhs| lhs.cmp(rhs)), Ok(expected));
    }

    #[rstest]
    fn greatest_by_empty_is_an_error() {
        let empty: Vec<i32> = vec![];
        assert_eq!(greatest_by(empty, |lhs, rhs| lhs.cmp(rhs)), Err(EmptySequence));
    }

    #[rstest]
    fn greatest_by_ties_keep_the_earlier_element() {
        let items = vec![(1, "first"), (1, "second"), (0, "third")];
        let result = greatest_by(items, |lhs, rhs| lhs.0.cmp(&rhs.0));
        assert_eq!(result, Ok((1, "first")));
    }

    #[rstest]
    fn greatest_uses_the_orderable_instance() {
        assert_eq!(greatest(vec![3_u64, 9, 6]), Ok(9));
        assert_eq!(
            greatest(vec!["b".to_string(), "a".to_string()]),
            Ok("b".to_string())
        );
    }

    #[rstest]
    fn greatest_by_key_adapts_unordered_types() {
        let words = vec!["hi", "hello", "hey"];
        assert_eq!(greatest_by_key(words, |word| word.len()), Ok("hello"));
    }

    #[rstest]
    fn empty_sequence_display() {
        assert_eq!(
            EmptySequence.to_string(),
            "cannot select the greatest element of an empty sequence"
        );
    }
}
