//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) at the heart of the crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element, plus [`collapse`]
//! - [`Orderable`]: Three-way comparison, plus the [`greatest`] family
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define a trait like Functor once and
//! implement it per container shape.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Sum`], [`Product`]: Numeric wrappers selecting a monoid operation
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use fpcore::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Collapsing with a Monoid
//!
//! ```rust
//! use fpcore::typeclass::{Sum, collapse};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3), Sum::new(4)];
//! assert_eq!(collapse(numbers), Sum::new(10));
//! ```
//!
//! ## Selecting the greatest element
//!
//! ```rust
//! use fpcore::typeclass::greatest_by;
//!
//! let winner = greatest_by(vec![3, 1, 4, 1, 5], |lhs, rhs| lhs.cmp(rhs));
//! assert_eq!(winner, Ok(5));
//! ```

mod functor;
mod higher;
mod monoid;
mod order;
mod semigroup;
mod wrappers;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::{Monoid, collapse};
pub use order::{EmptySequence, Orderable, greatest, greatest_by, greatest_by_key};
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
