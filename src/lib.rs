//! # fpcore
//!
//! A minimal functional programming core for Rust.
//!
//! ## Overview
//!
//! This library provides a small set of reusable functional abstractions:
//!
//! - **Either**: A failure-or-success container that forces explicit handling
//!   of both outcomes.
//! - **Semigroup / Monoid**: Associative combination with an identity
//!   element, used to collapse sequences.
//! - **Functor**: A law-abiding `fmap` over container shapes, emulated with
//!   Generic Associated Types.
//! - **Ordering reductions**: Generic greatest-element selection driven by a
//!   comparator, an [`Orderable`](typeclass::Orderable) instance, or a key
//!   extraction function.
//!
//! Domain failures are represented as data ([`Either::Failure`](control::Either::Failure)),
//! never as panics. The single sanctioned escape hatch is
//! [`Either::get_or_throw`](control::Either::get_or_throw), intended for the
//! boundary where a program leaves the pure world.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Semigroup, Monoid, Orderable)
//! - `control`: The `Either` container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpcore::prelude::*;
//!
//! fn parse_age(input: &str) -> Either<String, u32> {
//!     input
//!         .parse()
//!         .map_or_else(|_| Either::failure(format!("not a number: {input}")), Either::success)
//! }
//!
//! let age = parse_age("42").map(|n| n + 1);
//! assert_eq!(age.get_or_else(0), 43);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpcore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
