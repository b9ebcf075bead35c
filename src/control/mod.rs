//! Control structures for functional programming.
//!
//! This module provides the containers that carry a computation's outcome:
//!
//! - [`Either`]: A failure-or-success value with safe accessors
//! - [`UnwrapOnFailure`]: The error surfaced by the unsafe unwrap boundary
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Either;
//!
//! fn validate(name: &str) -> Either<String, String> {
//!     if name.is_empty() {
//!         Either::failure("the name cannot be empty".to_string())
//!     } else {
//!         Either::success(name.to_string())
//!     }
//! }
//!
//! let shouted = validate("plate").map(|name| name.to_uppercase());
//! assert_eq!(shouted.get_or_else(String::new()), "PLATE");
//! ```

mod either;
mod error;

pub use either::Either;
pub use error::UnwrapOnFailure;
