//! Domain validation errors for core domain types.
//!
//! These errors are returned by the validating constructors (`Pair::parse`
//! and friends) when an identifier from the outside world does not match
//! the catalog shapes. Engine input problems (bad digit strings, empty
//! amounts) are never errors: strategies answer those with an empty slip.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A pair identifier matched neither the numeric nor the category shape.
    #[error("invalid pair identifier: {value:?}")]
    InvalidPair {
        /// The rejected identifier.
        value: String,
    },

    /// A category digit outside 0..=9.
    #[error("category digit must be 0-9, got {digit}")]
    InvalidCategoryDigit {
        /// The rejected digit.
        digit: u8,
    },
}
