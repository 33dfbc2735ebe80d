//! Error handling for the eagleport model
//!
//! Validated value types (unsigned/positive lengths, names) reject
//! out-of-range input through these errors instead of panicking.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Model error type
///
/// Returned by the validating constructors of the value types in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A length that must not be negative was negative
    #[error("Length must not be negative: {nm}nm")]
    NegativeLength {
        /// The offending value in nanometers.
        nm: i64,
    },

    /// A length that must be greater than zero was zero or negative
    #[error("Length must be greater than zero: {nm}nm")]
    NonPositiveLength {
        /// The offending value in nanometers.
        nm: i64,
    },

    /// A name was empty where a non-empty name is required
    #[error("Name must not be empty")]
    EmptyName,

    /// A name had leading or trailing whitespace
    #[error("Name must not start or end with whitespace: {name:?}")]
    UntrimmedName {
        /// The rejected name.
        name: String,
    },

    /// An identifier contained whitespace
    #[error("Identifier must not contain whitespace: {name:?}")]
    WhitespaceInIdentifier {
        /// The rejected identifier.
        name: String,
    },
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, Error>;
