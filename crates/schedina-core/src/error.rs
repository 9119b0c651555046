//! # Error Types — Structured Error Hierarchy
//!
//! Defines the construction-time error type for the core domain model.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Note that *batch validation* failures are not errors in this sense:
//! the validator in `schedina-codec` collects every violation into a
//! report instead of returning early. `CoreError` covers only values
//! that are malformed at construction — an empty apartment identifier,
//! a province sigla that is not two letters.

use thiserror::Error;

/// Top-level error type for core domain-model construction.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Apartment identifier was empty or whitespace-only.
    #[error("apartment identifier must not be empty")]
    EmptyApartmentId,

    /// Province sigla did not match the two-letter format.
    #[error("province must be exactly two ASCII letters, got: {0:?}")]
    InvalidProvince(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
