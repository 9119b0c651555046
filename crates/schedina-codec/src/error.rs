//! # Codec Construction Errors
//!
//! Errors that can occur while wiring the engine together — not while
//! encoding. Encoding a validated batch cannot fail (the resolver is
//! total and the validator has rejected anything that would not fit),
//! and validation failures travel as a
//! [`ValidationReport`](crate::ValidationReport), not as an error type.

use thiserror::Error;

/// Error constructing the codec's resolver or encoder.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The configured default country is missing from the country table,
    /// so the resolver would have no fallback code to guarantee totality
    /// with.
    #[error("default country {0:?} is not present in the country table")]
    UnknownDefaultCountry(String),
}
