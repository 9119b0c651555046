//! # Encoder Facade
//!
//! The single entry point external collaborators call. Runs the
//! validator; if the batch is invalid, returns the full diagnostic
//! report and does not attempt encoding. If valid, runs
//! resolver → formatter → assembler and returns the text.
//!
//! Validate fully, *then* encode — the ordering is the key design
//! decision: output is either completely correct or not produced at
//! all.

use schedina_core::GuestBatch;

use crate::assemble::assemble_batch;
use crate::error::CodecError;
use crate::resolve::{CodeResolver, FallbackCounts};
use crate::validate::{validate_batch, ValidationOptions, ValidationReport};

/// The guest-record encoder: validator, resolver, formatter, and
/// assembler behind one call.
///
/// Construct once (the reference tables load here) and share
/// read-only; `encode` is pure and side-effect-free apart from the
/// fallback counters, so concurrent calls need no coordination.
#[derive(Debug)]
pub struct Encoder {
    resolver: CodeResolver,
    options: ValidationOptions,
}

impl Encoder {
    /// Build an encoder over an explicit resolver and validation options.
    pub fn new(resolver: CodeResolver, options: ValidationOptions) -> Self {
        Self { resolver, options }
    }

    /// Build an encoder over the bundled reference tables.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the bundled default country is missing
    /// from the bundled table — a data-release defect caught at startup.
    pub fn with_bundled_tables(options: ValidationOptions) -> Result<Self, CodecError> {
        Ok(Self::new(CodeResolver::with_bundled_tables()?, options))
    }

    /// Validate a batch without encoding it.
    pub fn validate(&self, batch: &GuestBatch) -> ValidationReport {
        validate_batch(batch, &self.options)
    }

    /// Encode a batch into the authority's fixed-width text.
    ///
    /// Returns the complete text on success. On validation failure,
    /// returns the full report — every violation at once — and produces
    /// no output.
    pub fn encode(&self, batch: &GuestBatch) -> Result<String, ValidationReport> {
        let report = self.validate(batch);
        if !report.is_valid {
            return Err(report);
        }
        Ok(assemble_batch(batch, &self.resolver))
    }

    /// The resolver's fallback counters, for data-quality monitoring.
    pub fn fallbacks(&self) -> FallbackCounts {
        self.resolver.fallbacks()
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &CodeResolver {
        &self.resolver
    }
}
