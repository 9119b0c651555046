//! # Code Resolver — Total Name→Code Resolution
//!
//! Converts a guest's free-text place names into the authority's
//! nine-digit codes, applying the protocol's fallback semantics. The
//! resolver is pure and total: given any input string it always returns
//! a usable code, because a malformed file is worse than a best-effort
//! default.
//!
//! ## Fallback Semantics
//!
//! - Birth municipality of a domestic-born guest: table miss emits the
//!   fixed [`UNKNOWN_MUNICIPALITY_CODE`] sentinel — the protocol
//!   disallows blank domestic-location fields.
//! - Birth/citizenship country: table miss emits the configured default
//!   country's code, never blank or zero.
//! - Foreign-born guest: municipality and province spans are blanks
//!   (`None` here), never a sentinel.
//!
//! Every fallback is an explicit branch with a `tracing::warn!` hook
//! and an atomic counter, so data-quality regressions are observable
//! without weakening the always-produce-output guarantee.
//!
//! ## Ownership
//!
//! The resolver owns its tables: construct once at process start, share
//! read-only. All methods take `&self` and the counters are atomics, so
//! concurrent encodes need no coordination.

use std::sync::atomic::{AtomicU64, Ordering};

use schedina_core::GuestEntry;
use schedina_tables::{CountryTable, MunicipalityTable};
use serde::Serialize;

use crate::error::CodecError;

/// Sentinel code for a domestic birth municipality with no table entry.
pub const UNKNOWN_MUNICIPALITY_CODE: &str = "000000000";

/// Default country name for the bundled configuration. Deployments
/// serving a different market pass their own to [`CodeResolver::new`].
pub const DEFAULT_COUNTRY: &str = "ITALIA";

/// Snapshot of the resolver's fallback counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackCounts {
    /// Municipality lookups that fell back to the sentinel code.
    pub unknown_municipalities: u64,
    /// Country lookups that fell back to the default country code.
    pub unknown_countries: u64,
}

#[derive(Debug, Default)]
struct FallbackTally {
    unknown_municipalities: AtomicU64,
    unknown_countries: AtomicU64,
}

/// Total name→code resolver over injected reference tables.
#[derive(Debug)]
pub struct CodeResolver {
    countries: CountryTable,
    municipalities: MunicipalityTable,
    default_country_code: String,
    tally: FallbackTally,
}

impl CodeResolver {
    /// Build a resolver over explicit tables.
    ///
    /// The default country is resolved against the table once, here, so
    /// totality can never be lost at encoding time.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownDefaultCountry`] if the default
    /// country has no table entry.
    pub fn new(
        countries: CountryTable,
        municipalities: MunicipalityTable,
        default_country: &str,
    ) -> Result<Self, CodecError> {
        let default_country_code = countries
            .lookup(default_country)
            .ok_or_else(|| CodecError::UnknownDefaultCountry(default_country.to_string()))?
            .to_string();
        Ok(Self {
            countries,
            municipalities,
            default_country_code,
            tally: FallbackTally::default(),
        })
    }

    /// Build a resolver over the bundled tables with the bundled
    /// default country.
    pub fn with_bundled_tables() -> Result<Self, CodecError> {
        Self::new(
            CountryTable::bundled(),
            MunicipalityTable::bundled(),
            DEFAULT_COUNTRY,
        )
    }

    /// The code substituted when a country name has no table entry.
    pub fn default_country_code(&self) -> &str {
        &self.default_country_code
    }

    /// Resolve a country name to its nine-digit code. Total: a miss
    /// yields the default country's code.
    pub fn country_code(&self, name: &str) -> String {
        match self.countries.lookup(name) {
            Some(code) => code.to_string(),
            None => {
                self.tally.unknown_countries.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    country = name,
                    fallback = %self.default_country_code,
                    "country name not in reference table; substituting default country code"
                );
                self.default_country_code.clone()
            }
        }
    }

    /// Resolve a municipality name to its nine-digit code. Total: a
    /// miss yields the unknown-location sentinel.
    pub fn municipality_code(&self, name: &str) -> String {
        match self.municipalities.lookup(name) {
            Some(code) => code.to_string(),
            None => {
                self.tally
                    .unknown_municipalities
                    .fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    municipality = name,
                    fallback = UNKNOWN_MUNICIPALITY_CODE,
                    "municipality name not in reference table; substituting sentinel code"
                );
                UNKNOWN_MUNICIPALITY_CODE.to_string()
            }
        }
    }

    /// The comune-nascita value: the municipality code for domestic
    /// births, blank (`None`) for foreign-born guests.
    pub fn birth_municipality(&self, guest: &GuestEntry) -> Option<String> {
        if !guest.domestic_birth {
            return None;
        }
        Some(self.municipality_code(&guest.birth_place))
    }

    /// The provincia-nascita value: the sigla for domestic births,
    /// blank for foreign-born guests (and for domestic guests whose
    /// form omitted it — the validator warns about those).
    pub fn birth_province(&self, guest: &GuestEntry) -> Option<String> {
        if !guest.domestic_birth {
            return None;
        }
        guest
            .birth_province
            .as_ref()
            .map(|p| p.as_str().to_string())
    }

    /// The stato-nascita value. Always populated.
    pub fn birth_country(&self, guest: &GuestEntry) -> String {
        self.country_code(&guest.birth_country)
    }

    /// The cittadinanza value. Always populated.
    pub fn citizenship(&self, guest: &GuestEntry) -> String {
        self.country_code(&guest.citizenship)
    }

    /// The luogo-rilascio value: blank for roles without a document;
    /// otherwise the issuing place resolved through the municipality
    /// table for domestic guests and the country table for foreign
    /// ones.
    pub fn document_issuing_place(&self, guest: &GuestEntry) -> Option<String> {
        let document = guest.active_document()?;
        if guest.domestic_birth {
            Some(self.municipality_code(&document.issued_at))
        } else {
            Some(self.country_code(&document.issued_at))
        }
    }

    /// Snapshot the fallback counters for data-quality monitoring.
    pub fn fallbacks(&self) -> FallbackCounts {
        FallbackCounts {
            unknown_municipalities: self.tally.unknown_municipalities.load(Ordering::Relaxed),
            unknown_countries: self.tally.unknown_countries.load(Ordering::Relaxed),
        }
    }
}
