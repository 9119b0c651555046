//! # schedina-tables — Reference Code Tables
//!
//! The receiving authority's record layout does not carry place *names*:
//! birth municipality, birth country, citizenship, and document issuing
//! place are all fixed nine-character numeric codes drawn from the
//! authority's reference datasets. This crate bundles those datasets and
//! exposes them as constructed, injectable table values.
//!
//! ## Lookup Contract
//!
//! - Exact match on the normalized (trimmed, uppercased) name. No fuzzy
//!   matching — an unrecognized name surfaces as `None`, and the code
//!   resolver in `schedina-codec` owns the fallback decision.
//! - A lookup miss is not an error. It returns `None`.
//! - Tables are enumerable in name order and support prefix search, for
//!   form-layer autocomplete.
//!
//! ## Ownership
//!
//! Tables are plain values constructed once (typically at process start
//! via [`CountryTable::bundled`] / [`MunicipalityTable::bundled`]) and
//! shared read-only. Nothing in this crate is a process-wide singleton,
//! so tests inject small fake tables without touching global state.
//!
//! The bundled datasets track the authority's data releases; updating
//! them means editing the data modules, never runtime mutation.

pub mod country;
pub mod municipality;

mod data;

pub use country::{Continent, CountryEntry, CountryTable};
pub use municipality::{MunicipalityEntry, MunicipalityTable};

/// Normalize a free-text place name for table lookup: trim surrounding
/// whitespace and fold to uppercase.
///
/// Both table keys and query strings flow through this, so `"Roma"`,
/// `" roma "`, and `"ROMA"` all address the same entry.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_name("  Roma "), "ROMA");
        assert_eq!(normalize_name("san marino"), "SAN MARINO");
        assert_eq!(normalize_name("ROMA"), "ROMA");
    }

    #[test]
    fn normalize_handles_accents() {
        assert_eq!(normalize_name("Forlì"), "FORLÌ");
    }

    #[test]
    fn normalize_empty_stays_empty() {
        assert_eq!(normalize_name("   "), "");
    }
}
