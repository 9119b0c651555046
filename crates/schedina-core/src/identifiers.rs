//! # Identifier Newtypes
//!
//! Newtypes for the apartment identifier and the Italian province sigla.
//! These are validated at construction time — an `ApartmentId` is never
//! empty, a `Province` is always exactly two uppercase ASCII letters.
//!
//! ## Validation
//!
//! Both types implement a validating `Deserialize`, so a batch document
//! with a blank apartment id or a malformed province is rejected at the
//! deserialization boundary, before it can reach the encoder.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// -- Validating Deserialize for ApartmentId -----------------------------------

impl<'de> Deserialize<'de> for ApartmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// The accommodation identifier assigned by the receiving authority,
/// e.g. `"000123"` for a registered apartment.
///
/// # Validation
///
/// Must be a non-empty string after trimming. No further format
/// restrictions are imposed because identifier formats vary across
/// questura registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApartmentId(String);

impl ApartmentId {
    /// Create an apartment identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyApartmentId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyApartmentId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -- Validating Deserialize for Province --------------------------------------

impl<'de> Deserialize<'de> for Province {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// An Italian province sigla (`"RM"`, `"MI"`, `"BO"`, …).
///
/// Stored uppercase. Only meaningful for guests born in Italy; the
/// encoder renders it into the two-character provincia-nascita span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Province(String);

impl Province {
    /// Create a province sigla, validating the two-letter format.
    ///
    /// Lowercase input is accepted and folded to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProvince`] unless the input is exactly
    /// two ASCII letters.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        let trimmed = value.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidProvince(value.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the uppercase sigla.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apartment_id_valid() {
        let id = ApartmentId::new("000123").unwrap();
        assert_eq!(id.as_str(), "000123");
    }

    #[test]
    fn apartment_id_trims() {
        let id = ApartmentId::new("  000123 ").unwrap();
        assert_eq!(id.as_str(), "000123");
    }

    #[test]
    fn apartment_id_rejects_empty() {
        assert!(ApartmentId::new("").is_err());
        assert!(ApartmentId::new("   ").is_err());
    }

    #[test]
    fn apartment_id_display() {
        let id = ApartmentId::new("APT-9").unwrap();
        assert_eq!(format!("{id}"), "APT-9");
    }

    #[test]
    fn apartment_id_serde_rejects_blank() {
        let err = serde_json::from_str::<ApartmentId>("\"  \"");
        assert!(err.is_err());
    }

    #[test]
    fn apartment_id_serde_roundtrip() {
        let id = ApartmentId::new("000123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let deser: ApartmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deser);
    }

    #[test]
    fn province_valid() {
        let p = Province::new("RM").unwrap();
        assert_eq!(p.as_str(), "RM");
    }

    #[test]
    fn province_folds_uppercase() {
        let p = Province::new("mi").unwrap();
        assert_eq!(p.as_str(), "MI");
    }

    #[test]
    fn province_rejects_bad_length() {
        assert!(Province::new("ROM").is_err());
        assert!(Province::new("R").is_err());
        assert!(Province::new("").is_err());
    }

    #[test]
    fn province_rejects_non_letters() {
        assert!(Province::new("R1").is_err());
        assert!(Province::new("12").is_err());
    }

    #[test]
    fn province_serde_roundtrip() {
        let p = Province::new("BO").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let deser: Province = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deser);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn apartment_id_accepts_exactly_nonblank_input(s in ".{0,40}") {
                match ApartmentId::new(s.clone()) {
                    Ok(id) => prop_assert_eq!(id.as_str(), s.trim()),
                    Err(_) => prop_assert!(s.trim().is_empty()),
                }
            }

            #[test]
            fn province_accepts_exactly_two_letters(s in ".{0,6}") {
                let trimmed = s.trim();
                let well_formed =
                    trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic());
                match Province::new(&s) {
                    Ok(p) => {
                        prop_assert!(well_formed);
                        prop_assert_eq!(p.as_str(), trimmed.to_ascii_uppercase());
                    }
                    Err(_) => prop_assert!(!well_formed),
                }
            }
        }
    }
}
