//! # Country Code Table
//!
//! Maps country names (as collected by the form layer, in Italian) to
//! the authority's nine-digit country codes. The bundled dataset covers
//! every country in the authority's data release, grouped by continent
//! in the data modules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize_name;

/// Continental grouping of the bundled country dataset.
///
/// Mirrors the grouping of the authority's data release; useful for
/// form-layer autocomplete sections, not consulted by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    Europa,
    AmericaDelNord,
    AmericaDelSud,
    Asia,
    Africa,
    Oceania,
}

impl Continent {
    /// Human-readable Italian label, matching the data release headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Europa => "Europa",
            Self::AmericaDelNord => "America del Nord",
            Self::AmericaDelSud => "America del Sud",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (name, code, continent) row of the country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Canonical country name, uppercase Italian.
    pub name: String,
    /// Nine-digit protocol code.
    pub code: String,
    /// Continental grouping.
    pub continent: Continent,
}

/// The country name→code table.
///
/// Entries are keyed by normalized name; enumeration and prefix search
/// iterate in lexicographic name order.
#[derive(Debug, Clone)]
pub struct CountryTable {
    by_name: BTreeMap<String, CountryEntry>,
}

impl CountryTable {
    /// Build a table from explicit entries.
    ///
    /// Entry names are normalized on insertion; a duplicate normalized
    /// name keeps the last entry, matching the append-only data-release
    /// model where later rows supersede earlier ones.
    pub fn new(entries: impl IntoIterator<Item = CountryEntry>) -> Self {
        let by_name = entries
            .into_iter()
            .map(|e| (normalize_name(&e.name), e))
            .collect();
        Self { by_name }
    }

    /// The bundled dataset from the authority's data release.
    pub fn bundled() -> Self {
        Self::new(crate::data::bundled_countries())
    }

    /// Look up the nine-digit code for a country name.
    ///
    /// Exact match on the normalized name; `None` on a miss.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.code.as_str())
    }

    /// Look up the full entry for a country name.
    pub fn get(&self, name: &str) -> Option<&CountryEntry> {
        self.by_name.get(&normalize_name(name))
    }

    /// Iterate all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryEntry> {
        self.by_name.values()
    }

    /// All entries whose normalized name starts with the given prefix,
    /// in name order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&CountryEntry> {
        let prefix = normalize_name(prefix);
        self.by_name
            .range(prefix.clone()..)
            .take_while(|(name, _)| name.starts_with(&prefix))
            .map(|(_, e)| e)
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
