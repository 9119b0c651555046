//! # Municipality Code Table
//!
//! Maps Italian municipality names to the authority's nine-digit
//! location codes. Only domestic birth places resolve through this
//! table — foreign-born guests get blank municipality spans, decided by
//! the code resolver, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize_name;

/// One (name, code, province) row of the municipality table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityEntry {
    /// Canonical municipality name, uppercase Italian.
    pub name: String,
    /// Nine-digit protocol code.
    pub code: String,
    /// Province sigla the municipality belongs to.
    pub province: String,
}

/// The municipality name→code table.
///
/// Same contract as [`crate::CountryTable`]: normalized exact lookup,
/// name-ordered enumeration, prefix search, no fuzzy matching.
#[derive(Debug, Clone)]
pub struct MunicipalityTable {
    by_name: BTreeMap<String, MunicipalityEntry>,
}

impl MunicipalityTable {
    /// Build a table from explicit entries.
    ///
    /// Entry names are normalized on insertion; a duplicate normalized
    /// name keeps the last entry.
    pub fn new(entries: impl IntoIterator<Item = MunicipalityEntry>) -> Self {
        let by_name = entries
            .into_iter()
            .map(|e| (normalize_name(&e.name), e))
            .collect();
        Self { by_name }
    }

    /// The bundled dataset from the authority's data release.
    pub fn bundled() -> Self {
        Self::new(crate::data::bundled_municipalities())
    }

    /// Look up the nine-digit code for a municipality name.
    ///
    /// Exact match on the normalized name; `None` on a miss.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.code.as_str())
    }

    /// Look up the full entry for a municipality name.
    pub fn get(&self, name: &str) -> Option<&MunicipalityEntry> {
        self.by_name.get(&normalize_name(name))
    }

    /// Iterate all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MunicipalityEntry> {
        self.by_name.values()
    }

    /// All entries whose normalized name starts with the given prefix,
    /// in name order.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&MunicipalityEntry> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> MunicipalityTable {
        MunicipalityTable::new([
            MunicipalityEntry {
                name: "ROMA".to_string(),
                code: "458100001".to_string(),
                province: "RM".to_string(),
            },
            MunicipalityEntry {
                name: "MILANO".to_string(),
                code: "415146001".to_string(),
                province: "MI".to_string(),
            },
        ])
    }

    #[test]
    fn lookup_exact_and_normalized() {
        let t = small_table();
        assert_eq!(t.lookup("ROMA"), Some("458100001"));
        assert_eq!(t.lookup(" roma "), Some("458100001"));
    }

    #[test]
    fn lookup_miss_is_none() {
        let t = small_table();
        assert_eq!(t.lookup("Nonexistentville"), None);
    }

    #[test]
    fn entry_carries_province() {
        let t = small_table();
        assert_eq!(t.get("Milano").map(|e| e.province.as_str()), Some("MI"));
    }

    #[test]
    fn search_prefix_matches() {
        let t = small_table();
        let hits = t.search_prefix("mi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "MILANO");
    }

    #[test]
    fn iter_in_name_order() {
        let t = small_table();
        let names: Vec<&str> = t.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["MILANO", "ROMA"]);
    }
}
