//! # Bundled Reference Datasets
//!
//! The authority's data-release rows, one module per continent for the
//! country table and one per macro-area for the municipality table.
//! Rows are plain `(name, code)` / `(name, code, province)` tuples;
//! this module assembles them into owned entries for the table types.
//!
//! Updating a data release means editing the row modules below —
//! nothing else in the workspace changes.

mod africa;
mod americhe;
mod asia;
mod comuni_centro;
mod comuni_nord;
mod comuni_sud;
mod europa;
mod oceania;

use crate::country::{Continent, CountryEntry};
use crate::municipality::MunicipalityEntry;

/// All bundled country rows as owned entries, in data-release order.
pub(crate) fn bundled_countries() -> Vec<CountryEntry> {
    let regions: [(&[(&str, &str)], Continent); 6] = [
        (europa::EUROPA, Continent::Europa),
        (americhe::AMERICA_DEL_NORD, Continent::AmericaDelNord),
        (americhe::AMERICA_DEL_SUD, Continent::AmericaDelSud),
        (asia::ASIA, Continent::Asia),
        (africa::AFRICA, Continent::Africa),
        (oceania::OCEANIA, Continent::Oceania),
    ];

    regions
        .iter()
        .flat_map(|(rows, continent)| {
            rows.iter().map(move |(name, code)| CountryEntry {
                name: (*name).to_string(),
                code: (*code).to_string(),
                continent: *continent,
            })
        })
        .collect()
}

/// All bundled municipality rows as owned entries, in data-release order.
pub(crate) fn bundled_municipalities() -> Vec<MunicipalityEntry> {
    let areas: [&[(&str, &str, &str)]; 3] = [
        comuni_nord::COMUNI_NORD,
        comuni_centro::COMUNI_CENTRO,
        comuni_sud::COMUNI_SUD,
    ];

    areas
        .iter()
        .flat_map(|rows| {
            rows.iter().map(|(name, code, province)| MunicipalityEntry {
                name: (*name).to_string(),
                code: (*code).to_string(),
                province: (*province).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn country_rows_have_nine_digit_codes() {
        for entry in bundled_countries() {
            assert_eq!(
                entry.code.len(),
                9,
                "country {} has malformed code {:?}",
                entry.name,
                entry.code
            );
            assert!(
                entry.code.chars().all(|c| c.is_ascii_digit()),
                "country {} has non-numeric code {:?}",
                entry.name,
                entry.code
            );
        }
    }

    #[test]
    fn country_names_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for entry in bundled_countries() {
            assert_eq!(entry.name, crate::normalize_name(&entry.name));
            assert!(seen.insert(entry.name.clone()), "duplicate country {}", entry.name);
        }
    }

    #[test]
    fn municipality_rows_have_nine_digit_codes() {
        for entry in bundled_municipalities() {
            assert_eq!(
                entry.code.len(),
                9,
                "comune {} has malformed code {:?}",
                entry.name,
                entry.code
            );
            assert!(entry.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn municipality_rows_are_unique() {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for entry in bundled_municipalities() {
            assert!(names.insert(entry.name.clone()), "duplicate comune {}", entry.name);
            assert!(codes.insert(entry.code.clone()), "duplicate code {}", entry.code);
        }
    }

    #[test]
    fn municipality_provinces_are_two_letters() {
        for entry in bundled_municipalities() {
            assert_eq!(
                entry.province.len(),
                2,
                "comune {} has malformed province {:?}",
                entry.name,
                entry.province
            );
            assert!(entry
                .province
                .chars()
                .all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn dataset_sizes() {
        // Hundreds of entries, loaded once and kept resident.
        assert!(bundled_countries().len() > 150);
        assert!(bundled_municipalities().len() > 100);
    }
}
