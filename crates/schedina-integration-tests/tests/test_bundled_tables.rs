//! Conformance checks for the bundled reference datasets, through the
//! public table API.

use schedina_tables::{CountryTable, MunicipalityTable};

// ---------------------------------------------------------------------------
// Country table
// ---------------------------------------------------------------------------

#[test]
fn bundled_country_table_loads_hundreds_of_entries() {
    let table = CountryTable::bundled();
    assert!(table.len() > 150, "got {}", table.len());
}

#[test]
fn bundled_country_codes_match_the_data_release() {
    let table = CountryTable::bundled();
    assert_eq!(table.lookup("ITALIA"), Some("100000100"));
    assert_eq!(table.lookup("FRANCIA"), Some("100000110"));
    assert_eq!(table.lookup("GERMANIA"), Some("100000112"));
    assert_eq!(table.lookup("REGNO UNITO"), Some("100000135"));
    assert_eq!(table.lookup("STATI UNITI"), Some("100000138"));
    assert_eq!(table.lookup("GIAPPONE"), Some("100000392"));
    assert_eq!(table.lookup("AUSTRALIA"), Some("100000036"));
}

#[test]
fn bundled_country_lookup_is_case_insensitive() {
    let table = CountryTable::bundled();
    assert_eq!(table.lookup("italia"), table.lookup("ITALIA"));
    assert_eq!(table.lookup(" Regno Unito "), Some("100000135"));
}

#[test]
fn bundled_country_codes_are_nine_digits() {
    for entry in CountryTable::bundled().iter() {
        assert_eq!(entry.code.len(), 9, "{} code {:?}", entry.name, entry.code);
        assert!(entry.code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn country_prefix_search_finds_groups() {
    let table = CountryTable::bundled();
    let hits = table.search_prefix("SAN");
    assert!(hits.iter().any(|e| e.name == "SAN MARINO"));
    // Every hit actually carries the prefix.
    for hit in hits {
        assert!(hit.name.starts_with("SAN"));
    }
}

// ---------------------------------------------------------------------------
// Municipality table
// ---------------------------------------------------------------------------

#[test]
fn bundled_municipality_table_loads_hundreds_of_entries() {
    let table = MunicipalityTable::bundled();
    assert!(table.len() > 100, "got {}", table.len());
}

#[test]
fn bundled_municipality_codes_match_the_data_release() {
    let table = MunicipalityTable::bundled();
    assert_eq!(table.lookup("ROMA"), Some("458100001"));
    assert_eq!(table.lookup("MILANO"), Some("415146001"));
    assert_eq!(table.lookup("BOLOGNA"), Some("408037006"));
    assert_eq!(table.lookup("FIRENZE"), Some("409048017"));
}

#[test]
fn bundled_municipalities_carry_their_province() {
    let table = MunicipalityTable::bundled();
    assert_eq!(table.get("ROMA").map(|e| e.province.as_str()), Some("RM"));
    assert_eq!(table.get("NAPOLI").map(|e| e.province.as_str()), Some("NA"));
    assert_eq!(table.get("CAGLIARI").map(|e| e.province.as_str()), Some("CA"));
}

#[test]
fn bundled_municipality_miss_returns_none() {
    let table = MunicipalityTable::bundled();
    assert_eq!(table.lookup("Nonexistentville"), None);
}

#[test]
fn municipality_enumeration_is_name_ordered() {
    let table = MunicipalityTable::bundled();
    let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

// ---------------------------------------------------------------------------
// Entries serialize for table dumps
// ---------------------------------------------------------------------------

#[test]
fn entries_serialize_to_json() {
    let table = MunicipalityTable::bundled();
    let entry = table.get("ROMA").unwrap();
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["name"], "ROMA");
    assert_eq!(json["code"], "458100001");
    assert_eq!(json["province"], "RM");
}
