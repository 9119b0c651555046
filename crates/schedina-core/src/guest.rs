//! # Guest-Stay Record Model
//!
//! One `GuestEntry` describes one person's stay: who they are, where they
//! were born, when they arrived, for how long, and in which role they
//! travel. The role determines which identity-document fields the
//! protocol requires.
//!
//! ## Protocol Codes
//!
//! The wire codes for role, sex, and document type live on their enums —
//! one definition each, exhaustively matched. The two-character
//! tipo-alloggiato codes are the family/group codes of the receiving
//! authority's record layout:
//!
//! | Role | Code | Document fields |
//! |------|------|-----------------|
//! | `Solo` | `18` | required |
//! | `GroupLeader` | `16` | required |
//! | `GroupMember` | `17` | must be blank |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identifiers::Province;

/// The role a guest travels in, governing which fields the protocol
/// requires versus forbids.
///
/// Per batch, at most one entry may be `Solo`, and the presence of any
/// `GroupMember` requires exactly one `GroupLeader`. The validator in
/// `schedina-codec` enforces this; the enum only carries the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestRole {
    /// A guest staying alone.
    Solo,
    /// The head of a family or group; carries the identity document.
    GroupLeader,
    /// A family or group member; document fields are blank-encoded.
    GroupMember,
}

impl GuestRole {
    /// The two-character tipo-alloggiato code for this role.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Solo => "18",
            Self::GroupLeader => "16",
            Self::GroupMember => "17",
        }
    }

    /// Whether the protocol requires identity-document fields for this role.
    pub fn requires_document(&self) -> bool {
        matches!(self, Self::Solo | Self::GroupLeader)
    }

    /// The snake_case string identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::GroupLeader => "group_leader",
            Self::GroupMember => "group_member",
        }
    }
}

impl std::fmt::Display for GuestRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex as the protocol's single-character binary code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Encoded as `1`.
    Male,
    /// Encoded as `2`.
    Female,
}

impl Sex {
    /// The one-character sesso code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "1",
            Self::Female => "2",
        }
    }
}

/// Identity-document kind, as the protocol's five-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Carta d'identità — `IDENT`.
    IdentityCard,
    /// Passaporto — `PASSP`.
    Passport,
    /// Patente di guida — `PATEN`.
    DrivingLicence,
}

impl DocumentType {
    /// The five-character tipo-documento code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IdentityCard => "IDENT",
            Self::Passport => "PASSP",
            Self::DrivingLicence => "PATEN",
        }
    }
}

/// An identity document, present only on guests whose role carries one.
///
/// The issuing place is a free-text name resolved through the reference
/// tables at encoding time: a municipality name for guests born in
/// Italy, a country name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// Document kind.
    pub doc_type: DocumentType,
    /// Document number as printed, at most 20 characters.
    pub number: String,
    /// Free-text name of the issuing place.
    pub issued_at: String,
}

/// One person's stay record, as collected by the form layer.
///
/// All fields are already structurally typed: dates are calendar values,
/// the province is a validated sigla. Free-text place names stay strings
/// because they are resolved against the reference tables at encoding
/// time — a name with no table entry is not an error here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestEntry {
    /// Family name, rendered uppercase on the wire.
    pub surname: String,
    /// Given name, rendered lowercase on the wire.
    pub given_name: String,
    /// Binary sex code.
    pub sex: Sex,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Free-text birth-place name (municipality for domestic births).
    pub birth_place: String,
    /// Birth province sigla; only meaningful when `domestic_birth` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_province: Option<Province>,
    /// Free-text birth-country name.
    pub birth_country: String,
    /// Free-text citizenship-country name.
    pub citizenship: String,
    /// Arrival date at the accommodation.
    pub arrival_date: NaiveDate,
    /// Length of stay in nights; must be at least 1.
    pub nights: u32,
    /// Travel role, governing the document requirement.
    pub role: GuestRole,
    /// Identity document; required for `Solo` and `GroupLeader`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<IdentityDocument>,
    /// Whether the guest was born in Italy. Governs the
    /// municipality/province versus blank encoding of the birth-place
    /// spans.
    pub domestic_birth: bool,
}

impl GuestEntry {
    /// The identity document the protocol will actually encode: the
    /// attached document when the role carries one, `None` otherwise.
    ///
    /// Group members get blank document spans even if the form layer
    /// attached document data to them.
    pub fn active_document(&self) -> Option<&IdentityDocument> {
        if self.role.requires_document() {
            self.document.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes() {
        assert_eq!(GuestRole::Solo.code(), "18");
        assert_eq!(GuestRole::GroupLeader.code(), "16");
        assert_eq!(GuestRole::GroupMember.code(), "17");
    }

    #[test]
    fn role_document_requirement() {
        assert!(GuestRole::Solo.requires_document());
        assert!(GuestRole::GroupLeader.requires_document());
        assert!(!GuestRole::GroupMember.requires_document());
    }

    #[test]
    fn role_serde_format_matches_as_str() {
        for role in [GuestRole::Solo, GuestRole::GroupLeader, GuestRole::GroupMember] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn sex_codes() {
        assert_eq!(Sex::Male.code(), "1");
        assert_eq!(Sex::Female.code(), "2");
    }

    #[test]
    fn document_type_codes_are_five_chars() {
        for dt in [
            DocumentType::IdentityCard,
            DocumentType::Passport,
            DocumentType::DrivingLicence,
        ] {
            assert_eq!(dt.code().len(), 5);
        }
    }

    #[test]
    fn guest_entry_serde_roundtrip() {
        let guest = GuestEntry {
            surname: "Rossi".to_string(),
            given_name: "Mario".to_string(),
            sex: Sex::Male,
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            birth_place: "Roma".to_string(),
            birth_province: Some(Province::new("RM").unwrap()),
            birth_country: "ITALIA".to_string(),
            citizenship: "ITALIA".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            nights: 3,
            role: GuestRole::Solo,
            document: Some(IdentityDocument {
                doc_type: DocumentType::IdentityCard,
                number: "CA12345AB".to_string(),
                issued_at: "Roma".to_string(),
            }),
            domestic_birth: true,
        };
        let json = serde_json::to_string(&guest).unwrap();
        let deser: GuestEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(guest, deser);
    }

    #[test]
    fn active_document_blanked_for_group_member() {
        let doc = IdentityDocument {
            doc_type: DocumentType::Passport,
            number: "X123".to_string(),
            issued_at: "FRANCIA".to_string(),
        };
        let mut guest = GuestEntry {
            surname: "Dupont".to_string(),
            given_name: "Luc".to_string(),
            sex: Sex::Male,
            birth_date: NaiveDate::from_ymd_opt(1970, 7, 7).unwrap(),
            birth_place: "Lyon".to_string(),
            birth_province: None,
            birth_country: "FRANCIA".to_string(),
            citizenship: "FRANCIA".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            nights: 1,
            role: GuestRole::GroupMember,
            document: Some(doc),
            domestic_birth: false,
        };
        assert!(guest.active_document().is_none());

        guest.role = GuestRole::GroupLeader;
        assert!(guest.active_document().is_some());
    }

    #[test]
    fn guest_entry_optional_fields_default() {
        // A group member without document or province deserializes cleanly.
        let json = r#"{
            "surname": "Rossi",
            "given_name": "Anna",
            "sex": "female",
            "birth_date": "2015-05-20",
            "birth_place": "Lyon",
            "birth_country": "FRANCIA",
            "citizenship": "FRANCIA",
            "arrival_date": "2026-08-06",
            "nights": 3,
            "role": "group_member",
            "domestic_birth": false
        }"#;
        let guest: GuestEntry = serde_json::from_str(json).unwrap();
        assert!(guest.document.is_none());
        assert!(guest.birth_province.is_none());
        assert_eq!(guest.role, GuestRole::GroupMember);
    }
}
