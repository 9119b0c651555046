//! # Batch Validator — Collect Everything, Throw Nothing
//!
//! Fully evaluates a [`GuestBatch`] against the protocol's structural
//! and business rules before any encoding is attempted. Every rule is
//! evaluated; none short-circuits another, so a form UI can highlight
//! all offending fields at once instead of one at a time.
//!
//! ## Rules
//!
//! 1. Batch shape: 1–1000 guest entries.
//! 2. Role structure: at most one `solo` entry; any `group_member`
//!    requires exactly one `group_leader`.
//! 3. Per guest: surname and given name non-empty, within the
//!    cognome/nome span widths, and free of control characters (the
//!    only raw text that reaches the wire — an embedded CR/LF would
//!    shift every subsequent span).
//! 4. Per guest: birth and arrival dates within the protocol's
//!    four-digit-year range (so they render to exactly ten characters).
//! 5. Per guest: length of stay between 1 and 99 nights (the
//!    giorni-permanenza span is two digits).
//! 6. Per guest whose role carries a document: document present, with a
//!    non-empty number of at most 20 characters.
//! 7. Per guest: arrival date not strictly before the submission date —
//!    a submission-time policy rule, disabled by replay options.
//!
//! The validator itself cannot fail: it is a pure function
//! batch → [`ValidationReport`]. Callers decide whether to proceed;
//! the encoder facade refuses to encode an invalid batch.

use chrono::{Datelike, NaiveDate};
use schedina_core::{GuestBatch, GuestEntry, GuestRole, MAX_GUESTS_PER_BATCH};
use serde::Serialize;
use thiserror::Error;

use crate::layout::{COGNOME_WIDTH, NOME_WIDTH, NUMERO_DOCUMENTO_WIDTH};

/// Highest length of stay the two-digit giorni-permanenza span encodes.
pub const MAX_NIGHTS: u32 = 99;

/// One protocol violation found in a batch.
///
/// `Structural` covers batch shape and role structure; `Field` covers a
/// single guest's single field. Lookup gaps never appear here — the
/// resolver handles them with deterministic fallbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Violation {
    /// The batch shape or role structure is wrong.
    #[error("batch: {message}")]
    Structural {
        /// Human-readable description.
        message: String,
    },
    /// A single guest's field violates a rule.
    #[error("guest {guest}: {message}")]
    Field {
        /// 1-based position of the guest in the batch.
        guest: usize,
        /// Human-readable description.
        message: String,
    },
}

/// Options controlling the submission-time policy rules.
///
/// Protocol structure rules always run; the arrival-window rule only
/// runs when a submission date is supplied. There is deliberately no
/// `Default` and no hidden clock — the caller owns "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// When set, arrival dates strictly before this date are rejected.
    pub submission_date: Option<NaiveDate>,
}

impl ValidationOptions {
    /// Options for a live submission: arrivals before `today` are
    /// rejected (the authority requires same-day-or-future submission).
    pub fn for_submission(today: NaiveDate) -> Self {
        Self {
            submission_date: Some(today),
        }
    }

    /// Options for replaying historical data: the arrival-window rule
    /// is disabled, protocol structure rules still apply.
    pub fn for_replay() -> Self {
        Self {
            submission_date: None,
        }
    }
}

/// Result of validating a guest batch.
///
/// Always fully populated: `errors` holds every violation in batch
/// order, `warnings` holds non-fatal observations (data the encoder
/// will blank or substitute).
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the batch may be encoded.
    pub is_valid: bool,
    /// Every violation found, ordered batch-level first, then by guest.
    pub errors: Vec<Violation>,
    /// Non-fatal observations (do not affect validity).
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a passing report.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a failing report with the given violations.
    pub fn fail(errors: Vec<Violation>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Add a violation. Marks the report invalid.
    pub fn add_error(&mut self, error: Violation) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate a batch against every protocol and policy rule.
///
/// Single-pass, stateless, total: this function never fails and never
/// stops at the first violation.
pub fn validate_batch(batch: &GuestBatch, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::ok();

    check_batch_shape(batch, &mut report);
    check_role_structure(batch, &mut report);

    for (index, guest) in batch.guests.iter().enumerate() {
        check_guest(index + 1, guest, options, &mut report);
    }

    report
}

fn check_batch_shape(batch: &GuestBatch, report: &mut ValidationReport) {
    if batch.guests.is_empty() {
        report.add_error(Violation::Structural {
            message: "at least one guest entry is required".to_string(),
        });
    }
    if batch.len() > MAX_GUESTS_PER_BATCH {
        report.add_error(Violation::Structural {
            message: format!(
                "at most {MAX_GUESTS_PER_BATCH} guest entries per file, got {}",
                batch.len()
            ),
        });
    }
}

fn check_role_structure(batch: &GuestBatch, report: &mut ValidationReport) {
    let solos = batch
        .guests
        .iter()
        .filter(|g| g.role == GuestRole::Solo)
        .count();
    let leaders = batch
        .guests
        .iter()
        .filter(|g| g.role == GuestRole::GroupLeader)
        .count();
    let members = batch
        .guests
        .iter()
        .filter(|g| g.role == GuestRole::GroupMember)
        .count();

    if solos > 1 {
        report.add_error(Violation::Structural {
            message: format!("at most one guest may have the solo role, found {solos}"),
        });
    }
    if members > 0 && leaders != 1 {
        report.add_error(Violation::Structural {
            message: format!(
                "group members require exactly one group leader, found {leaders}"
            ),
        });
    }
}

fn check_guest(
    position: usize,
    guest: &GuestEntry,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) {
    let field_error = |message: String| Violation::Field {
        guest: position,
        message,
    };

    // Names: required, bounded by their span widths, wire-safe. Widths
    // are checked on the rendered (case-folded) form — folding can
    // change the character count (ß uppercases to SS).
    if guest.surname.trim().is_empty() {
        report.add_error(field_error("surname is required".to_string()));
    } else if guest.surname.to_uppercase().chars().count() > COGNOME_WIDTH {
        report.add_error(field_error(format!(
            "surname too long (max {COGNOME_WIDTH} characters)"
        )));
    }
    if contains_control(&guest.surname) {
        report.add_error(field_error(
            "surname contains control characters".to_string(),
        ));
    }

    if guest.given_name.trim().is_empty() {
        report.add_error(field_error("given name is required".to_string()));
    } else if guest.given_name.to_lowercase().chars().count() > NOME_WIDTH {
        report.add_error(field_error(format!(
            "given name too long (max {NOME_WIDTH} characters)"
        )));
    }
    if contains_control(&guest.given_name) {
        report.add_error(field_error(
            "given name contains control characters".to_string(),
        ));
    }

    // Dates must render to exactly ten characters.
    for (label, date) in [("birth date", guest.birth_date), ("arrival date", guest.arrival_date)] {
        if !(1000..=9999).contains(&date.year()) {
            report.add_error(field_error(format!(
                "{label} outside the protocol's date range"
            )));
        }
    }

    // Length of stay fits the two-digit span.
    if guest.nights < 1 {
        report.add_error(field_error(
            "length of stay must be at least 1 night".to_string(),
        ));
    } else if guest.nights > MAX_NIGHTS {
        report.add_error(field_error(format!(
            "length of stay exceeds the protocol maximum of {MAX_NIGHTS} nights"
        )));
    }

    // Document requirement by role.
    if guest.role.requires_document() {
        match &guest.document {
            None => {
                report.add_error(field_error(format!(
                    "identity document is required for {} guests",
                    guest.role
                )));
            }
            Some(document) => {
                if document.number.trim().is_empty() {
                    report.add_error(field_error(
                        "document number is required".to_string(),
                    ));
                } else if document.number.to_lowercase().chars().count() > NUMERO_DOCUMENTO_WIDTH {
                    report.add_error(field_error(format!(
                        "document number too long (max {NUMERO_DOCUMENTO_WIDTH} characters)"
                    )));
                }
                if contains_control(&document.number) {
                    report.add_error(field_error(
                        "document number contains control characters".to_string(),
                    ));
                }
            }
        }
    } else if guest.document.is_some() {
        report.add_warning(format!(
            "guest {position}: document data on a group member is ignored (blank-encoded)"
        ));
    }

    // Domestic births should carry a province; the span is blanked if not.
    if guest.domestic_birth && guest.birth_province.is_none() {
        report.add_warning(format!(
            "guest {position}: missing birth province for a domestic-born guest (blank-encoded)"
        ));
    }

    // Submission-window policy rule.
    if let Some(today) = options.submission_date {
        if guest.arrival_date < today {
            report.add_error(field_error(
                "arrival date must not be before the submission date".to_string(),
            ));
        }
    }
}

/// Whether a value carries characters that would corrupt the
/// fixed-width line (CR, LF, tabs, other control characters).
fn contains_control(value: &str) -> bool {
    value.chars().any(char::is_control)
}
