//! # Record Assembler — Positional Concatenation
//!
//! Produces the exact output text for a *validated* batch. Each guest
//! becomes one 168-character line: the assembler walks
//! [`RECORD_LAYOUT`] in wire order, renders each span through the
//! resolver and formatter, and concatenates with no separators. Lines
//! are joined with CR+LF; there is no trailing terminator.
//!
//! For a validated batch the assembler never fails: every field is
//! resolvable by construction (the resolver is total) and every width
//! is satisfied (the validator rejected anything that would not fit).
//! A width drift here would mean validator/assembler desynchronization,
//! which is an assertion failure, not a recoverable condition.
//!
//! The assembler writes no files and picks no filenames — that is the
//! delivery layer's concern.

use schedina_core::{GuestBatch, GuestEntry};

use crate::format::{blank_span, format_date, render_span};
use crate::layout::{Field, LINE_TERMINATOR, RECORD_LAYOUT, RECORD_WIDTH};
use crate::resolve::CodeResolver;

/// Assemble one guest into its 168-character record line.
pub fn assemble_line(guest: &GuestEntry, resolver: &CodeResolver) -> String {
    let mut line = String::with_capacity(RECORD_WIDTH);
    for spec in RECORD_LAYOUT {
        let span = match raw_value(guest, resolver, spec.field) {
            Some(raw) => render_span(&raw, spec),
            None => blank_span(spec),
        };
        debug_assert_eq!(
            span.chars().count(),
            spec.width,
            "span width drift in field {}",
            spec.name
        );
        line.push_str(&span);
    }
    debug_assert_eq!(line.chars().count(), RECORD_WIDTH, "record width drift");
    line
}

/// Assemble a whole batch: one line per guest in batch order, joined
/// with CR+LF, no trailing terminator.
pub fn assemble_batch(batch: &GuestBatch, resolver: &CodeResolver) -> String {
    batch
        .guests
        .iter()
        .map(|guest| assemble_line(guest, resolver))
        .collect::<Vec<_>>()
        .join(LINE_TERMINATOR)
}

/// The pre-formatting value of one field, or `None` for a blanked span.
///
/// Role- and nationality-conditional blanking is decided here and in
/// the resolver — never by the formatter, which only renders.
fn raw_value(guest: &GuestEntry, resolver: &CodeResolver, field: Field) -> Option<String> {
    match field {
        Field::TipoAlloggiato => Some(guest.role.code().to_string()),
        Field::DataArrivo => Some(format_date(guest.arrival_date)),
        Field::GiorniPermanenza => Some(guest.nights.to_string()),
        Field::Cognome => Some(guest.surname.clone()),
        Field::Nome => Some(guest.given_name.clone()),
        Field::Sesso => Some(guest.sex.code().to_string()),
        Field::DataNascita => Some(format_date(guest.birth_date)),
        Field::ComuneNascita => resolver.birth_municipality(guest),
        Field::ProvinciaNascita => resolver.birth_province(guest),
        Field::StatoNascita => Some(resolver.birth_country(guest)),
        Field::Cittadinanza => Some(resolver.citizenship(guest)),
        Field::TipoDocumento => guest
            .active_document()
            .map(|d| d.doc_type.code().to_string()),
        Field::NumeroDocumento => guest.active_document().map(|d| d.number.clone()),
        Field::LuogoRilascio => resolver.document_issuing_place(guest),
    }
}
