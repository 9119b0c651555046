//! # Record Layout — Single Source of Truth
//!
//! The ordered [`RECORD_LAYOUT`] list *is* the authority's record
//! layout. Field order, widths, pad rules, and case transforms live
//! here and nowhere else; the assembler walks this list, so reordering
//! an entry changes wire compatibility.
//!
//! ## Wire Format
//!
//! | # | Field | Width | Rule |
//! |---|-------|-------|------|
//! |  1 | tipo-alloggiato | 2 | role code |
//! |  2 | data-arrivo | 10 | `DD/MM/YYYY` |
//! |  3 | giorni-permanenza | 2 | zero-left-padded |
//! |  4 | cognome | 50 | upper, space-right |
//! |  5 | nome | 30 | lower, space-right |
//! |  6 | sesso | 1 | sex code |
//! |  7 | data-nascita | 10 | `DD/MM/YYYY` |
//! |  8 | comune-nascita | 9 | code, blank for foreign-born |
//! |  9 | provincia-nascita | 2 | sigla, blank for foreign-born |
//! | 10 | stato-nascita | 9 | country code |
//! | 11 | cittadinanza | 9 | country code |
//! | 12 | tipo-documento | 5 | code, blank for group members |
//! | 13 | numero-documento | 20 | lower, blank for group members |
//! | 14 | luogo-rilascio | 9 | code, blank for group members |
//!
//! Total line width: 168 characters. Lines are joined with CR+LF and
//! the last line has no terminator.

/// Exact character width of one encoded guest record.
pub const RECORD_WIDTH: usize = 168;

/// Two-byte terminator between records. Joining, not appending: the
/// last record is not followed by one.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Width of the cognome span; also the validator's surname limit.
pub const COGNOME_WIDTH: usize = 50;
/// Width of the nome span; also the validator's given-name limit.
pub const NOME_WIDTH: usize = 30;
/// Width of the numero-documento span; also the validator's limit.
pub const NUMERO_DOCUMENTO_WIDTH: usize = 20;
/// Width of the giorni-permanenza span; bounds the encodable stay.
pub const GIORNI_PERMANENZA_WIDTH: usize = 2;

/// The logical fields of one guest record, in no particular order —
/// the wire order is [`RECORD_LAYOUT`]'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TipoAlloggiato,
    DataArrivo,
    GiorniPermanenza,
    Cognome,
    Nome,
    Sesso,
    DataNascita,
    ComuneNascita,
    ProvinciaNascita,
    StatoNascita,
    Cittadinanza,
    TipoDocumento,
    NumeroDocumento,
    LuogoRilascio,
}

/// Which side a span is padded on, and with which character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    /// Pad on the left (numeric counters).
    Left(char),
    /// Pad on the right (text and code spans).
    Right(char),
}

/// Case transform applied before padding.
///
/// The folds are protocol conventions, not stylistic choices — the
/// authority's ingest expects cognome uppercase and nome lowercase.
/// Callers must not "fix" the casing upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// Leave the value as supplied.
    None,
    /// Fold to uppercase.
    Upper,
    /// Fold to lowercase.
    Lower,
}

/// Declarative description of one output field.
///
/// The byte offset is implicit: it is determined by the concatenation
/// order of [`RECORD_LAYOUT`].
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Which logical field this span renders.
    pub field: Field,
    /// Protocol field name, for diagnostics.
    pub name: &'static str,
    /// Exact span width in characters.
    pub width: usize,
    /// Pad rule.
    pub pad: Pad,
    /// Case transform.
    pub case: CaseFold,
}

/// The record layout, in wire order. Do not reorder.
pub const RECORD_LAYOUT: &[FieldSpec] = &[
    FieldSpec {
        field: Field::TipoAlloggiato,
        name: "tipo-alloggiato",
        width: 2,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::DataArrivo,
        name: "data-arrivo",
        width: 10,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::GiorniPermanenza,
        name: "giorni-permanenza",
        width: GIORNI_PERMANENZA_WIDTH,
        pad: Pad::Left('0'),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::Cognome,
        name: "cognome",
        width: COGNOME_WIDTH,
        pad: Pad::Right(' '),
        case: CaseFold::Upper,
    },
    FieldSpec {
        field: Field::Nome,
        name: "nome",
        width: NOME_WIDTH,
        pad: Pad::Right(' '),
        case: CaseFold::Lower,
    },
    FieldSpec {
        field: Field::Sesso,
        name: "sesso",
        width: 1,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::DataNascita,
        name: "data-nascita",
        width: 10,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::ComuneNascita,
        name: "comune-nascita",
        width: 9,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::ProvinciaNascita,
        name: "provincia-nascita",
        width: 2,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::StatoNascita,
        name: "stato-nascita",
        width: 9,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::Cittadinanza,
        name: "cittadinanza",
        width: 9,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::TipoDocumento,
        name: "tipo-documento",
        width: 5,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
    FieldSpec {
        field: Field::NumeroDocumento,
        name: "numero-documento",
        width: NUMERO_DOCUMENTO_WIDTH,
        pad: Pad::Right(' '),
        case: CaseFold::Lower,
    },
    FieldSpec {
        field: Field::LuogoRilascio,
        name: "luogo-rilascio",
        width: 9,
        pad: Pad::Right(' '),
        case: CaseFold::None,
    },
];
