//! # schedina-codec — Fixed-Width Record Engine
//!
//! Turns a typed [`GuestBatch`](schedina_core::GuestBatch) into the
//! position-exact text file the receiving authority ingests. The wire
//! format is purely positional: every field occupies an exact character
//! range with its own padding, truncation, and case rule, and there is
//! no schema validation on the receiving end — a single misplaced pad
//! character silently shifts every subsequent field. Correctness is
//! entirely this crate's responsibility.
//!
//! ## Pipeline
//!
//! ```text
//! GuestBatch → validate (collect every violation)
//!            → resolve (names → nine-digit codes, total, never fails)
//!            → format  (pad / case-fold / date spans)
//!            → assemble (positional concatenation, CRLF join)
//! ```
//!
//! The [`Encoder`] facade runs the stages in that order and refuses to
//! assemble anything when validation fails: output is either
//! byte-for-byte correct or not produced at all. There is no
//! partially-encoded file.
//!
//! ## Module Map
//!
//! - [`layout`] — the declarative [`FieldSpec`](layout::FieldSpec) list
//!   that *is* the record layout; single reviewable source of truth.
//! - [`format`] — stateless span-rendering primitives.
//! - [`resolve`] — total name→code resolution with sentinel/default
//!   fallbacks, counted and logged.
//! - [`validate`] — single-pass, collect-everything batch validation.
//! - [`assemble`] — line/blob assembly for validated batches.
//! - [`encoder`] — the facade external collaborators call.

pub mod assemble;
pub mod encoder;
pub mod error;
pub mod format;
pub mod layout;
pub mod resolve;
pub mod validate;

pub use assemble::{assemble_batch, assemble_line};
pub use encoder::Encoder;
pub use error::CodecError;
pub use layout::{CaseFold, Field, FieldSpec, Pad, LINE_TERMINATOR, RECORD_LAYOUT, RECORD_WIDTH};
pub use resolve::{CodeResolver, FallbackCounts, DEFAULT_COUNTRY, UNKNOWN_MUNICIPALITY_CODE};
pub use validate::{validate_batch, ValidationOptions, ValidationReport, Violation};
