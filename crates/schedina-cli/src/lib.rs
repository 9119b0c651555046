//! # schedina-cli — CLI Tool for the Schedina Stack
//!
//! Provides the `schedina` command-line interface, the thin delivery
//! layer around the encoder: it reads a batch document, calls the
//! codec, and owns file naming and writing — everything the encoder
//! deliberately does not do.
//!
//! ## Subcommands
//!
//! - `schedina validate` — full diagnostic listing for a batch document.
//! - `schedina encode` — validate and write the fixed-width file.
//! - `schedina tables` — enumerate the bundled reference tables.
//!
//! ## Batch Documents
//!
//! Batches are JSON documents matching the `schedina-core` types:
//!
//! ```json
//! {
//!   "apartment_id": "000123",
//!   "guests": [
//!     {
//!       "surname": "Rossi",
//!       "given_name": "Mario",
//!       "sex": "male",
//!       "birth_date": "1980-01-01",
//!       "birth_place": "Roma",
//!       "birth_province": "RM",
//!       "birth_country": "ITALIA",
//!       "citizenship": "ITALIA",
//!       "arrival_date": "2026-08-06",
//!       "nights": 3,
//!       "role": "solo",
//!       "domestic_birth": true,
//!       "document": {
//!         "doc_type": "identity_card",
//!         "number": "CA12345AB",
//!         "issued_at": "Roma"
//!       }
//!     }
//!   ]
//! }
//! ```

pub mod encode;
pub mod tables;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use schedina_codec::ValidationOptions;
use schedina_core::{ApartmentId, GuestBatch};

/// Load a guest-batch JSON document from disk.
pub fn load_batch(path: &Path) -> Result<GuestBatch> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch document: {}", path.display()))?;
    let batch: GuestBatch = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse batch document: {}", path.display()))?;
    Ok(batch)
}

/// Validation options for a CLI invocation: today's local calendar date
/// as the submission date, unless historical arrivals were allowed.
pub fn submission_options(allow_past_arrivals: bool) -> ValidationOptions {
    if allow_past_arrivals {
        ValidationOptions::for_replay()
    } else {
        ValidationOptions::for_submission(Local::now().date_naive())
    }
}

/// Output file name for an encoded batch:
/// `questura_<apartment>_<YYYY-MM-DDTHH_MM_SS>.txt`.
pub fn output_file_name(apartment: &ApartmentId, now: DateTime<Local>) -> String {
    format!(
        "questura_{}_{}.txt",
        apartment,
        now.format("%Y-%m-%dT%H_%M_%S")
    )
}
