//! # Encode CLI — Generate the fixed-width registration file.
//!
//! Validates the batch and, when valid, writes the encoded text to
//! `questura_<apartment>_<timestamp>.txt` in the output directory. On
//! validation failure, prints the full diagnostic list and writes
//! nothing — there is never a partial file.
//!
//! ## Usage
//!
//! ```bash
//! # Write into the current directory:
//! schedina encode ospiti.json
//!
//! # Write into a spool directory, replaying historical arrivals:
//! schedina encode ospiti.json --output-dir /var/spool/schedine --allow-past-arrivals
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use schedina_codec::Encoder;

use crate::{load_batch, output_file_name, submission_options};

/// Encode subcommand arguments.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the guest-batch JSON document.
    pub batch: PathBuf,

    /// Directory the output file is written into.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Disable the arrival-window rule (historical data replay).
    #[arg(long)]
    pub allow_past_arrivals: bool,
}

/// Execute the encode subcommand. Exit code 0 on success, 2 when the
/// batch fails validation.
pub fn run_encode(args: &EncodeArgs) -> Result<u8> {
    let batch = load_batch(&args.batch)?;
    let encoder = Encoder::with_bundled_tables(submission_options(args.allow_past_arrivals))?;

    let text = match encoder.encode(&batch) {
        Ok(text) => text,
        Err(report) => {
            println!("INVALID: {} violation(s), no file written", report.errors.len());
            for error in &report.errors {
                println!("  error: {error}");
            }
            for warning in &report.warnings {
                println!("  warning: {warning}");
            }
            return Ok(2);
        }
    };

    let fallbacks = encoder.fallbacks();
    if fallbacks.unknown_countries > 0 || fallbacks.unknown_municipalities > 0 {
        tracing::warn!(
            unknown_countries = fallbacks.unknown_countries,
            unknown_municipalities = fallbacks.unknown_municipalities,
            "encoded with fallback codes; check place names for typos"
        );
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    let file_name = output_file_name(&batch.apartment_id, Local::now());
    let path = args.output_dir.join(file_name);
    std::fs::write(&path, &text)
        .with_context(|| format!("failed to write output file: {}", path.display()))?;

    println!("{}", path.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedina_codec::RECORD_WIDTH;

    const BATCH: &str = r#"{
        "apartment_id": "000123",
        "guests": [{
            "surname": "Rossi",
            "given_name": "Mario",
            "sex": "male",
            "birth_date": "1980-01-01",
            "birth_place": "Roma",
            "birth_province": "RM",
            "birth_country": "ITALIA",
            "citizenship": "ITALIA",
            "arrival_date": "1999-01-01",
            "nights": 3,
            "role": "solo",
            "domestic_birth": true,
            "document": {
                "doc_type": "identity_card",
                "number": "CA12345AB",
                "issued_at": "Roma"
            }
        }]
    }"#;

    #[test]
    fn encode_writes_one_fixed_width_file() {
        let dir = tempfile::tempdir().unwrap();
        let batch_path = dir.path().join("batch.json");
        std::fs::write(&batch_path, BATCH).unwrap();

        let out_dir = dir.path().join("out");
        let args = EncodeArgs {
            batch: batch_path,
            output_dir: out_dir.clone(),
            allow_past_arrivals: true,
        };
        assert_eq!(run_encode(&args).unwrap(), 0);

        let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("questura_000123_"));
        assert!(name.ends_with(".txt"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.chars().count(), RECORD_WIDTH);
    }

    #[test]
    fn invalid_batch_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let batch_path = dir.path().join("batch.json");
        // Arrival in the past with the submission window enforced.
        std::fs::write(&batch_path, BATCH).unwrap();

        let out_dir = dir.path().join("out");
        let args = EncodeArgs {
            batch: batch_path,
            output_dir: out_dir.clone(),
            allow_past_arrivals: false,
        };
        assert_eq!(run_encode(&args).unwrap(), 2);
        assert!(!out_dir.exists());
    }
}
