//! # Validate CLI — Full diagnostics for a batch document.
//!
//! Prints every violation and warning the validator collects, so a
//! host application (or a human fixing a document by hand) sees all
//! problems at once.
//!
//! ## Usage
//!
//! ```bash
//! # Validate against today's submission window:
//! schedina validate ospiti.json
//!
//! # Replay historical data without the arrival-window rule:
//! schedina validate ospiti.json --allow-past-arrivals
//!
//! # Machine-readable report:
//! schedina validate ospiti.json --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use schedina_codec::{validate_batch, ValidationReport};

use crate::{load_batch, submission_options};

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the guest-batch JSON document.
    pub batch: PathBuf,

    /// Disable the arrival-window rule (historical data replay).
    #[arg(long)]
    pub allow_past_arrivals: bool,

    /// Print the report as JSON instead of human-readable lines.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand. Exit code 0 when valid, 2 when the
/// batch has violations.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let batch = load_batch(&args.batch)?;
    let options = submission_options(args.allow_past_arrivals);
    let report = validate_batch(&batch, &options);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print_report(&report);
    }

    Ok(if report.is_valid { 0 } else { 2 })
}

fn print_report(report: &ValidationReport) {
    if report.is_valid {
        println!("OK: batch is valid");
    } else {
        println!("INVALID: {} violation(s)", report.errors.len());
        for error in &report.errors {
            println!("  error: {error}");
        }
    }
    for warning in &report.warnings {
        println!("  warning: {warning}");
    }
}
