//! # schedina CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity flags map to
//! a tracing `EnvFilter` so the resolver's fallback warnings surface on
//! request.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schedina_cli::encode::{run_encode, EncodeArgs};
use schedina_cli::tables::{run_tables, TablesArgs};
use schedina_cli::validate::{run_validate, ValidateArgs};

/// Schedina Stack CLI
///
/// Validates guest-batch documents and generates the fixed-width
/// registration files the receiving authority ingests.
#[derive(Parser, Debug)]
#[command(name = "schedina", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a guest-batch document and print every violation.
    Validate(ValidateArgs),

    /// Validate a guest-batch document and write the fixed-width file.
    Encode(EncodeArgs),

    /// Enumerate the bundled reference tables.
    Tables(TablesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Encode(args) => run_encode(&args),
        Commands::Tables(args) => run_tables(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
