//! # Tables CLI — Enumerate the bundled reference tables.
//!
//! Exposes the country and municipality datasets for host applications
//! that build autocomplete from them, and for checking whether a place
//! name will resolve or fall back.
//!
//! ## Usage
//!
//! ```bash
//! schedina tables countries
//! schedina tables countries --search "SA"
//! schedina tables municipalities --search ROM --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use schedina_tables::{CountryTable, MunicipalityTable};

/// Tables subcommand arguments.
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub command: TablesCommand,
}

/// Which table to enumerate.
#[derive(Subcommand, Debug)]
pub enum TablesCommand {
    /// List the bundled country table.
    Countries {
        /// Only entries whose name starts with this prefix.
        #[arg(long)]
        search: Option<String>,

        /// Print entries as JSON lines instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// List the bundled municipality table.
    Municipalities {
        /// Only entries whose name starts with this prefix.
        #[arg(long)]
        search: Option<String>,

        /// Print entries as JSON lines instead of aligned text.
        #[arg(long)]
        json: bool,
    },
}

/// Execute the tables subcommand.
pub fn run_tables(args: &TablesArgs) -> Result<u8> {
    match &args.command {
        TablesCommand::Countries { search, json } => run_countries(search.as_deref(), *json),
        TablesCommand::Municipalities { search, json } => {
            run_municipalities(search.as_deref(), *json)
        }
    }
}

fn run_countries(search: Option<&str>, json: bool) -> Result<u8> {
    let table = CountryTable::bundled();
    let entries: Vec<_> = match search {
        Some(prefix) => table.search_prefix(prefix),
        None => table.iter().collect(),
    };

    for entry in &entries {
        if json {
            println!(
                "{}",
                serde_json::to_string(entry).context("failed to serialize entry")?
            );
        } else {
            println!("  {:<30} {}  ({})", entry.name, entry.code, entry.continent);
        }
    }
    if !json {
        println!();
        println!("Total: {} countries", entries.len());
    }
    Ok(0)
}

fn run_municipalities(search: Option<&str>, json: bool) -> Result<u8> {
    let table = MunicipalityTable::bundled();
    let entries: Vec<_> = match search {
        Some(prefix) => table.search_prefix(prefix),
        None => table.iter().collect(),
    };

    for entry in &entries {
        if json {
            println!(
                "{}",
                serde_json::to_string(entry).context("failed to serialize entry")?
            );
        } else {
            println!("  {:<30} {}  ({})", entry.name, entry.code, entry.province);
        }
    }
    if !json {
        println!();
        println!("Total: {} municipalities", entries.len());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countries_listing_runs() {
        let args = TablesArgs {
            command: TablesCommand::Countries {
                search: None,
                json: false,
            },
        };
        assert_eq!(run_tables(&args).unwrap(), 0);
    }

    #[test]
    fn municipality_prefix_search_runs() {
        let args = TablesArgs {
            command: TablesCommand::Municipalities {
                search: Some("ROM".to_string()),
                json: true,
            },
        };
        assert_eq!(run_tables(&args).unwrap(), 0);
    }
}
