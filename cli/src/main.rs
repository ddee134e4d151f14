//! Arbor CLI - Tree data importer for the Arbor record store
//!
//! Record type references in tree export data are portable developer names;
//! target environments know record types by opaque, environment-specific
//! ids. The importer queries the target environment's metadata, builds a
//! lookup index, and rewrites every reference in the export before it can
//! be loaded.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a single tree export file against a target environment
//! arbor -u http://localhost:8080 --file data/accounts.json
//!
//! # Resolve every file referenced by an export plan
//! arbor -u http://localhost:8080 --plan data/sample-plan.json --out-dir resolved/
//! ```

use clap::Parser;
use colored::Colorize;

use arbor_cli::{CLIConfiguration, CLIError, ImportSession, Result};

mod args;
mod connect;

use args::Cli;
use connect::build_client;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging; -v raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // At least one input selector is required; the flags are combinable
    if cli.file.is_none() && cli.plan.is_none() {
        return Err(CLIError::MissingInput);
    }

    // Load configuration
    let config = CLIConfiguration::load(&cli.config)?;
    if !config.resolved_ui().color {
        colored::control::set_override(false);
    }

    let client = build_client(&cli, &config)?;
    let session = ImportSession::new(client, cli.out_dir.clone());

    // The index is built once per run; resolution itself is pure in-memory
    // work and shares it across every file
    let index = session.load_index().await?;

    if let Some(file) = &cli.file {
        session.import_file(&index, file)?;
    }
    if let Some(plan) = &cli.plan {
        session.import_plan(&index, plan)?;
    }

    Ok(())
}
