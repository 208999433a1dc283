//! Theater Statement CLI
//!
//! Loads a play catalog and an invoice from JSON files, prices the invoice
//! and prints either the text statement or the statement data as JSON.
//! Amounts are always billed with the standard tariff in USD cents.
//!
//! # Environment Variables
//!
//! * `THEATER_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

pub mod config;
pub mod loader;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use core_kernel::LocaleFormatter;
use domain_theater::{StatementCalculator, StatementRenderer, Tariff};

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "theater-statement", about = "Render a customer statement for an invoice of performances")]
pub struct Cli {
    /// Play catalog JSON file
    #[arg(long)]
    pub plays: PathBuf,

    /// Invoice JSON file
    #[arg(long)]
    pub invoice: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The rendered text statement
    Text,
    /// The aggregated statement data
    Json,
}

/// Loads the inputs named by `cli` and produces the requested output
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let catalog = loader::load_catalog(&cli.plays)?;
    let invoice = loader::load_invoice(&cli.invoice)?;

    let calculator = StatementCalculator::with_tariff(&catalog, Tariff::standard());

    match cli.format {
        OutputFormat::Text => StatementRenderer::new(LocaleFormatter::us())
            .render(&invoice, &calculator)
            .with_context(|| format!("Cannot produce a statement for {}", invoice.customer)),
        OutputFormat::Json => {
            let data = calculator
                .aggregate(&invoice)
                .with_context(|| format!("Cannot produce a statement for {}", invoice.customer))?;
            serde_json::to_string_pretty(&data).context("Failed to serialize statement")
        }
    }
}
