//! Theater Statement - CLI Binary
//!
//! # Usage
//!
//! ```bash
//! theater-statement --plays plays.json --invoice invoice.json
//! THEATER_LOG_LEVEL=debug theater-statement --plays plays.json --invoice invoice.json --format json
//! ```

use std::process::ExitCode;

use clap::Parser;
use interface_cli::{config::StatementConfig, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Statement generation failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates configuration from `THEATER_*` variables
fn load_config() -> anyhow::Result<StatementConfig> {
    let config = StatementConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Initializes the tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
