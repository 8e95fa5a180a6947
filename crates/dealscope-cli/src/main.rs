//! Dealscope CLI - Command-line interface for rental property deal analysis.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a single property
//! dealscope analyze --price 450000 --rent 2800 --year-built 2018
//!
//! # Rank a file of listings, keeping B or better
//! dealscope batch listings.json --min-grade B --top 10
//!
//! # Store a financing assumption
//! dealscope config set interest_rate 0.065
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = cli.format;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format, config)?,
        Commands::Batch(args) => commands::batch::execute(args, format, config)?,
        Commands::Config(args) => commands::config::execute(args, format, config)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable in json/csv modes.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("warn,dealscope=debug,dealscope_analytics=debug,dealscope_config=debug"),
        _ => EnvFilter::new("trace"),
    });

    // Also installs the log-to-tracing bridge for the library crates.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
