//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, BatchArgs, ConfigArgs};

/// Dealscope - Rental property deal analysis
#[derive(Parser)]
#[command(name = "dealscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Preference file (defaults to the platform config directory)
    #[arg(long, env = "DEALSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute metrics and a letter grade for one property
    Analyze(AnalyzeArgs),

    /// Analyze and rank a JSON or CSV file of listings
    Batch(BatchArgs),

    /// Manage stored investor preferences
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (grade and score only)
    Minimal,
}
