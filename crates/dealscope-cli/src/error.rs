//! CLI error types.

use thiserror::Error;

use dealscope_config::ConfigError;
use dealscope_core::DealError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Listings file type not recognised.
    #[error("Unsupported listings file: {0}. Use .json or .csv.")]
    UnsupportedFile(String),

    /// Listings file parsed but held nothing.
    #[error("No listings found in {0}")]
    EmptyListings(String),

    /// Invalid property facts or assumptions.
    #[error(transparent)]
    Deal(#[from] DealError),

    /// Preference store error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
