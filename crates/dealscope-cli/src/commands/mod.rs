//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod config;

pub use analyze::AnalyzeArgs;
pub use batch::BatchArgs;
pub use config::ConfigArgs;

use std::path::Path;

use dealscope_config::{InvestorProfile, PreferenceStore};

use crate::error::CliResult;

/// Opens the preference store at `path`, or the default location.
pub fn open_store(path: Option<&Path>) -> CliResult<PreferenceStore> {
    let store = match path {
        Some(path) => PreferenceStore::open(path)?,
        None => PreferenceStore::load_default()?,
    };
    for key in store.unknown_keys() {
        tracing::warn!("ignoring unknown preference '{key}' in {}", store.path().display());
    }
    Ok(store)
}

/// Resolves stored preferences into an investor profile.
pub fn load_profile(path: Option<&Path>) -> CliResult<InvestorProfile> {
    let store = open_store(path)?;
    Ok(InvestorProfile::from_store(&store)?)
}
