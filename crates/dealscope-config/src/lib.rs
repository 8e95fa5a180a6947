//! # Dealscope Configuration
//!
//! Persistent investor preferences for Dealscope.
//!
//! Preferences live in a flat JSON file of string values, one per
//! [`PreferenceKey`]. Values are validated when set and again when the file
//! is resolved into an [`InvestorProfile`], so a hand-edited file cannot
//! smuggle in an out-of-range assumption.
//!
//! The file defaults to `<config dir>/dealscope/preferences.json`; set
//! `DEALSCOPE_CONFIG` to point elsewhere.
//!
//! # Example
//!
//! ```rust,no_run
//! use dealscope_config::{InvestorProfile, PreferenceKey, PreferenceStore};
//!
//! let mut store = PreferenceStore::load_default()?;
//! store.set(PreferenceKey::InterestRate, "0.065")?;
//! store.save()?;
//!
//! let profile = InvestorProfile::from_store(&store)?;
//! assert_eq!(profile.assumptions.interest_rate, 0.065);
//! # Ok::<(), dealscope_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod keys;
pub mod profile;
pub mod store;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use keys::PreferenceKey;
pub use profile::InvestorProfile;
pub use store::{default_path, PreferenceStore, CONFIG_PATH_ENV};
