//! JSON key-value preference file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::keys::PreferenceKey;

/// Environment variable overriding the preference file location.
pub const CONFIG_PATH_ENV: &str = "DEALSCOPE_CONFIG";

/// Default location: `$DEALSCOPE_CONFIG`, else `<config dir>/dealscope/preferences.json`.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if neither a config nor a home
/// directory can be found.
pub fn default_path() -> ConfigResult<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("dealscope").join("preferences.json"))
}

/// Investor preferences persisted as a flat JSON object of strings.
///
/// Values are validated on [`set`](Self::set); a missing file reads as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// An empty store that will save to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    /// Loads the store from `path`, or an empty store if the file is absent.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!("no preference file at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let values: BTreeMap<String, String> = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content)?
        };
        debug!("loaded {} preferences from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Loads the store from [`default_path`].
    ///
    /// # Errors
    ///
    /// See [`default_path`] and [`open`](Self::open).
    pub fn load_default() -> ConfigResult<Self> {
        Self::open(default_path()?)
    }

    /// Writes the store, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save(&self) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content).map_err(|e| ConfigError::io(&self.path, e))?;
        debug!("saved {} preferences to {}", self.values.len(), self.path.display());
        Ok(())
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored value, if set.
    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// The stored value, or the key's default.
    pub fn get_or_default(&self, key: PreferenceKey) -> &str {
        self.get(key).unwrap_or_else(|| key.default_value())
    }

    /// Returns true if `key` has a stored value.
    pub fn is_set(&self, key: PreferenceKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    /// Validates and stores a value. Does not save.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the value is out of range.
    pub fn set(&mut self, key: PreferenceKey, value: impl Into<String>) -> ConfigResult<()> {
        let value = value.into();
        key.validate_value(&value)?;
        self.values.insert(key.as_str().to_string(), value.trim().to_string());
        Ok(())
    }

    /// Removes a stored value, returning it.
    pub fn remove(&mut self, key: PreferenceKey) -> Option<String> {
        self.values.remove(key.as_str())
    }

    /// Removes every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Every key with its effective value and whether it was set explicitly.
    pub fn entries(&self) -> Vec<(PreferenceKey, &str, bool)> {
        PreferenceKey::all()
            .iter()
            .map(|key| (*key, self.get_or_default(*key), self.is_set(*key)))
            .collect()
    }

    /// Names of stored keys that are not recognised.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .filter(|k| PreferenceKey::parse(k).is_none())
            .map(String::as_str)
            .collect()
    }
}
