//! Config command implementation.
//!
//! Manages stored investor preferences.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use dealscope_config::{InvestorProfile, PreferenceKey, PreferenceStore};

use crate::cli::OutputFormat;
use crate::commands::open_store;
use crate::output::{
    print_header, print_info, print_json, print_output, print_success, print_warning, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show effective preferences
    Show,

    /// Get a preference value
    Get(GetArgs),

    /// Set a preference value
    Set(SetArgs),

    /// List available preference keys
    List,

    /// Reset preferences to defaults
    Reset(ResetArgs),

    /// Show preference file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Preference key
    pub key: PreferenceKey,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Preference key
    pub key: PreferenceKey,

    /// Preference value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all preferences (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<PreferenceKey>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let store = open_store(config)?;
    match args.command {
        ConfigCommand::Show => execute_show(&store, format),
        ConfigCommand::Get(get_args) => execute_get(&store, get_args, format),
        ConfigCommand::Set(set_args) => execute_set(store, set_args),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(store, reset_args),
        ConfigCommand::Path => execute_path(&store),
    }
}

/// Show effective preferences.
fn execute_show(store: &PreferenceStore, format: OutputFormat) -> Result<()> {
    let entries = store.entries();

    match format {
        OutputFormat::Table => {
            print_header("Current Preferences");
            let rows: Vec<KeyValue> = entries
                .iter()
                .map(|(key, value, set)| {
                    let value = if *set {
                        (*value).to_string()
                    } else {
                        format!("{value} (default)")
                    };
                    KeyValue::new(key.as_str(), value)
                })
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = entries
                .iter()
                .map(|(key, value, _)| (key.as_str(), *value))
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<KeyValue> = entries
                .iter()
                .map(|(key, value, _)| KeyValue::new(key.as_str(), *value))
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for (key, value, _) in entries {
                println!("{key}={value}");
            }
        }
    }

    // Surface stored values that no longer resolve.
    if let Err(err) = InvestorProfile::from_store(store) {
        print_warning(&err.to_string());
    }

    Ok(())
}

/// Get a preference value.
fn execute_get(store: &PreferenceStore, args: GetArgs, format: OutputFormat) -> Result<()> {
    let key = args.key;
    let value = store.get_or_default(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => println!("{key}: {value}"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "key": key.as_str(),
            "value": value,
            "default": !store.is_set(key),
        }))?,
        OutputFormat::Minimal => println!("{value}"),
    }

    Ok(())
}

/// Set a preference value.
fn execute_set(mut store: PreferenceStore, args: SetArgs) -> Result<()> {
    store.set(args.key, args.value.as_str())?;
    InvestorProfile::from_store(&store)?;
    store.save()?;

    print_success(&format!("Set {} = {}", args.key, args.value.trim()));
    Ok(())
}

/// List available preference keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header("Available Preference Keys");
            let rows: Vec<KeyValue> = PreferenceKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = PreferenceKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in PreferenceKey::all() {
                wtr.write_record([key.as_str(), key.description(), key.default_value()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in PreferenceKey::all() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

/// Reset preferences.
fn execute_reset(mut store: PreferenceStore, args: ResetArgs) -> Result<()> {
    if args.all {
        store.clear();
        store.save()?;
        print_success("Reset all preferences to defaults");
    } else if let Some(key) = args.key {
        store.remove(key);
        store.save()?;
        print_success(&format!("Reset {key} to default ({})", key.default_value()));
    } else {
        print_warning("Use --all to reset all preferences, or specify a key to reset");
    }

    Ok(())
}

/// Show preference file path.
fn execute_path(store: &PreferenceStore) -> Result<()> {
    let path = store.path();
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
