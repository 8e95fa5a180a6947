//! Preference file behaviour across store instances.

use dealscope_config::{ConfigError, InvestorProfile, PreferenceKey, PreferenceStore};
use dealscope_core::types::{Grade, MinimumGrade};
use tempfile::TempDir;

#[test]
fn test_file_layout_is_flat_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut store = PreferenceStore::new(&path);
    store.set(PreferenceKey::LoanTerm, "20").unwrap();
    store.set(PreferenceKey::DownPayment, "25%").unwrap();
    store.save().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"down_payment": "25%", "loan_term": "20"}));
}

#[test]
fn test_profile_from_saved_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(
        &path,
        r#"{"expense_ratio": "0.35", "minimum_grade": "A", "min_price": "100000"}"#,
    )
    .unwrap();

    let profile = InvestorProfile::from_store(&PreferenceStore::open(&path).unwrap()).unwrap();
    assert_eq!(profile.assumptions.expense_ratio, 0.35);
    assert_eq!(profile.preferences.minimum_grade, MinimumGrade::AtLeast(Grade::A));
    assert_eq!(profile.preferences.min_price.to_string(), "100000");
}

#[test]
fn test_unknown_key_name() {
    assert!(matches!(
        "decimal_precision".parse::<PreferenceKey>(),
        Err(ConfigError::UnknownKey { key }) if key == "decimal_precision"
    ));
}
