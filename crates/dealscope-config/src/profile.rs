//! Resolving stored preferences into analysis inputs.

use std::str::FromStr;

use rust_decimal::Decimal;

use dealscope_core::types::{
    DownPayment, FinancingAssumptions, InvestmentPreferences, MinimumGrade,
};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::keys::PreferenceKey;
use crate::store::PreferenceStore;

/// Financing assumptions and screening preferences for one investor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvestorProfile {
    /// Used by the metrics calculator.
    pub assumptions: FinancingAssumptions,
    /// Used by screening.
    pub preferences: InvestmentPreferences,
}

impl InvestorProfile {
    /// Builds a profile from stored values, defaulting unset keys.
    ///
    /// # Errors
    ///
    /// Fails if a stored value no longer parses (e.g. the file was edited by
    /// hand) or the combined profile is inconsistent.
    pub fn from_store(store: &PreferenceStore) -> ConfigResult<Self> {
        let get = |key: PreferenceKey| {
            let value = store.get_or_default(key);
            key.validate_value(value).map(|()| value)
        };

        let assumptions = FinancingAssumptions::default()
            .with_expense_ratio(parse(PreferenceKey::ExpenseRatio, get(PreferenceKey::ExpenseRatio)?)?)
            .with_down_payment(parse::<DownPayment>(
                PreferenceKey::DownPayment,
                get(PreferenceKey::DownPayment)?,
            )?)
            .with_interest_rate(parse(PreferenceKey::InterestRate, get(PreferenceKey::InterestRate)?)?)
            .with_loan_term_years(parse(PreferenceKey::LoanTerm, get(PreferenceKey::LoanTerm)?)?);

        let mut preferences = InvestmentPreferences::default()
            .with_price_range(
                parse::<Decimal>(PreferenceKey::MinPrice, get(PreferenceKey::MinPrice)?)?,
                parse::<Decimal>(PreferenceKey::MaxPrice, get(PreferenceKey::MaxPrice)?)?,
            )
            .with_minimum_grade(parse::<MinimumGrade>(
                PreferenceKey::MinimumGrade,
                get(PreferenceKey::MinimumGrade)?,
            )?)
            .with_min_cap_rate(parse(PreferenceKey::MinCapRate, get(PreferenceKey::MinCapRate)?)?)
            .with_min_roi(parse(PreferenceKey::MinRoi, get(PreferenceKey::MinRoi)?)?);
        preferences.min_cash_flow = parse(PreferenceKey::MinCashFlow, get(PreferenceKey::MinCashFlow)?)?;

        let profile = Self {
            assumptions,
            preferences,
        };
        profile.validate_or_error()?;
        Ok(profile)
    }

    /// Replaces the financing assumptions.
    #[must_use]
    pub fn with_assumptions(mut self, assumptions: FinancingAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }
}

impl Validate for InvestorProfile {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Err(e) = self.assumptions.validate() {
            errors.push(ValidationError::with_rule("assumptions", e.to_string(), "range"));
        }
        if self.preferences.min_price > self.preferences.max_price {
            errors.push(ValidationError::with_rule(
                PreferenceKey::MinPrice.as_str(),
                format!(
                    "{} exceeds max_price {}",
                    self.preferences.min_price, self.preferences.max_price
                ),
                "ordering",
            ));
        }
        errors
    }
}

fn parse<T: FromStr>(key: PreferenceKey, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::Validation {
        field: key.as_str().to_string(),
        message: format!("cannot parse '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_core_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        let profile = InvestorProfile::from_store(&store).unwrap();

        assert_eq!(profile.assumptions, FinancingAssumptions::default());
        assert_eq!(profile.preferences, InvestmentPreferences::default());
        assert_eq!(profile, InvestorProfile::default());
    }

    #[test]
    fn test_stored_values_apply() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        store.set(PreferenceKey::DownPayment, "60000").unwrap();
        store.set(PreferenceKey::LoanTerm, "15").unwrap();
        store.set(PreferenceKey::MinimumGrade, "c").unwrap();
        store.set(PreferenceKey::MinCashFlow, "250").unwrap();

        let profile = InvestorProfile::from_store(&store).unwrap();
        assert_eq!(profile.assumptions.down_payment, DownPayment::Amount(dec!(60000)));
        assert_eq!(profile.assumptions.loan_term_years, 15);
        assert_eq!(profile.preferences.minimum_grade.to_string(), "C");
        assert_eq!(profile.preferences.min_cash_flow, 250.0);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("p.json")).unwrap();
        store.set(PreferenceKey::MinPrice, "600000").unwrap();

        let err = InvestorProfile::from_store(&store).unwrap_err();
        assert!(err.to_string().contains("exceeds max_price"));
    }

    #[test]
    fn test_hand_edited_garbage_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, r#"{"interest_rate": "six percent"}"#).unwrap();
        let store = PreferenceStore::open(&path).unwrap();

        assert!(matches!(
            InvestorProfile::from_store(&store),
            Err(ConfigError::Validation { ref field, .. }) if field == "interest_rate"
        ));
    }
}
