//! Typed preference keys.
//!
//! The preference file stores strings; each [`PreferenceKey`] knows how to
//! describe, default and validate its value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use dealscope_core::types::{DownPayment, MinimumGrade, MAX_LOAN_TERM_YEARS};

use crate::error::{ConfigError, ConfigResult, ValidationError};

/// A stored investor preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceKey {
    /// Operating expenses as a share of gross rent.
    ExpenseRatio,
    /// Down payment: percentage, fraction, or amount.
    DownPayment,
    /// Annual mortgage interest rate.
    InterestRate,
    /// Mortgage term in years.
    LoanTerm,
    /// Lowest grade surfaced by screening.
    MinimumGrade,
    /// Minimum cap rate, percent.
    MinCapRate,
    /// Minimum ROI, percent.
    MinRoi,
    /// Minimum monthly cash flow.
    MinCashFlow,
    /// Lowest listing price.
    MinPrice,
    /// Highest listing price.
    MaxPrice,
}

impl PreferenceKey {
    /// Parses a key name, accepting a few short aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "expense_ratio" | "expenses" => Some(Self::ExpenseRatio),
            "down_payment" | "down" => Some(Self::DownPayment),
            "interest_rate" | "rate" => Some(Self::InterestRate),
            "loan_term" | "term" => Some(Self::LoanTerm),
            "minimum_grade" | "min_grade" | "grade" => Some(Self::MinimumGrade),
            "min_cap_rate" | "cap_rate" => Some(Self::MinCapRate),
            "min_roi" | "roi" => Some(Self::MinRoi),
            "min_cash_flow" | "cash_flow" => Some(Self::MinCashFlow),
            "min_price" => Some(Self::MinPrice),
            "max_price" => Some(Self::MaxPrice),
            _ => None,
        }
    }

    /// Canonical key name as stored in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExpenseRatio => "expense_ratio",
            Self::DownPayment => "down_payment",
            Self::InterestRate => "interest_rate",
            Self::LoanTerm => "loan_term",
            Self::MinimumGrade => "minimum_grade",
            Self::MinCapRate => "min_cap_rate",
            Self::MinRoi => "min_roi",
            Self::MinCashFlow => "min_cash_flow",
            Self::MinPrice => "min_price",
            Self::MaxPrice => "max_price",
        }
    }

    /// One-line description for `config list`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExpenseRatio => "Operating expenses as a share of rent (0-1)",
            Self::DownPayment => "Down payment (20%, 0.2, or an amount such as 50000)",
            Self::InterestRate => "Annual mortgage interest rate (0-1)",
            Self::LoanTerm => "Mortgage term in years (1-50)",
            Self::MinimumGrade => "Lowest grade to surface (A, B, C, D, any)",
            Self::MinCapRate => "Minimum cap rate in percent",
            Self::MinRoi => "Minimum projected ROI in percent",
            Self::MinCashFlow => "Minimum monthly cash flow",
            Self::MinPrice => "Lowest listing price",
            Self::MaxPrice => "Highest listing price",
        }
    }

    /// Value used when the key is not set.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::ExpenseRatio => "0.45",
            Self::DownPayment => "20%",
            Self::InterestRate => "0.06",
            Self::LoanTerm => "30",
            Self::MinimumGrade => "B",
            Self::MinCapRate => "4",
            Self::MinRoi => "5",
            Self::MinCashFlow => "500",
            Self::MinPrice => "200000",
            Self::MaxPrice => "500000",
        }
    }

    /// Checks that `value` parses and is in range for this key.
    pub fn validate_value(&self, value: &str) -> Result<(), ValidationError> {
        let field = self.as_str();
        let value = value.trim();
        match self {
            Self::ExpenseRatio | Self::InterestRate => {
                let ratio = parse_f64(field, value)?;
                let upper_ok = if *self == Self::InterestRate {
                    ratio < 1.0
                } else {
                    ratio <= 1.0
                };
                if ratio < 0.0 || !upper_ok {
                    return Err(ValidationError::with_rule(
                        field,
                        format!("{value} is not a ratio between 0 and 1"),
                        "ratio",
                    ));
                }
            }
            Self::DownPayment => {
                let down = DownPayment::from_str(value)
                    .map_err(|e| ValidationError::new(field, e.to_string()))?;
                if let DownPayment::Fraction(f) = down {
                    if !(0.0..=1.0).contains(&f) {
                        return Err(ValidationError::with_rule(
                            field,
                            format!("{value} is more than the whole price"),
                            "ratio",
                        ));
                    }
                }
            }
            Self::LoanTerm => {
                let years: u32 = value.parse().map_err(|_| {
                    ValidationError::new(field, format!("{value} is not a whole number of years"))
                })?;
                if !(1..=MAX_LOAN_TERM_YEARS).contains(&years) {
                    return Err(ValidationError::with_rule(
                        field,
                        format!("{years} must be between 1 and {MAX_LOAN_TERM_YEARS}"),
                        "range",
                    ));
                }
            }
            Self::MinimumGrade => {
                MinimumGrade::from_str(value)
                    .map_err(|e| ValidationError::new(field, e.to_string()))?;
            }
            Self::MinCapRate | Self::MinRoi | Self::MinCashFlow => {
                parse_f64(field, value)?;
            }
            Self::MinPrice | Self::MaxPrice => {
                let price = Decimal::from_str(value).map_err(|_| {
                    ValidationError::new(field, format!("{value} is not a price"))
                })?;
                if price.is_sign_negative() {
                    return Err(ValidationError::with_rule(
                        field,
                        "price cannot be negative",
                        "non_negative",
                    ));
                }
            }
        }
        Ok(())
    }

    /// All keys, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::ExpenseRatio,
            Self::DownPayment,
            Self::InterestRate,
            Self::LoanTerm,
            Self::MinimumGrade,
            Self::MinCapRate,
            Self::MinRoi,
            Self::MinCashFlow,
            Self::MinPrice,
            Self::MaxPrice,
        ]
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::parse(s).ok_or_else(|| ConfigError::UnknownKey { key: s.to_string() })
    }
}

fn parse_f64(field: &str, value: &str) -> Result<f64, ValidationError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::new(field, format!("{value} is not a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(PreferenceKey::parse("rate"), Some(PreferenceKey::InterestRate));
        assert_eq!(PreferenceKey::parse("Loan-Term"), Some(PreferenceKey::LoanTerm));
        assert_eq!(PreferenceKey::parse("min_grade"), Some(PreferenceKey::MinimumGrade));
        assert_eq!(PreferenceKey::parse("currency"), None);
        assert!(matches!(
            "currency".parse::<PreferenceKey>(),
            Err(ConfigError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for key in PreferenceKey::all() {
            assert_eq!(PreferenceKey::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        for key in PreferenceKey::all() {
            assert!(
                key.validate_value(key.default_value()).is_ok(),
                "default for {key} rejected"
            );
        }
    }

    #[test]
    fn test_validation() {
        use PreferenceKey as K;

        assert!(K::ExpenseRatio.validate_value("1").is_ok());
        assert!(K::ExpenseRatio.validate_value("1.2").is_err());
        assert!(K::InterestRate.validate_value("1").is_err());
        assert!(K::InterestRate.validate_value("0").is_ok());
        assert!(K::DownPayment.validate_value("25%").is_ok());
        assert!(K::DownPayment.validate_value("75000").is_ok());
        assert!(K::DownPayment.validate_value("150%").is_err());
        assert!(K::DownPayment.validate_value("lots").is_err());
        assert!(K::LoanTerm.validate_value("0").is_err());
        assert!(K::LoanTerm.validate_value("51").is_err());
        assert!(K::LoanTerm.validate_value("15").is_ok());
        assert!(K::MinimumGrade.validate_value("any").is_ok());
        assert!(K::MinimumGrade.validate_value("E").is_err());
        assert!(K::MinCashFlow.validate_value("-200").is_ok());
        assert!(K::MinRoi.validate_value("NaN").is_err());
        assert!(K::MaxPrice.validate_value("-1").is_err());
    }
}
