//! Financing assumptions applied when analyzing a property.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DealError, DealResult};

/// Share of gross rent consumed by operating expenses (typical residential 40-50%).
pub const DEFAULT_EXPENSE_RATIO: f64 = 0.45;

/// Down payment as a share of price.
pub const DEFAULT_DOWN_PAYMENT_FRACTION: f64 = 0.20;

/// Annual mortgage interest rate.
pub const DEFAULT_INTEREST_RATE: f64 = 0.06;

/// Mortgage term in years.
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;

/// Longest mortgage term accepted.
pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Cash put down at purchase, either relative to price or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownPayment {
    /// Share of the purchase price (0.2 = 20%).
    Fraction(f64),
    /// Fixed currency amount.
    Amount(Decimal),
}

impl Default for DownPayment {
    fn default() -> Self {
        Self::Fraction(DEFAULT_DOWN_PAYMENT_FRACTION)
    }
}

impl DownPayment {
    /// Resolves the down payment in currency for a given price.
    pub fn resolve(&self, price: f64) -> f64 {
        match self {
            Self::Fraction(fraction) => price * fraction,
            Self::Amount(amount) => amount.to_f64().unwrap_or(0.0),
        }
    }
}

impl fmt::Display for DownPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction(fraction) => write!(f, "{}%", (fraction * 10_000.0).round() / 100.0),
            Self::Amount(amount) => write!(f, "${amount}"),
        }
    }
}

/// Parses `"20%"` and `"0.2"` as fractions. A bare number above 1 is an
/// amount, and a `$` prefix always means an amount (`"$1"` is one dollar).
impl FromStr for DownPayment {
    type Err = DealError;

    fn from_str(s: &str) -> DealResult<Self> {
        let s = s.trim();
        let invalid = || {
            DealError::invalid_assumption(
                "down_payment",
                format!("'{s}' is not a percentage, fraction, or amount"),
            )
        };

        if let Some(pct) = s.strip_suffix('%') {
            let pct: f64 = pct.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::Fraction(pct / 100.0));
        }

        if let Some(amount) = s.strip_prefix('$') {
            let amount = Decimal::from_str(amount.trim()).map_err(|_| invalid())?;
            return Ok(Self::Amount(amount));
        }

        let value = Decimal::from_str(s).map_err(|_| invalid())?;
        if value <= Decimal::ONE {
            Ok(Self::Fraction(value.to_f64().ok_or_else(invalid)?))
        } else {
            Ok(Self::Amount(value))
        }
    }
}

/// Financing assumptions used to derive mortgage payments and returns.
///
/// Every field has a default; callers override only what they know.
///
/// # Example
///
/// ```rust
/// use dealscope_core::types::{DownPayment, FinancingAssumptions};
/// use rust_decimal_macros::dec;
///
/// let assumptions = FinancingAssumptions::default()
///     .with_down_payment(DownPayment::Amount(dec!(50000)))
///     .with_loan_term_years(15);
///
/// assert_eq!(assumptions.down_payment_amount(400_000.0), 50_000.0);
/// assert_eq!(assumptions.total_payments(), 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingAssumptions {
    /// Operating expenses as a share of gross rent.
    #[serde(default = "default_expense_ratio")]
    pub expense_ratio: f64,

    /// Down payment.
    #[serde(default)]
    pub down_payment: DownPayment,

    /// Annual interest rate as a decimal (0.06 = 6%).
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Mortgage term in years.
    #[serde(default = "default_loan_term")]
    pub loan_term_years: u32,
}

fn default_expense_ratio() -> f64 {
    DEFAULT_EXPENSE_RATIO
}

fn default_interest_rate() -> f64 {
    DEFAULT_INTEREST_RATE
}

fn default_loan_term() -> u32 {
    DEFAULT_LOAN_TERM_YEARS
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            expense_ratio: DEFAULT_EXPENSE_RATIO,
            down_payment: DownPayment::default(),
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
        }
    }
}

impl FinancingAssumptions {
    /// Sets the expense ratio.
    pub fn with_expense_ratio(mut self, ratio: f64) -> Self {
        self.expense_ratio = ratio;
        self
    }

    /// Sets the down payment.
    pub fn with_down_payment(mut self, down_payment: DownPayment) -> Self {
        self.down_payment = down_payment;
        self
    }

    /// Sets the annual interest rate.
    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = rate;
        self
    }

    /// Sets the loan term in years.
    pub fn with_loan_term_years(mut self, years: u32) -> Self {
        self.loan_term_years = years;
        self
    }

    /// Down payment in currency for a given price.
    pub fn down_payment_amount(&self, price: f64) -> f64 {
        self.down_payment.resolve(price)
    }

    /// Periodic (monthly) interest rate.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 12.0
    }

    /// Number of monthly payments over the loan term.
    pub fn total_payments(&self) -> u32 {
        self.loan_term_years.saturating_mul(12)
    }

    /// Checks that every assumption is within a usable range.
    ///
    /// # Errors
    ///
    /// Returns `DealError::InvalidAssumption` naming the first offending field.
    pub fn validate(&self) -> DealResult<()> {
        if !(0.0..=1.0).contains(&self.expense_ratio) {
            return Err(DealError::invalid_assumption(
                "expense_ratio",
                "must be between 0 and 1",
            ));
        }
        if !(0.0..1.0).contains(&self.interest_rate) {
            return Err(DealError::invalid_assumption(
                "interest_rate",
                "must be at least 0 and below 1",
            ));
        }
        if !(1..=MAX_LOAN_TERM_YEARS).contains(&self.loan_term_years) {
            return Err(DealError::invalid_assumption(
                "loan_term_years",
                format!("must be between 1 and {MAX_LOAN_TERM_YEARS}"),
            ));
        }
        match self.down_payment {
            DownPayment::Fraction(f) if !(0.0..=1.0).contains(&f) => Err(
                DealError::invalid_assumption("down_payment", "fraction must be between 0 and 1"),
            ),
            DownPayment::Amount(a) if a < Decimal::ZERO => Err(DealError::invalid_assumption(
                "down_payment",
                "amount cannot be negative",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let a = FinancingAssumptions::default();
        assert_eq!(a.expense_ratio, 0.45);
        assert_eq!(a.interest_rate, 0.06);
        assert_eq!(a.loan_term_years, 30);
        assert_eq!(a.total_payments(), 360);
        assert_eq!(a.down_payment_amount(450_000.0), 90_000.0);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_down_payment_parsing() {
        assert_eq!("20%".parse::<DownPayment>().unwrap(), DownPayment::Fraction(0.2));
        assert_eq!("0.25".parse::<DownPayment>().unwrap(), DownPayment::Fraction(0.25));
        assert_eq!(
            "90000".parse::<DownPayment>().unwrap(),
            DownPayment::Amount(dec!(90000))
        );
        assert_eq!(
            "$50000".parse::<DownPayment>().unwrap(),
            DownPayment::Amount(dec!(50000))
        );
        assert!("lots".parse::<DownPayment>().is_err());
    }

    #[test]
    fn test_dollar_prefix_is_always_an_amount() {
        assert_eq!("$1".parse::<DownPayment>().unwrap(), DownPayment::Amount(dec!(1)));
        assert_eq!(
            "$0.50".parse::<DownPayment>().unwrap(),
            DownPayment::Amount(dec!(0.50))
        );
        assert_eq!("1".parse::<DownPayment>().unwrap(), DownPayment::Fraction(1.0));
        assert!("$".parse::<DownPayment>().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let a = FinancingAssumptions::default().with_expense_ratio(1.5);
        assert!(a.validate().is_err());

        let a = FinancingAssumptions::default().with_loan_term_years(0);
        assert!(a.validate().is_err());

        let a = FinancingAssumptions::default().with_down_payment(DownPayment::Fraction(1.2));
        assert!(a.validate().is_err());

        let a = FinancingAssumptions::default().with_interest_rate(0.0);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_total_payments_saturates() {
        let a = FinancingAssumptions::default().with_loan_term_years(u32::MAX);
        assert_eq!(a.total_payments(), u32::MAX);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let a: FinancingAssumptions = serde_json::from_str(r#"{"interestRate": 0.07}"#).unwrap();
        assert_eq!(a.interest_rate, 0.07);
        assert_eq!(a.expense_ratio, DEFAULT_EXPENSE_RATIO);
        assert_eq!(a.down_payment, DownPayment::Fraction(0.2));
    }
}
