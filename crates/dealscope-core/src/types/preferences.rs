//! Investor preferences used to screen graded deals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::MinimumGrade;

/// What an investor is looking for in a deal.
///
/// Percent thresholds use percent units (5.0 = 5%). `min_cash_flow` is per
/// month. Empty `property_types` / `locations` place no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentPreferences {
    /// Lowest acceptable price.
    pub min_price: Decimal,
    /// Highest acceptable price.
    pub max_price: Decimal,
    /// Minimum projected ROI, in percent.
    pub min_roi: f64,
    /// Minimum monthly cash flow.
    pub min_cash_flow: f64,
    /// Minimum cap rate, in percent.
    pub min_cap_rate: f64,
    /// Lowest acceptable grade.
    pub minimum_grade: MinimumGrade,
    /// Accepted property types (case-insensitive).
    pub property_types: Vec<String>,
    /// Accepted "City, ST" locations (case-insensitive).
    pub locations: Vec<String>,
    /// Minimum bedrooms.
    pub min_bedrooms: u32,
    /// Minimum bathrooms.
    pub min_bathrooms: f64,
}

impl Default for InvestmentPreferences {
    fn default() -> Self {
        Self {
            min_price: dec!(200000),
            max_price: dec!(500000),
            min_roi: 5.0,
            min_cash_flow: 500.0,
            min_cap_rate: 4.0,
            minimum_grade: MinimumGrade::default(),
            property_types: Vec::new(),
            locations: Vec::new(),
            min_bedrooms: 0,
            min_bathrooms: 0.0,
        }
    }
}

impl InvestmentPreferences {
    /// Preferences that accept every deal.
    pub fn permissive() -> Self {
        Self {
            min_price: Decimal::ZERO,
            max_price: Decimal::MAX,
            min_roi: f64::NEG_INFINITY,
            min_cash_flow: f64::NEG_INFINITY,
            min_cap_rate: f64::NEG_INFINITY,
            minimum_grade: MinimumGrade::Any,
            ..Self::default()
        }
    }

    /// Sets the price range.
    pub fn with_price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Sets the minimum grade.
    pub fn with_minimum_grade(mut self, grade: MinimumGrade) -> Self {
        self.minimum_grade = grade;
        self
    }

    /// Sets the minimum cap rate (percent).
    pub fn with_min_cap_rate(mut self, cap_rate: f64) -> Self {
        self.min_cap_rate = cap_rate;
        self
    }

    /// Sets the minimum ROI (percent).
    pub fn with_min_roi(mut self, roi: f64) -> Self {
        self.min_roi = roi;
        self
    }

    /// Sets the minimum monthly cash flow.
    pub fn with_min_cash_flow(mut self, monthly: f64) -> Self {
        self.min_cash_flow = monthly;
        self
    }

    /// Adds an accepted property type.
    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_types.push(property_type.into());
        self
    }

    /// Adds an accepted location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }
}
