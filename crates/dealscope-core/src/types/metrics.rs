//! Financial metrics derived for a property.

use serde::{Deserialize, Serialize};

/// DSCR reported when there is no debt service: income always covers it.
pub const DSCR_NO_DEBT: f64 = 999.0;

/// Financial metrics for a single property under one set of assumptions.
///
/// Percentages (`cap_rate`, `cash_on_cash_return`, `roi`) are expressed in
/// percent units (5.2 = 5.2%). Currency values are annual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    /// Net operating income over price, in percent.
    pub cap_rate: f64,
    /// Annual cash flow over down payment, in percent.
    pub cash_on_cash_return: f64,
    /// Annual rent less operating expenses.
    pub net_operating_income: f64,
    /// Annual NOI less annual mortgage payments.
    pub cash_flow: f64,
    /// Cash flow plus 3% appreciation, over down payment, in percent.
    pub roi: f64,
    /// Periods to recover the down payment; 0 when cash flow is non-negative.
    pub break_even_point: u32,
    /// Price over gross annual rent.
    pub gross_rent_multiplier: f64,
    /// NOI over annual debt service ([`DSCR_NO_DEBT`] when unleveraged).
    pub debt_service_coverage_ratio: f64,
    /// Composite risk from 1 (lowest) to 10.
    pub risk_score: u8,
}

impl PropertyMetrics {
    /// Cash flow per month.
    pub fn monthly_cash_flow(&self) -> f64 {
        self.cash_flow / 12.0
    }

    /// Whether the property carries a mortgage.
    pub fn has_debt(&self) -> bool {
        self.debt_service_coverage_ratio != DSCR_NO_DEBT
    }

    /// Whether annual cash flow is non-negative.
    pub fn is_cash_flow_positive(&self) -> bool {
        self.cash_flow >= 0.0
    }
}
