//! Property metrics calculator.
//!
//! Computes, in order:
//!
//! 1. Gross annual rent (estimate, or 0.8% of price per month)
//! 2. Operating expenses and net operating income (NOI)
//! 3. Down payment, loan amount, and annual debt service
//! 4. Cash flow, cap rate, cash-on-cash return, ROI
//! 5. Break-even, gross rent multiplier, DSCR, and the risk score
//!
//! The calculator never fails: optional inputs are defaulted and the
//! zero-rate, zero-debt and non-negative cash flow cases have explicit
//! branches. A positive price is guaranteed by [`PropertyFacts`].

use chrono::{Datelike, Utc};
use log::{debug, trace};

use dealscope_core::types::{FinancingAssumptions, PropertyFacts, PropertyMetrics, DSCR_NO_DEBT};

use crate::mortgage::annual_debt_service;
use crate::risk::{risk_score, RiskFactors};

/// Annual appreciation credited to ROI as profit.
pub const APPRECIATION_RATE: f64 = 0.03;

/// Cap rate: annual NOI over property value, in percent.
pub fn cap_rate(annual_noi: f64, property_value: f64) -> f64 {
    annual_noi / property_value * 100.0
}

/// Cash-on-cash return: annual cash flow over cash invested, in percent.
pub fn cash_on_cash_return(annual_cash_flow: f64, total_investment: f64) -> f64 {
    annual_cash_flow / total_investment * 100.0
}

/// Return on investment: annual profit over cash invested, in percent.
pub fn return_on_investment(annual_profit: f64, total_investment: f64) -> f64 {
    annual_profit / total_investment * 100.0
}

/// Analyzes a property as of the current calendar year (UTC).
///
/// Property age, and therefore the risk score, depends on the clock; use
/// [`analyze_property_as_of`] for reproducible results.
pub fn analyze_property(
    facts: &PropertyFacts,
    assumptions: &FinancingAssumptions,
) -> PropertyMetrics {
    analyze_property_as_of(facts, assumptions, Utc::now().year())
}

/// Analyzes a property with property age measured at `current_year`.
///
/// # Example
///
/// ```rust
/// use dealscope_analytics::metrics::analyze_property_as_of;
/// use dealscope_core::types::{FinancingAssumptions, PropertyFacts};
/// use rust_decimal_macros::dec;
///
/// let facts = PropertyFacts::new(dec!(325000)).unwrap();
/// let metrics = analyze_property_as_of(&facts, &FinancingAssumptions::default(), 2026);
///
/// // Rent defaults to 0.8% of price: 2600/month
/// assert!((metrics.gross_rent_multiplier - 325_000.0 / 31_200.0).abs() < 1e-9);
/// ```
pub fn analyze_property_as_of(
    facts: &PropertyFacts,
    assumptions: &FinancingAssumptions,
    current_year: i32,
) -> PropertyMetrics {
    let price = facts.price_f64();

    let annual_rent = facts.annual_rent();
    let annual_expenses = annual_rent * assumptions.expense_ratio;
    let noi = annual_rent - annual_expenses;

    let down_payment = assumptions.down_payment_amount(price);
    let loan_amount = price - down_payment;
    let annual_mortgage = annual_debt_service(
        loan_amount,
        assumptions.interest_rate,
        assumptions.loan_term_years,
    );
    trace!(
        "rent={:.2}/yr expenses={:.2} down={:.2} loan={:.2} debt_service={:.2}",
        annual_rent,
        annual_expenses,
        down_payment,
        loan_amount,
        annual_mortgage
    );

    let cash_flow = noi - annual_mortgage;
    let cap = cap_rate(noi, price);

    // Literal: annual cash flow against the down payment
    let break_even_point = if cash_flow >= 0.0 {
        0
    } else {
        (down_payment / cash_flow).abs().ceil() as u32
    };

    let dscr = if annual_mortgage > 0.0 {
        noi / annual_mortgage
    } else {
        DSCR_NO_DEBT
    };

    let factors = RiskFactors {
        property_age: facts.age_in(current_year),
        cap_rate: cap,
        cash_flow,
        dscr,
    };

    let metrics = PropertyMetrics {
        cap_rate: cap,
        cash_on_cash_return: cash_on_cash_return(cash_flow, down_payment),
        net_operating_income: noi,
        cash_flow,
        roi: return_on_investment(cash_flow + price * APPRECIATION_RATE, down_payment),
        break_even_point,
        gross_rent_multiplier: price / annual_rent,
        debt_service_coverage_ratio: dscr,
        risk_score: risk_score(&factors),
    };

    debug!(
        "analyzed price={:.0} cap_rate={:.2}% cash_flow={:.2} dscr={:.2} risk={}",
        price, metrics.cap_rate, metrics.cash_flow, metrics.debt_service_coverage_ratio,
        metrics.risk_score
    );

    metrics
}
