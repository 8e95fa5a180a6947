//! Domain types for Dealscope.
//!
//! Inputs ([`PropertyFacts`], [`FinancingAssumptions`]) and results
//! ([`PropertyMetrics`], [`DealGrade`]) exchanged with the analytics crate.

mod financing;
mod grade;
mod metrics;
mod preferences;
mod property;

pub use financing::{
    DownPayment, FinancingAssumptions, DEFAULT_DOWN_PAYMENT_FRACTION, DEFAULT_EXPENSE_RATIO,
    DEFAULT_INTEREST_RATE, DEFAULT_LOAN_TERM_YEARS, MAX_LOAN_TERM_YEARS,
};
pub use grade::{DealGrade, Grade, MinimumGrade, ScoreBreakdown};
pub use metrics::{PropertyMetrics, DSCR_NO_DEBT};
pub use preferences::InvestmentPreferences;
pub use property::{
    PropertyFacts, PropertyListing, DEFAULT_YEAR_BUILT, FALLBACK_RENT_RATIO, MAX_YEAR_BUILT,
    MIN_YEAR_BUILT,
};
