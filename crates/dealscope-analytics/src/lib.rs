//! # Dealscope Analytics
//!
//! The deal analysis engine: turns [`PropertyFacts`] and
//! [`FinancingAssumptions`] into [`PropertyMetrics`], and metrics into a
//! letter [`DealGrade`].
//!
//! ## Modules
//!
//! - [`mortgage`]: amortizing loan payments
//! - [`metrics`]: cap rate, cash flow, ROI, DSCR, GRM, break-even
//! - [`risk`]: 1-10 composite risk score
//! - [`grading`]: scoring table and letter grade
//! - [`screening`]: matching graded deals against investor preferences
//! - [`batch`]: analyzing many listings at once
//! - [`rounding`]: half-up rounding used in report text
//!
//! Every function here is pure: identical inputs (including the as-of year)
//! give identical outputs, and calls may run concurrently on any thread.
//!
//! ## Example
//!
//! ```rust
//! use dealscope_analytics::prelude::*;
//! use dealscope_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let facts = PropertyFacts::from_parts(dec!(200000), Some(dec!(2500)), Some(2010)).unwrap();
//! let metrics = analyze_property_as_of(&facts, &FinancingAssumptions::default(), 2026);
//! let grade = grade_deal(&metrics);
//!
//! assert_eq!(metrics.risk_score, 3);
//! assert_eq!(grade.grade, Grade::B);
//! assert_eq!(grade.score, 83);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: analyze batches on the rayon thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod batch;
pub mod grading;
pub mod metrics;
pub mod mortgage;
pub mod risk;
pub mod rounding;
pub mod screening;

pub use batch::{
    compare_by_score, grade_distribution, rank_by_score, BatchAnalyzer, DealAnalyzer, DealReport,
};
pub use grading::grade_deal;
pub use metrics::{
    analyze_property, analyze_property_as_of, cap_rate, cash_on_cash_return,
    return_on_investment, APPRECIATION_RATE,
};
pub use mortgage::{annual_debt_service, monthly_payment};
pub use risk::{risk_score, RiskFactors};
pub use rounding::{fixed, round_half_up};
pub use screening::{screen_deal, screen_listing, ScreenFailure, Screening};

// Re-export the core types callers need alongside the engine
pub use dealscope_core::{
    DealError, DealGrade, DealResult, FinancingAssumptions, Grade, InvestmentPreferences,
    PropertyFacts, PropertyListing, PropertyMetrics,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{BatchAnalyzer, DealAnalyzer, DealReport};
    pub use crate::grading::grade_deal;
    pub use crate::metrics::{analyze_property, analyze_property_as_of};
    pub use crate::screening::{screen_deal, screen_listing, Screening};
}
