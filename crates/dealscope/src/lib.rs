//! # Dealscope
//!
//! Rental property deal analysis: investment metrics and a letter grade from
//! a price, a rent estimate and financing assumptions.
//!
//! This crate re-exports [`dealscope_core`] (domain types and errors) and
//! [`dealscope_analytics`] (calculator, grader, screening, batch analysis)
//! under one name.
//!
//! ```rust
//! use dealscope::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let facts = PropertyFacts::from_parts(dec!(450000), Some(dec!(2800)), Some(2018))?;
//! let metrics = analyze_property_as_of(&facts, &FinancingAssumptions::default(), 2026);
//! let grade = grade_deal(&metrics);
//!
//! assert_eq!(grade.grade, Grade::F);
//! assert_eq!(grade.score, 10);
//! # Ok::<(), dealscope::DealError>(())
//! ```

#![warn(missing_docs)]

pub use dealscope_analytics;
pub use dealscope_core;

pub use dealscope_analytics::{
    analyze_property, analyze_property_as_of, grade_deal, screen_deal, screen_listing,
    BatchAnalyzer, DealAnalyzer, DealReport, Screening,
};
pub use dealscope_core::{
    DealError, DealGrade, DealResult, DownPayment, FinancingAssumptions, Grade,
    InvestmentPreferences, MinimumGrade, PropertyFacts, PropertyListing, PropertyMetrics,
};

/// Everything needed for typical use.
pub mod prelude {
    pub use dealscope_analytics::prelude::*;
    pub use dealscope_core::prelude::*;
}
