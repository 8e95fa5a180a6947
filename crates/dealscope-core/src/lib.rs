//! # Dealscope Core
//!
//! Core types and errors for the Dealscope real-estate deal analysis library.
//!
//! This crate provides the foundational building blocks used throughout Dealscope:
//!
//! - **Property inputs**: [`PropertyFacts`] validated from raw [`PropertyListing`] records
//! - **Financing**: [`FinancingAssumptions`] with industry-typical defaults
//! - **Results**: [`PropertyMetrics`] and [`DealGrade`] produced by the analytics crate
//! - **Preferences**: [`InvestmentPreferences`] used to screen graded deals
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: raw listings become `PropertyFacts` once, and
//!   everything downstream is infallible
//! - **Defaults over rejection**: missing optional inputs are filled, never errors
//! - **Plain data**: every result is an immutable value recomputed per call
//!
//! ## Example
//!
//! ```rust
//! use dealscope_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let facts = PropertyFacts::new(dec!(325000))
//!     .unwrap()
//!     .with_year_built(2019);
//! assert_eq!(facts.monthly_rent(), 2600.0);
//!
//! let assumptions = FinancingAssumptions::default().with_interest_rate(0.065);
//! assert_eq!(assumptions.down_payment_amount(325_000.0), 65_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DealError, DealResult};
    pub use crate::types::{
        DealGrade, DownPayment, FinancingAssumptions, Grade, InvestmentPreferences,
        MinimumGrade, PropertyFacts, PropertyListing, PropertyMetrics, ScoreBreakdown,
    };
}

// Re-export commonly used types at crate root
pub use error::{DealError, DealResult};
pub use types::{
    DealGrade, DownPayment, FinancingAssumptions, Grade, InvestmentPreferences, MinimumGrade,
    PropertyFacts, PropertyListing, PropertyMetrics, ScoreBreakdown,
};
