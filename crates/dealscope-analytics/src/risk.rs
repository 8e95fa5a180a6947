//! Composite risk score.
//!
//! Risk points accumulate from four independent factors:
//!
//! | Factor | Condition | Points |
//! |---|---|---|
//! | Property age | > 30 years | 2 |
//! | | > 15 years | 1 |
//! | Cap rate | < 4% | 2 |
//! | | < 6% | 1 |
//! | Cash flow | negative | 3 |
//! | DSCR | < 1.2 | 2 |
//! | | < 1.5 | 1 |
//!
//! The score is `round(points × 1.5)` clamped to 1..=10, lower being safer.

use serde::{Deserialize, Serialize};

use crate::rounding::round_half_up;

/// Lowest possible risk score.
pub const MIN_RISK_SCORE: u8 = 1;

/// Highest possible risk score.
pub const MAX_RISK_SCORE: u8 = 10;

const POINT_SCALE: f64 = 1.5;

/// Inputs to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Property age in years.
    pub property_age: i32,
    /// Cap rate in percent.
    pub cap_rate: f64,
    /// Annual cash flow.
    pub cash_flow: f64,
    /// Debt service coverage ratio.
    pub dscr: f64,
}

impl RiskFactors {
    /// Points from property age.
    pub fn age_points(&self) -> u32 {
        if self.property_age > 30 {
            2
        } else if self.property_age > 15 {
            1
        } else {
            0
        }
    }

    /// Points from a thin cap rate.
    pub fn cap_rate_points(&self) -> u32 {
        if self.cap_rate < 4.0 {
            2
        } else if self.cap_rate < 6.0 {
            1
        } else {
            0
        }
    }

    /// Points from negative cash flow.
    pub fn cash_flow_points(&self) -> u32 {
        if self.cash_flow < 0.0 {
            3
        } else {
            0
        }
    }

    /// Points from weak debt coverage.
    pub fn dscr_points(&self) -> u32 {
        if self.dscr < 1.2 {
            2
        } else if self.dscr < 1.5 {
            1
        } else {
            0
        }
    }

    /// Total risk points (0-9).
    pub fn points(&self) -> u32 {
        self.age_points() + self.cap_rate_points() + self.cash_flow_points() + self.dscr_points()
    }
}

/// Scales risk points to a 1-10 score.
///
/// # Example
///
/// ```rust
/// use dealscope_analytics::risk::{risk_score, RiskFactors};
///
/// let factors = RiskFactors { property_age: 8, cap_rate: 4.1, cash_flow: -7420.0, dscr: 0.71 };
/// assert_eq!(factors.points(), 6);
/// assert_eq!(risk_score(&factors), 9);
/// ```
pub fn risk_score(factors: &RiskFactors) -> u8 {
    let scaled = round_half_up(f64::from(factors.points()) * POINT_SCALE);
    scaled.clamp(f64::from(MIN_RISK_SCORE), f64::from(MAX_RISK_SCORE)) as u8
}
