//! Screening graded deals against investor preferences.
//!
//! Grading is preference-independent; screening is the separate step that
//! decides whether a graded deal is worth surfacing to a particular investor.
//! Every failed criterion is reported, not just the first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use dealscope_core::types::{
    DealGrade, Grade, InvestmentPreferences, PropertyFacts, PropertyListing, PropertyMetrics,
};

/// A single preference a deal did not meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum ScreenFailure {
    /// Price outside the accepted range.
    PriceOutOfRange {
        /// Listing price.
        price: Decimal,
        /// Lowest accepted price.
        min: Decimal,
        /// Highest accepted price.
        max: Decimal,
    },
    /// Grade below the investor's minimum.
    GradeBelowMinimum {
        /// Deal grade.
        grade: Grade,
        /// Minimum accepted grade.
        minimum: Grade,
    },
    /// Cap rate below the minimum.
    CapRateBelowMinimum {
        /// Deal cap rate, percent.
        cap_rate: f64,
        /// Minimum cap rate, percent.
        minimum: f64,
    },
    /// ROI below the minimum.
    RoiBelowMinimum {
        /// Deal ROI, percent.
        roi: f64,
        /// Minimum ROI, percent.
        minimum: f64,
    },
    /// Monthly cash flow below the minimum.
    CashFlowBelowMinimum {
        /// Deal cash flow per month.
        monthly: f64,
        /// Minimum cash flow per month.
        minimum: f64,
    },
    /// Property type not among the accepted types.
    PropertyTypeExcluded {
        /// Listing property type.
        property_type: String,
    },
    /// Location not among the accepted locations.
    LocationExcluded {
        /// Listing location.
        location: String,
    },
    /// Fewer bedrooms than required.
    TooFewBedrooms {
        /// Listing bedrooms.
        beds: u32,
        /// Required bedrooms.
        minimum: u32,
    },
    /// Fewer bathrooms than required.
    TooFewBathrooms {
        /// Listing bathrooms.
        baths: f64,
        /// Required bathrooms.
        minimum: f64,
    },
}

impl fmt::Display for ScreenFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceOutOfRange { price, min, max } => {
                write!(f, "price ${price} outside ${min}-${max}")
            }
            Self::GradeBelowMinimum { grade, minimum } => {
                write!(f, "grade {grade} below minimum {minimum}")
            }
            Self::CapRateBelowMinimum { cap_rate, minimum } => {
                write!(f, "cap rate {cap_rate:.1}% below {minimum:.1}%")
            }
            Self::RoiBelowMinimum { roi, minimum } => {
                write!(f, "ROI {roi:.1}% below {minimum:.1}%")
            }
            Self::CashFlowBelowMinimum { monthly, minimum } => {
                write!(f, "cash flow ${monthly:.0}/month below ${minimum:.0}/month")
            }
            Self::PropertyTypeExcluded { property_type } => {
                write!(f, "property type '{property_type}' not wanted")
            }
            Self::LocationExcluded { location } => write!(f, "location '{location}' not wanted"),
            Self::TooFewBedrooms { beds, minimum } => {
                write!(f, "{beds} bedrooms, need {minimum}")
            }
            Self::TooFewBathrooms { baths, minimum } => {
                write!(f, "{baths} bathrooms, need {minimum}")
            }
        }
    }
}

/// Outcome of screening one deal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    /// Criteria the deal failed, in evaluation order.
    pub failures: Vec<ScreenFailure>,
}

impl Screening {
    /// Returns true if every criterion was met.
    pub fn passes(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Screens a deal on price and financial criteria.
pub fn screen_deal(
    facts: &PropertyFacts,
    metrics: &PropertyMetrics,
    grade: &DealGrade,
    preferences: &InvestmentPreferences,
) -> Screening {
    let mut failures = Vec::new();

    let price = facts.price();
    if price < preferences.min_price || price > preferences.max_price {
        failures.push(ScreenFailure::PriceOutOfRange {
            price,
            min: preferences.min_price,
            max: preferences.max_price,
        });
    }

    if let Some(minimum) = preferences.minimum_grade.grade() {
        if !grade.grade.is_at_least(minimum) {
            failures.push(ScreenFailure::GradeBelowMinimum {
                grade: grade.grade,
                minimum,
            });
        }
    }

    if metrics.cap_rate < preferences.min_cap_rate {
        failures.push(ScreenFailure::CapRateBelowMinimum {
            cap_rate: metrics.cap_rate,
            minimum: preferences.min_cap_rate,
        });
    }

    if metrics.roi < preferences.min_roi {
        failures.push(ScreenFailure::RoiBelowMinimum {
            roi: metrics.roi,
            minimum: preferences.min_roi,
        });
    }

    let monthly = metrics.monthly_cash_flow();
    if monthly < preferences.min_cash_flow {
        failures.push(ScreenFailure::CashFlowBelowMinimum {
            monthly,
            minimum: preferences.min_cash_flow,
        });
    }

    Screening { failures }
}

/// Screens a deal on financial criteria plus listing attributes
/// (property type, location, bedrooms, bathrooms).
pub fn screen_listing(
    listing: &PropertyListing,
    facts: &PropertyFacts,
    metrics: &PropertyMetrics,
    grade: &DealGrade,
    preferences: &InvestmentPreferences,
) -> Screening {
    let mut screening = screen_deal(facts, metrics, grade, preferences);

    if !matches_any(&preferences.property_types, &listing.property_type) {
        screening.failures.push(ScreenFailure::PropertyTypeExcluded {
            property_type: listing.property_type.clone(),
        });
    }

    let location = listing.location();
    if !matches_any(&preferences.locations, &location) {
        screening
            .failures
            .push(ScreenFailure::LocationExcluded { location });
    }

    if listing.beds < preferences.min_bedrooms {
        screening.failures.push(ScreenFailure::TooFewBedrooms {
            beds: listing.beds,
            minimum: preferences.min_bedrooms,
        });
    }

    if listing.baths < preferences.min_bathrooms {
        screening.failures.push(ScreenFailure::TooFewBathrooms {
            baths: listing.baths,
            minimum: preferences.min_bathrooms,
        });
    }

    screening
}

/// Empty `accepted` matches everything.
fn matches_any(accepted: &[String], value: &str) -> bool {
    accepted.is_empty() || accepted.iter().any(|a| a.eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::grade_deal;
    use crate::metrics::analyze_property_as_of;
    use dealscope_core::types::{FinancingAssumptions, MinimumGrade};
    use rust_decimal_macros::dec;

    fn evaluate(listing: &PropertyListing) -> (PropertyFacts, PropertyMetrics, DealGrade) {
        let facts = listing.facts().unwrap();
        let metrics = analyze_property_as_of(&facts, &FinancingAssumptions::default(), 2026);
        let grade = grade_deal(&metrics);
        (facts, metrics, grade)
    }

    fn strong_listing() -> PropertyListing {
        let mut listing = PropertyListing::new("prop-100", dec!(100000));
        listing.rent_estimate = Some(dec!(1500));
        listing.year_built = Some(2020);
        listing.city = "Houston".into();
        listing.state = "TX".into();
        listing.property_type = "Townhouse".into();
        listing.beds = 3;
        listing.baths = 2.0;
        listing
    }

    #[test]
    fn test_permissive_passes_everything() {
        let listing = PropertyListing::new("p", dec!(900000));
        let (facts, metrics, grade) = evaluate(&listing);
        let screening =
            screen_listing(&listing, &facts, &metrics, &grade, &InvestmentPreferences::permissive());
        assert!(screening.passes());
    }

    #[test]
    fn test_strong_deal_passes_financial_screen() {
        let listing = strong_listing();
        let (facts, metrics, grade) = evaluate(&listing);
        assert_eq!(grade.grade, Grade::A);

        let prefs = InvestmentPreferences::default()
            .with_price_range(dec!(50000), dec!(500000))
            .with_min_cash_flow(300.0);
        assert!(screen_deal(&facts, &metrics, &grade, &prefs).passes());
    }

    #[test]
    fn test_reports_every_failure() {
        let mut listing = PropertyListing::new("prop-001", dec!(450000));
        listing.rent_estimate = Some(dec!(2800));
        listing.year_built = Some(2018);
        let (facts, metrics, grade) = evaluate(&listing);

        let prefs = InvestmentPreferences::default().with_price_range(dec!(100000), dec!(400000));
        let screening = screen_deal(&facts, &metrics, &grade, &prefs);

        assert!(!screening.passes());
        assert_eq!(screening.failures.len(), 3);
        assert!(matches!(
            screening.failures[0],
            ScreenFailure::PriceOutOfRange { .. }
        ));
        assert!(matches!(
            screening.failures[1],
            ScreenFailure::GradeBelowMinimum {
                grade: Grade::F,
                minimum: Grade::B
            }
        ));
        assert!(matches!(
            screening.failures[2],
            ScreenFailure::CashFlowBelowMinimum { .. }
        ));
    }

    #[test]
    fn test_listing_attributes() {
        let listing = strong_listing();
        let (facts, metrics, grade) = evaluate(&listing);

        let mut prefs = InvestmentPreferences::permissive()
            .with_property_type("single family")
            .with_location("austin, tx");
        prefs.min_bedrooms = 4;

        let screening = screen_listing(&listing, &facts, &metrics, &grade, &prefs);
        assert_eq!(screening.failures.len(), 3);
        assert_eq!(
            screening.failures[1].to_string(),
            "location 'Houston, TX' not wanted"
        );

        let prefs = InvestmentPreferences::permissive()
            .with_property_type("TOWNHOUSE")
            .with_location("Houston, TX")
            .with_minimum_grade(MinimumGrade::AtLeast(Grade::A));
        assert!(screen_listing(&listing, &facts, &metrics, &grade, &prefs).passes());
    }
}
