//! Analyzing one or many listings under a fixed set of assumptions.
//!
//! [`DealAnalyzer`] pins the financing assumptions and the as-of year so a
//! run is reproducible. [`BatchAnalyzer`] applies it across a slice of
//! listings; with the `parallel` feature the work is spread over rayon's
//! thread pool. Each analysis is independent, so ordering is preserved and
//! no coordination is needed.

use std::cmp::Ordering;

use chrono::{Datelike, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealscope_core::error::DealResult;
use dealscope_core::types::{
    DealGrade, FinancingAssumptions, Grade, PropertyFacts, PropertyListing, PropertyMetrics,
};

use crate::grading::grade_deal;
use crate::metrics::analyze_property_as_of;

/// Metrics and grade for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealReport {
    /// Listing identifier (empty for ad-hoc facts).
    pub listing_id: String,
    /// Purchase price.
    pub price: Decimal,
    /// Computed metrics.
    pub metrics: PropertyMetrics,
    /// Grade derived from the metrics.
    pub grade: DealGrade,
}

/// Runs the metrics calculator and grader with fixed assumptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealAnalyzer {
    assumptions: FinancingAssumptions,
    as_of_year: i32,
}

impl Default for DealAnalyzer {
    fn default() -> Self {
        Self::new(FinancingAssumptions::default())
    }
}

impl DealAnalyzer {
    /// Creates an analyzer measuring property age from the current year.
    pub fn new(assumptions: FinancingAssumptions) -> Self {
        Self {
            assumptions,
            as_of_year: Utc::now().year(),
        }
    }

    /// Pins the year used for property age.
    #[must_use]
    pub fn with_as_of_year(mut self, year: i32) -> Self {
        self.as_of_year = year;
        self
    }

    /// Financing assumptions in use.
    pub fn assumptions(&self) -> &FinancingAssumptions {
        &self.assumptions
    }

    /// Year used for property age.
    pub fn as_of_year(&self) -> i32 {
        self.as_of_year
    }

    /// Computes metrics only.
    pub fn metrics(&self, facts: &PropertyFacts) -> PropertyMetrics {
        analyze_property_as_of(facts, &self.assumptions, self.as_of_year)
    }

    /// Computes metrics and grade for validated facts.
    pub fn analyze(&self, listing_id: impl Into<String>, facts: &PropertyFacts) -> DealReport {
        let metrics = self.metrics(facts);
        let grade = grade_deal(&metrics);
        DealReport {
            listing_id: listing_id.into(),
            price: facts.price(),
            metrics,
            grade,
        }
    }

    /// Validates a raw listing, then analyzes it.
    ///
    /// # Errors
    ///
    /// Returns the listing's validation error; nothing is computed for it.
    pub fn analyze_listing(&self, listing: &PropertyListing) -> DealResult<DealReport> {
        let facts = listing.facts()?;
        Ok(self.analyze(listing.id.clone(), &facts))
    }
}

/// Analyzes many listings with one [`DealAnalyzer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchAnalyzer {
    analyzer: DealAnalyzer,
}

impl BatchAnalyzer {
    /// Creates a batch analyzer.
    #[must_use]
    pub fn new(analyzer: DealAnalyzer) -> Self {
        Self { analyzer }
    }

    /// The per-listing analyzer.
    pub fn analyzer(&self) -> &DealAnalyzer {
        &self.analyzer
    }

    /// Analyzes each listing; results are in input order.
    ///
    /// A listing that fails validation yields an `Err` in its slot and does
    /// not affect the others.
    pub fn analyze_all(&self, listings: &[PropertyListing]) -> Vec<DealResult<DealReport>> {
        debug!("analyzing batch of {} listings", listings.len());
        let results = self.run(listings);

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            warn!("skipped listing: {err}");
        }
        results
    }

    /// Analyzes each listing, keeping only the valid ones.
    pub fn analyze_valid(&self, listings: &[PropertyListing]) -> Vec<DealReport> {
        self.analyze_all(listings)
            .into_iter()
            .filter_map(Result::ok)
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run(&self, listings: &[PropertyListing]) -> Vec<DealResult<DealReport>> {
        use rayon::prelude::*;

        listings
            .par_iter()
            .map(|listing| self.analyzer.analyze_listing(listing))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, listings: &[PropertyListing]) -> Vec<DealResult<DealReport>> {
        listings
            .iter()
            .map(|listing| self.analyzer.analyze_listing(listing))
            .collect()
    }
}

/// Orders reports best first: by score, then cap rate.
pub fn compare_by_score(a: &DealReport, b: &DealReport) -> Ordering {
    b.grade.score.cmp(&a.grade.score).then_with(|| {
        b.metrics
            .cap_rate
            .partial_cmp(&a.metrics.cap_rate)
            .unwrap_or(Ordering::Equal)
    })
}

/// Sorts reports best first with [`compare_by_score`]. Stable for ties.
pub fn rank_by_score(reports: &mut [DealReport]) {
    reports.sort_by(compare_by_score);
}

/// Counts reports per grade, best grade first. Grades with no reports are included.
pub fn grade_distribution(reports: &[DealReport]) -> Vec<(Grade, usize)> {
    Grade::ALL
        .iter()
        .map(|grade| {
            let count = reports.iter().filter(|r| r.grade.grade == *grade).count();
            (*grade, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing(id: &str, price: Decimal, rent: Option<Decimal>, year: Option<i32>) -> PropertyListing {
        let mut l = PropertyListing::new(id, price);
        l.rent_estimate = rent;
        l.year_built = year;
        l
    }

    fn sample() -> Vec<PropertyListing> {
        vec![
            listing("prop-001", dec!(450000), Some(dec!(2800)), Some(2018)),
            listing("prop-bad", dec!(0), None, None),
            listing("prop-004", dec!(200000), Some(dec!(2500)), Some(2010)),
            listing("prop-003", dec!(325000), None, Some(2019)),
        ]
    }

    #[test]
    fn test_analyzer_pins_year() {
        let analyzer = DealAnalyzer::default().with_as_of_year(2026);
        assert_eq!(analyzer.as_of_year(), 2026);

        let facts = PropertyFacts::from_parts(dec!(450000), Some(dec!(2800)), Some(2018)).unwrap();
        let report = analyzer.analyze("prop-001", &facts);
        assert_eq!(report.grade.score, 10);
        assert_eq!(report.grade.grade, Grade::F);
        assert_eq!(report.price, dec!(450000));
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_errors() {
        let batch = BatchAnalyzer::new(DealAnalyzer::default().with_as_of_year(2026));
        let results = batch.analyze_all(&sample());

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().listing_id, "prop-001");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().listing_id, "prop-004");
        assert_eq!(results[3].as_ref().unwrap().listing_id, "prop-003");
    }

    #[test]
    fn test_rank_and_distribution() {
        let batch = BatchAnalyzer::new(DealAnalyzer::default().with_as_of_year(2026));
        let mut reports = batch.analyze_valid(&sample());
        assert_eq!(reports.len(), 3);

        rank_by_score(&mut reports);
        let order: Vec<_> = reports.iter().map(|r| r.listing_id.as_str()).collect();
        assert_eq!(order, vec!["prop-004", "prop-003", "prop-001"]);

        let dist = grade_distribution(&reports);
        assert_eq!(dist[1], (Grade::B, 1));
        assert_eq!(dist[4], (Grade::F, 2));
        assert_eq!(dist.iter().map(|(_, n)| n).sum::<usize>(), 3);
    }
}
