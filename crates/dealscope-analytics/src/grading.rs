//! Deal grading.
//!
//! Five metrics each contribute a bounded number of points, and each
//! contributes a message to strengths, weaknesses, or recommendations:
//!
//! | Metric | Max points |
//! |---|---|
//! | Cap rate | 25 |
//! | Cash flow | 25 |
//! | ROI | 20 |
//! | Risk score | 20 |
//! | DSCR | 10 |
//!
//! The total (0-100) maps to a letter grade: 85 A, 70 B, 55 C, 40 D, else F.

use log::debug;

use dealscope_core::types::{DealGrade, Grade, PropertyMetrics, ScoreBreakdown};

use crate::rounding::{fixed, round_half_up};

/// Monthly cash flow earning full marks.
const STRONG_MONTHLY_CASH_FLOW: f64 = 500.0;

/// Monthly shortfall still considered slight.
const SLIGHT_MONTHLY_SHORTFALL: f64 = 200.0;

#[derive(Debug, Default)]
struct Findings {
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    recommendations: Vec<String>,
}

/// Grades a deal from its metrics.
///
/// Never fails; every metric value, including the DSCR sentinel for
/// unleveraged purchases, falls into exactly one band.
///
/// # Example
///
/// ```rust
/// use dealscope_analytics::grading::grade_deal;
/// use dealscope_core::types::{Grade, PropertyMetrics};
///
/// let metrics = PropertyMetrics {
///     cap_rate: 9.9,
///     cash_on_cash_return: 12.6,
///     net_operating_income: 9_900.0,
///     cash_flow: 6_302.7,
///     roi: 18.6,
///     break_even_point: 0,
///     gross_rent_multiplier: 5.6,
///     debt_service_coverage_ratio: 2.75,
///     risk_score: 1,
/// };
/// let grade = grade_deal(&metrics);
///
/// assert_eq!(grade.grade, Grade::A);
/// assert_eq!(grade.score, 100);
/// assert!(grade.weaknesses.is_empty());
/// ```
pub fn grade_deal(metrics: &PropertyMetrics) -> DealGrade {
    let mut findings = Findings::default();

    let breakdown = ScoreBreakdown {
        cap_rate: score_cap_rate(metrics.cap_rate, &mut findings),
        cash_flow: score_cash_flow(metrics.cash_flow, &mut findings),
        roi: score_roi(metrics.roi, &mut findings),
        risk: score_risk(metrics.risk_score, &mut findings),
        dscr: score_dscr(metrics.debt_service_coverage_ratio, &mut findings),
    };

    let score = breakdown.total();
    let grade = Grade::from_score(score);
    debug!("graded {grade} ({score}/100): {breakdown:?}");

    DealGrade {
        grade,
        score,
        explanation: format!(
            "This property received a grade of {grade} ({score}/100) based on its financial performance metrics and risk profile."
        ),
        strengths: findings.strengths,
        weaknesses: findings.weaknesses,
        recommendations: findings.recommendations,
        breakdown,
    }
}

fn score_cap_rate(cap_rate: f64, findings: &mut Findings) -> u32 {
    let shown = fixed(cap_rate, 1);
    if cap_rate >= 8.0 {
        findings
            .strengths
            .push(format!("Excellent cap rate of {shown}%"));
        25
    } else if cap_rate >= 6.0 {
        findings
            .strengths
            .push(format!("Good cap rate of {shown}%"));
        20
    } else if cap_rate >= 4.0 {
        findings.recommendations.push(format!(
            "Average cap rate of {shown}%. Consider negotiating price to improve returns."
        ));
        10
    } else {
        findings.weaknesses.push(format!(
            "Low cap rate of {shown}%. This property may not generate sufficient income relative to its price."
        ));
        0
    }
}

fn score_cash_flow(annual_cash_flow: f64, findings: &mut Findings) -> u32 {
    let monthly = round_half_up(annual_cash_flow / 12.0);

    if annual_cash_flow >= STRONG_MONTHLY_CASH_FLOW * 12.0 {
        findings
            .strengths
            .push(format!("Strong positive cash flow of ${monthly:.0}/month"));
        25
    } else if annual_cash_flow > 0.0 {
        findings
            .strengths
            .push(format!("Positive cash flow of ${monthly:.0}/month"));
        15
    } else if annual_cash_flow > -SLIGHT_MONTHLY_SHORTFALL * 12.0 {
        findings.weaknesses.push(format!(
            "Slight negative cash flow of ${:.0}/month",
            monthly.abs()
        ));
        findings
            .recommendations
            .push("Consider strategies to increase rent or reduce expenses.".to_string());
        5
    } else {
        findings.weaknesses.push(format!(
            "Significant negative cash flow of ${:.0}/month",
            monthly.abs()
        ));
        findings
            .recommendations
            .push("This property may require significant additional monthly investment.".to_string());
        0
    }
}

fn score_roi(roi: f64, findings: &mut Findings) -> u32 {
    let shown = fixed(roi, 1);
    if roi >= 15.0 {
        findings
            .strengths
            .push(format!("Exceptional projected ROI of {shown}%"));
        20
    } else if roi >= 10.0 {
        findings
            .strengths
            .push(format!("Strong projected ROI of {shown}%"));
        15
    } else if roi >= 7.0 {
        findings.recommendations.push(format!(
            "Moderate ROI of {shown}%. Consider improvements to increase property value."
        ));
        10
    } else {
        findings
            .weaknesses
            .push(format!("Low projected ROI of {shown}%"));
        0
    }
}

fn score_risk(risk_score: u8, findings: &mut Findings) -> u32 {
    if risk_score <= 3 {
        findings.strengths.push("Low risk investment".to_string());
        20
    } else if risk_score <= 5 {
        findings.strengths.push("Moderate-low risk profile".to_string());
        15
    } else if risk_score <= 7 {
        findings.recommendations.push(
            "Moderate risk. Consider getting a thorough inspection and budget for repairs."
                .to_string(),
        );
        5
    } else {
        findings.weaknesses.push(format!(
            "High risk score of {risk_score}/10. Proceed with caution."
        ));
        0
    }
}

fn score_dscr(dscr: f64, findings: &mut Findings) -> u32 {
    let shown = fixed(dscr, 2);
    if dscr >= 2.0 {
        findings
            .strengths
            .push(format!("Excellent debt service coverage ratio of {shown}"));
        10
    } else if dscr >= 1.5 {
        findings
            .strengths
            .push(format!("Good debt service coverage ratio of {shown}"));
        7
    } else if dscr >= 1.2 {
        findings.recommendations.push(format!(
            "Acceptable but tight debt service coverage ratio of {shown}"
        ));
        3
    } else if dscr >= 1.0 {
        findings.recommendations.push(format!(
            "Minimal debt service coverage ratio of {shown}. This leaves little room for unexpected expenses."
        ));
        0
    } else {
        findings.weaknesses.push(format!(
            "Insufficient debt service coverage ratio of {shown}. The property income cannot cover the debt payments."
        ));
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(cap_rate: f64, cash_flow: f64, roi: f64, risk_score: u8, dscr: f64) -> PropertyMetrics {
        PropertyMetrics {
            cap_rate,
            cash_on_cash_return: 0.0,
            net_operating_income: 0.0,
            cash_flow,
            roi,
            break_even_point: 0,
            gross_rent_multiplier: 10.0,
            debt_service_coverage_ratio: dscr,
            risk_score,
        }
    }

    #[test]
    fn test_perfect_deal() {
        let g = grade_deal(&metrics(8.0, 6_000.0, 15.0, 3, 2.0));
        assert_eq!(g.score, 100);
        assert_eq!(g.grade, Grade::A);
        assert_eq!(g.strengths.len(), 5);
        assert!(g.weaknesses.is_empty());
        assert!(g.recommendations.is_empty());
    }

    #[test]
    fn test_worst_deal() {
        let g = grade_deal(&metrics(2.0, -24_000.0, -3.0, 10, 0.4));
        assert_eq!(g.score, 0);
        assert_eq!(g.grade, Grade::F);
        assert_eq!(g.weaknesses.len(), 5);
        assert_eq!(
            g.recommendations,
            vec!["This property may require significant additional monthly investment."]
        );
    }

    #[test]
    fn test_golden_messages() {
        let g = grade_deal(&metrics(
            4.106666666666667,
            -7420.582686599104,
            6.754908126000996,
            9,
            0.7134974615672066,
        ));

        assert_eq!(g.score, 10);
        assert_eq!(g.grade, Grade::F);
        assert!(g.strengths.is_empty());
        assert_eq!(
            g.weaknesses,
            vec![
                "Significant negative cash flow of $618/month",
                "Low projected ROI of 6.8%",
                "High risk score of 9/10. Proceed with caution.",
                "Insufficient debt service coverage ratio of 0.71. The property income cannot cover the debt payments.",
            ]
        );
        assert_eq!(
            g.recommendations,
            vec![
                "Average cap rate of 4.1%. Consider negotiating price to improve returns.",
                "This property may require significant additional monthly investment.",
            ]
        );
        assert_eq!(
            g.explanation,
            "This property received a grade of F (10/100) based on its financial performance metrics and risk profile."
        );
    }

    #[test]
    fn test_messages_round_stored_value_not_tie() {
        let g = grade_deal(&metrics(6.05, 1_000.0, 12.0, 4, 1.335));
        assert_eq!(g.strengths[0], "Good cap rate of 6.0%");
        assert_eq!(
            g.recommendations,
            vec!["Acceptable but tight debt service coverage ratio of 1.33"]
        );
    }

    #[test]
    fn test_slight_negative_cash_flow() {
        let g = grade_deal(&metrics(5.0, -1_545.98, 12.6, 9, 0.92));
        assert_eq!(g.breakdown.cash_flow, 5);
        assert!(g
            .weaknesses
            .contains(&"Slight negative cash flow of $129/month".to_string()));
        assert!(g
            .recommendations
            .contains(&"Consider strategies to increase rent or reduce expenses.".to_string()));
    }

    #[test]
    fn test_cash_flow_band_edges() {
        assert_eq!(grade_deal(&metrics(0.0, 6_000.0, 0.0, 10, 0.0)).breakdown.cash_flow, 25);
        assert_eq!(grade_deal(&metrics(0.0, 5_999.0, 0.0, 10, 0.0)).breakdown.cash_flow, 15);
        assert_eq!(grade_deal(&metrics(0.0, 0.0, 0.0, 10, 0.0)).breakdown.cash_flow, 5);
        assert_eq!(grade_deal(&metrics(0.0, -2_399.0, 0.0, 10, 0.0)).breakdown.cash_flow, 5);
        assert_eq!(grade_deal(&metrics(0.0, -2_400.0, 0.0, 10, 0.0)).breakdown.cash_flow, 0);
    }

    #[test]
    fn test_minimal_dscr_is_a_recommendation() {
        let g = grade_deal(&metrics(9.0, 1_000.0, 20.0, 1, 1.05));
        assert_eq!(g.breakdown.dscr, 0);
        assert_eq!(
            g.recommendations.last().unwrap(),
            "Minimal debt service coverage ratio of 1.05. This leaves little room for unexpected expenses."
        );
    }

    #[test]
    fn test_no_debt_sentinel_scores_full_dscr() {
        let g = grade_deal(&metrics(4.4, 13_200.0, 7.4, 3, 999.0));
        assert_eq!(g.breakdown.dscr, 10);
        assert!(g
            .strengths
            .contains(&"Excellent debt service coverage ratio of 999.00".to_string()));
        assert_eq!(g.score, 75);
        assert_eq!(g.grade, Grade::B);
    }

    #[test]
    fn test_risk_bands() {
        let points = |risk| grade_deal(&metrics(0.0, 0.0, 0.0, risk, 0.0)).breakdown.risk;
        assert_eq!(points(1), 20);
        assert_eq!(points(3), 20);
        assert_eq!(points(4), 15);
        assert_eq!(points(5), 15);
        assert_eq!(points(6), 5);
        assert_eq!(points(7), 5);
        assert_eq!(points(8), 0);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let g = grade_deal(&metrics(6.5, 300.0, 11.0, 5, 1.6));
        assert_eq!(g.breakdown.total(), g.score);
        assert_eq!(g.score, 20 + 15 + 15 + 15 + 7);
        assert_eq!(g.grade, Grade::B);
    }
}
