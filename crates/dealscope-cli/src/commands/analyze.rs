//! Analyze command implementation.
//!
//! Computes metrics and a grade for a single property.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use dealscope_analytics::rounding::fixed;
use dealscope_analytics::{screen_deal, DealAnalyzer, DealReport, Screening};
use dealscope_core::types::{DownPayment, FinancingAssumptions, PropertyFacts};

use crate::cli::OutputFormat;
use crate::commands::load_profile;
use crate::output::{
    colored_grade, format_currency, print_bullets, print_header, print_json, print_output,
    KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Purchase price
    #[arg(short, long)]
    pub price: Decimal,

    /// Monthly rent estimate (defaults to 0.8% of price)
    #[arg(short, long)]
    pub rent: Option<Decimal>,

    /// Year the property was built (defaults to 2000)
    #[arg(short, long)]
    pub year_built: Option<i32>,

    /// Operating expenses as a share of rent, e.g. 0.45
    #[arg(long)]
    pub expense_ratio: Option<f64>,

    /// Down payment: 20%, 0.2, or an amount such as 50000
    #[arg(short, long)]
    pub down_payment: Option<DownPayment>,

    /// Annual interest rate, e.g. 0.06
    #[arg(short, long)]
    pub interest_rate: Option<f64>,

    /// Loan term in years
    #[arg(short = 't', long)]
    pub loan_term: Option<u32>,

    /// Year to measure property age from (defaults to the current year)
    #[arg(long)]
    pub as_of_year: Option<i32>,

    /// Also screen the deal against stored preferences
    #[arg(long)]
    pub screen: bool,
}

impl AnalyzeArgs {
    /// Command-line overrides on top of stored assumptions.
    fn assumptions(&self, base: FinancingAssumptions) -> FinancingAssumptions {
        let mut assumptions = base;
        if let Some(ratio) = self.expense_ratio {
            assumptions = assumptions.with_expense_ratio(ratio);
        }
        if let Some(down) = self.down_payment {
            assumptions = assumptions.with_down_payment(down);
        }
        if let Some(rate) = self.interest_rate {
            assumptions = assumptions.with_interest_rate(rate);
        }
        if let Some(years) = self.loan_term {
            assumptions = assumptions.with_loan_term_years(years);
        }
        assumptions
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput<'a> {
    monthly_rent: f64,
    rent_estimated: bool,
    year_built: i32,
    as_of_year: i32,
    assumptions: &'a FinancingAssumptions,
    #[serde(flatten)]
    report: &'a DealReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    screening: Option<&'a Screening>,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let profile = load_profile(config)?;
    let assumptions = args.assumptions(profile.assumptions);
    assumptions.validate()?;

    let facts = PropertyFacts::from_parts(args.price, args.rent, args.year_built)?;

    let mut analyzer = DealAnalyzer::new(assumptions);
    if let Some(year) = args.as_of_year {
        analyzer = analyzer.with_as_of_year(year);
    }
    tracing::debug!(?assumptions, as_of = analyzer.as_of_year(), "analyzing property");

    let report = analyzer.analyze("", &facts);
    let screening = args
        .screen
        .then(|| screen_deal(&facts, &report.metrics, &report.grade, &profile.preferences));

    match format {
        OutputFormat::Table => print_report(&facts, &assumptions, &report, screening.as_ref())?,
        OutputFormat::Json => print_json(&AnalyzeOutput {
            monthly_rent: facts.monthly_rent(),
            rent_estimated: facts.is_rent_derived(),
            year_built: facts.year_built(),
            as_of_year: analyzer.as_of_year(),
            assumptions: &assumptions,
            report: &report,
            screening: screening.as_ref(),
        })?,
        OutputFormat::Csv => print_output(&metric_rows(&facts, &report), format)?,
        OutputFormat::Minimal => println!("{} {}", report.grade.grade, report.grade.score),
    }

    Ok(())
}

fn metric_rows(facts: &PropertyFacts, report: &DealReport) -> Vec<KeyValue> {
    let m = &report.metrics;
    let rent_note = if facts.is_rent_derived() { " (estimated)" } else { "" };
    let dscr = if m.has_debt() {
        fixed(m.debt_service_coverage_ratio, 2)
    } else {
        "no debt".to_string()
    };
    let break_even = if m.break_even_point == 0 {
        "n/a".to_string()
    } else {
        format!("{} months", m.break_even_point)
    };

    vec![
        KeyValue::from_currency("Price", facts.price_f64()),
        KeyValue::new(
            "Monthly Rent",
            format!("{}{rent_note}", format_currency(facts.monthly_rent())),
        ),
        KeyValue::from_currency("Net Operating Income", m.net_operating_income),
        KeyValue::new(
            "Cash Flow",
            format!("{}/month", format_currency(m.monthly_cash_flow())),
        ),
        KeyValue::from_percent("Cap Rate", m.cap_rate),
        KeyValue::from_percent("Cash-on-Cash Return", m.cash_on_cash_return),
        KeyValue::from_percent("ROI", m.roi),
        KeyValue::new("Gross Rent Multiplier", fixed(m.gross_rent_multiplier, 2)),
        KeyValue::new("DSCR", dscr),
        KeyValue::new("Break-even", break_even),
        KeyValue::new("Risk Score", format!("{}/10", m.risk_score)),
        KeyValue::new(
            "Grade",
            format!("{} ({}/100)", report.grade.grade, report.grade.score),
        ),
    ]
}

fn print_report(
    facts: &PropertyFacts,
    assumptions: &FinancingAssumptions,
    report: &DealReport,
    screening: Option<&Screening>,
) -> Result<()> {
    print_header("Property Metrics");
    println!(
        "Financing: {} down, {}% over {} years, {}% expenses",
        assumptions.down_payment,
        fixed(assumptions.interest_rate * 100.0, 2),
        assumptions.loan_term_years,
        fixed(assumptions.expense_ratio * 100.0, 0),
    );
    print_output(&metric_rows(facts, report), OutputFormat::Table)?;

    let grade = &report.grade;
    print_header("Deal Grade");
    println!("{} ({}/100)", colored_grade(grade.grade), grade.score);
    println!("{}", grade.explanation);
    print_bullets("Strengths", &grade.strengths, "+");
    print_bullets("Weaknesses", &grade.weaknesses, "-");
    print_bullets("Recommendations", &grade.recommendations, "*");

    if let Some(screening) = screening {
        print_header("Screening");
        if screening.passes() {
            println!("Meets all stored preferences");
        } else {
            let failures: Vec<String> = screening.failures.iter().map(ToString::to_string).collect();
            print_bullets("Does not meet", &failures, "x");
        }
    }
    Ok(())
}
