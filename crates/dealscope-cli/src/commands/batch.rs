//! Batch command implementation.
//!
//! Analyzes a file of listings, filters, and ranks them by score.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tabled::Tabled;

use dealscope_analytics::rounding::fixed;
use dealscope_analytics::{
    compare_by_score, grade_distribution, screen_listing, BatchAnalyzer, DealAnalyzer, DealReport,
};
use dealscope_core::types::{MinimumGrade, PropertyListing};

use crate::cli::OutputFormat;
use crate::commands::load_profile;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_currency, format_percent, print_header, print_json, print_output, print_warning,
};

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Listings file: a JSON array or a CSV with a header row
    pub file: PathBuf,

    /// Keep only deals graded at least this (A-D, or "any")
    #[arg(short, long)]
    pub min_grade: Option<MinimumGrade>,

    /// Keep only deals that meet every stored preference
    #[arg(short, long)]
    pub screen: bool,

    /// Show at most this many deals
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Year to measure property age from (defaults to the current year)
    #[arg(long)]
    pub as_of_year: Option<i32>,
}

/// One ranked row.
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct RankedRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Cap Rate")]
    cap_rate: String,
    #[tabled(rename = "Cash Flow/mo")]
    cash_flow: String,
    #[tabled(rename = "ROI")]
    roi: String,
    #[tabled(rename = "DSCR")]
    dscr: String,
    #[tabled(rename = "Risk")]
    risk: u8,
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Score")]
    score: u32,
}

/// Execute the batch command.
pub fn execute(args: BatchArgs, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let profile = load_profile(config)?;
    let listings = read_listings(&args.file)?;
    tracing::info!("read {} listings from {}", listings.len(), args.file.display());

    let mut analyzer = DealAnalyzer::new(profile.assumptions);
    if let Some(year) = args.as_of_year {
        analyzer = analyzer.with_as_of_year(year);
    }
    let results = BatchAnalyzer::new(analyzer).analyze_all(&listings);

    let minimum = args.min_grade.unwrap_or(MinimumGrade::Any);
    let mut ranked = Vec::with_capacity(listings.len());
    for (listing, result) in listings.iter().zip(results) {
        let report = match result {
            Ok(report) => report,
            Err(err) => {
                print_warning(&format!("skipping {err}"));
                continue;
            }
        };
        if !minimum.admits(report.grade.grade) {
            continue;
        }
        if args.screen {
            let facts = listing.facts()?;
            let screening = screen_listing(
                listing,
                &facts,
                &report.metrics,
                &report.grade,
                &profile.preferences,
            );
            if !screening.passes() {
                tracing::debug!("{} screened out: {:?}", listing.id, screening.failures);
                continue;
            }
        }
        ranked.push((report, listing.location()));
    }

    ranked.sort_by(|(a, _), (b, _)| compare_by_score(a, b));
    if let Some(top) = args.top {
        ranked.truncate(top);
    }
    let (reports, locations): (Vec<DealReport>, Vec<String>) = ranked.into_iter().unzip();

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Minimal => {
            for report in &reports {
                println!("{} {} {}", report.listing_id, report.grade.grade, report.grade.score);
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = ranked_rows(&reports, &locations);
            if format == OutputFormat::Table {
                print_header(&format!("Ranked Deals ({} of {})", rows.len(), listings.len()));
            }
            print_output(&rows, format)?;
            if format == OutputFormat::Table && !reports.is_empty() {
                print_summary(&reports);
            }
        }
    }

    Ok(())
}

/// Reads listings, choosing the parser by file extension.
fn read_listings(path: &Path) -> CliResult<Vec<PropertyListing>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let listings: Vec<PropertyListing> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        Some("csv") => {
            let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
            reader.deserialize().collect::<Result<_, _>>()?
        }
        _ => return Err(CliError::UnsupportedFile(path.display().to_string())),
    };

    if listings.is_empty() {
        return Err(CliError::EmptyListings(path.display().to_string()));
    }
    Ok(listings)
}

/// `locations[i]` belongs to `reports[i]`; ids may be blank or repeated.
fn ranked_rows(reports: &[DealReport], locations: &[String]) -> Vec<RankedRow> {
    reports
        .iter()
        .zip(locations)
        .enumerate()
        .map(|(i, (report, location))| {
            let m = &report.metrics;
            RankedRow {
                rank: i + 1,
                id: report.listing_id.clone(),
                location: location.clone(),
                price: format_currency(report.price.to_f64().unwrap_or_default()),
                cap_rate: format_percent(m.cap_rate),
                cash_flow: format_currency(m.monthly_cash_flow()),
                roi: format_percent(m.roi),
                dscr: if m.has_debt() {
                    fixed(m.debt_service_coverage_ratio, 2)
                } else {
                    "-".to_string()
                },
                risk: m.risk_score,
                grade: report.grade.grade.to_string(),
                score: report.grade.score,
            }
        })
        .collect()
}

fn print_summary(reports: &[DealReport]) {
    let counts: Vec<String> = grade_distribution(reports)
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(grade, n)| format!("{grade}: {n}"))
        .collect();
    println!("Grades: {}", counts.join(", "));
}
