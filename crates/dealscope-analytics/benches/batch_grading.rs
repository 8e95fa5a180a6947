//! Benchmarks for metrics, grading and batch analysis.
//!
//! Run with: cargo bench -p dealscope-analytics (add `--features parallel`
//! to measure the rayon path).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use dealscope_analytics::prelude::*;
use dealscope_core::types::{FinancingAssumptions, PropertyFacts, PropertyListing};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_listing(i: usize) -> PropertyListing {
    let prices = [150_000, 225_000, 310_000, 450_000, 675_000];
    let rents = [1_400, 1_900, 2_300, 2_800, 3_600];
    let years = [1955, 1978, 1996, 2008, 2021];

    let mut listing = PropertyListing::new(
        format!("prop-{i:05}"),
        Decimal::from(prices[i % prices.len()] + (i as i64 % 97) * 1_000),
    );
    if i % 7 != 0 {
        listing.rent_estimate = Some(Decimal::from(rents[i % rents.len()]));
    }
    listing.year_built = Some(years[i % years.len()]);
    listing
}

fn create_listings(n: usize) -> Vec<PropertyListing> {
    (0..n).map(create_listing).collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_single_deal(c: &mut Criterion) {
    let facts = PropertyFacts::from_parts(Decimal::from(450_000), Some(Decimal::from(2_800)), Some(2018))
        .expect("valid facts");
    let assumptions = FinancingAssumptions::default();

    c.bench_function("analyze_property", |b| {
        b.iter(|| analyze_property_as_of(black_box(&facts), black_box(&assumptions), 2026))
    });

    let metrics = analyze_property_as_of(&facts, &assumptions, 2026);
    c.bench_function("grade_deal", |b| b.iter(|| grade_deal(black_box(&metrics))));
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_analysis");
    let batch = BatchAnalyzer::new(DealAnalyzer::default().with_as_of_year(2026));

    for size in [100, 1_000, 10_000] {
        let listings = create_listings(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &listings, |b, listings| {
            b.iter(|| batch.analyze_all(black_box(listings)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_deal, bench_batch);
criterion_main!(benches);
