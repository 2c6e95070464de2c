use crate::models::{BenchmarkComparison, Benchmarks, FinancialRatioResult, IndustryBenchmark, PerformanceTier};

/// Metrics where a lower value is the better outcome. Their band rank is
/// mirrored so a top-decile value still reads as Excellent.
pub const LOWER_IS_BETTER: &[&str] = &[
    "debt_to_equity",
    "debt_to_assets",
    "debt_to_capital",
    "price_to_earnings",
    "price_to_book",
    "price_to_sales",
    "ev_to_ebitda",
];

/// Percentile bands in ascending order. `None` when the benchmark has no
/// median; other missing bands stay `None` and never match.
fn band_limits(benchmark: &IndustryBenchmark) -> Option<[Option<f64>; 5]> {
    let median = benchmark.median?;
    Some([benchmark.p10, benchmark.p25, Some(median), benchmark.p75, benchmark.p90])
}

/// Simple band lookup: <=P10 -> 10, <=P25 -> 25, <=median -> 50,
/// <=P75 -> 75, <=P90 -> 90, else 95. Missing bands are skipped.
pub fn band_percentile(value: f64, bands: &[Option<f64>; 5]) -> u32 {
    const RANKS: [u32; 5] = [10, 25, 50, 75, 90];
    bands
        .iter()
        .zip(RANKS)
        .find(|(band, _)| band.is_some_and(|limit| value <= limit))
        .map(|(_, rank)| rank)
        .unwrap_or(95)
}

/// Compare one metric against its benchmark. `None` for malformed benchmarks.
pub fn compare_metric(metric: &str, value: f64, benchmark: &IndustryBenchmark) -> Option<BenchmarkComparison> {
    let bands = band_limits(benchmark)?;
    let raw_rank = band_percentile(value, &bands);
    let percentile_rank = if LOWER_IS_BETTER.contains(&metric) {
        100 - raw_rank
    } else {
        raw_rank
    };

    Some(BenchmarkComparison {
        metric: metric.to_string(),
        company_value: value,
        industry_median: bands[2].unwrap_or_default(),
        industry_average: benchmark.average,
        percentile_rank,
        performance: PerformanceTier::from_percentile(percentile_rank),
    })
}

/// Compare every computed ratio that has a well-formed benchmark.
pub fn compare_to_benchmarks(ratios: &FinancialRatioResult, benchmarks: &Benchmarks) -> Vec<BenchmarkComparison> {
    benchmarks
        .iter()
        .filter_map(|(metric, benchmark)| {
            let value = ratios.get(metric)?;
            let comparison = compare_metric(metric, value, benchmark);
            if comparison.is_none() {
                tracing::debug!("Skipping benchmark for {} (no median)", metric);
            }
            comparison
        })
        .collect()
}
