//! Financial Ratio Engine
//!
//! Computes liquidity, profitability, efficiency, leverage, market and growth
//! ratios from optional-field financial figures, compares them to industry
//! bands, and derives strengths, weaknesses, an overall score and a risk tier.

pub mod analysis;
pub mod benchmark;
pub mod models;
pub mod ratios;

pub use analysis::FinancialAnalysisEngine;
pub use benchmark::{band_percentile, compare_metric, compare_to_benchmarks, LOWER_IS_BETTER};
pub use models::*;
pub use ratios::{calculate_ratios, safe_divide, usable_ratios, ROIC_TAX_RATE};

/// Ratios plus strengths, weaknesses, recommendations, score and risk tier.
pub fn analyze_financial_health(data: &FinancialData, benchmarks: Option<&Benchmarks>) -> FinancialAnalysis {
    FinancialAnalysisEngine::new().analyze(data, benchmarks)
}
