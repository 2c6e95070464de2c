use strategy_core::text::round_to;

use crate::benchmark::compare_to_benchmarks;
use crate::models::{
    BenchmarkComparison, Benchmarks, FinancialAnalysis, FinancialData, FinancialRatioResult, PerformanceTier, RiskLevel,
};
use crate::ratios::{calculate_ratios, usable_ratios};

#[derive(Debug, Clone, Copy)]
enum Bound {
    Above(f64),
    Below(f64),
}

impl Bound {
    fn holds(&self, value: f64) -> bool {
        match self {
            Bound::Above(limit) => value > *limit,
            Bound::Below(limit) => value < *limit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Percent,
    Multiple,
}

impl Unit {
    fn format(&self, value: f64) -> String {
        match self {
            Unit::Percent => format!("{:.1}%", value),
            Unit::Multiple => format!("{:.2}x", value),
        }
    }
}

/// Fixed threshold rule for one ratio
struct ThresholdRule {
    metric: &'static str,
    label: &'static str,
    unit: Unit,
    strength: Bound,
    weakness: Bound,
    strength_note: &'static str,
    weakness_note: &'static str,
    recommendation: Option<&'static str>,
}

const THRESHOLD_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        metric: "current_ratio",
        label: "Current ratio",
        unit: Unit::Multiple,
        strength: Bound::Above(2.0),
        weakness: Bound::Below(1.0),
        strength_note: "strong short-term liquidity",
        weakness_note: "current liabilities exceed current assets",
        recommendation: Some("Improve working capital: accelerate collections, extend payables and convert idle inventory to cash"),
    },
    ThresholdRule {
        metric: "quick_ratio",
        label: "Quick ratio",
        unit: Unit::Multiple,
        strength: Bound::Above(1.0),
        weakness: Bound::Below(0.5),
        strength_note: "liquid assets cover obligations without selling inventory",
        weakness_note: "heavy reliance on inventory to meet obligations",
        recommendation: None,
    },
    ThresholdRule {
        metric: "net_margin",
        label: "Net margin",
        unit: Unit::Percent,
        strength: Bound::Above(15.0),
        weakness: Bound::Below(5.0),
        strength_note: "highly profitable operations",
        weakness_note: "thin bottom-line profitability",
        recommendation: Some("Launch a cost optimization program targeting overhead, procurement and low-margin product lines"),
    },
    ThresholdRule {
        metric: "gross_margin",
        label: "Gross margin",
        unit: Unit::Percent,
        strength: Bound::Above(40.0),
        weakness: Bound::Below(20.0),
        strength_note: "strong pricing power",
        weakness_note: "limited pricing power or high input costs",
        recommendation: Some("Review pricing strategy and renegotiate supplier contracts to lift gross margin"),
    },
    ThresholdRule {
        metric: "operating_margin",
        label: "Operating margin",
        unit: Unit::Percent,
        strength: Bound::Above(15.0),
        weakness: Bound::Below(5.0),
        strength_note: "efficient core operations",
        weakness_note: "operating costs absorb most gross profit",
        recommendation: None,
    },
    ThresholdRule {
        metric: "return_on_equity",
        label: "Return on equity",
        unit: Unit::Percent,
        strength: Bound::Above(15.0),
        weakness: Bound::Below(8.0),
        strength_note: "shareholder capital is deployed effectively",
        weakness_note: "returns on shareholder capital are below cost of equity",
        recommendation: Some("Improve capital efficiency by exiting low-return assets and prioritizing high-ROI projects"),
    },
    ThresholdRule {
        metric: "return_on_assets",
        label: "Return on assets",
        unit: Unit::Percent,
        strength: Bound::Above(8.0),
        weakness: Bound::Below(3.0),
        strength_note: "productive asset base",
        weakness_note: "asset base generates little profit",
        recommendation: None,
    },
    ThresholdRule {
        metric: "debt_to_equity",
        label: "Debt-to-equity",
        unit: Unit::Multiple,
        strength: Bound::Below(0.5),
        weakness: Bound::Above(2.0),
        strength_note: "conservative balance sheet",
        weakness_note: "high financial leverage",
        recommendation: Some("Reduce leverage through debt paydown from free cash flow or an equity-funded refinancing"),
    },
    ThresholdRule {
        metric: "interest_coverage",
        label: "Interest coverage",
        unit: Unit::Multiple,
        strength: Bound::Above(5.0),
        weakness: Bound::Below(2.0),
        strength_note: "comfortable debt servicing capacity",
        weakness_note: "earnings barely cover interest costs",
        recommendation: Some("Refinance expensive debt and extend maturities to reduce interest burden"),
    },
    ThresholdRule {
        metric: "asset_turnover",
        label: "Asset turnover",
        unit: Unit::Multiple,
        strength: Bound::Above(1.5),
        weakness: Bound::Below(0.5),
        strength_note: "assets are used intensively to generate sales",
        weakness_note: "assets are underutilized",
        recommendation: Some("Improve asset utilization by divesting idle capacity and consolidating facilities"),
    },
    ThresholdRule {
        metric: "revenue_growth",
        label: "Revenue growth",
        unit: Unit::Percent,
        strength: Bound::Above(10.0),
        weakness: Bound::Below(0.0),
        strength_note: "strong top-line momentum",
        weakness_note: "revenue is contracting",
        recommendation: Some("Rebuild top-line growth through new segments, pricing actions and sales channel expansion"),
    },
];

/// Anchors for the three-point scoring ramp
#[derive(Debug, Clone, Copy)]
struct Ramp {
    min: f64,
    target: f64,
    max: f64,
}

impl Ramp {
    /// 0 at or below min, 50 at target, 100 at or above max, linear between.
    fn score(&self, value: f64) -> f64 {
        if value <= self.min {
            0.0
        } else if value <= self.target {
            50.0 * (value - self.min) / (self.target - self.min)
        } else if value < self.max {
            50.0 + 50.0 * (value - self.target) / (self.max - self.target)
        } else {
            100.0
        }
    }
}

const CURRENT_RATIO_RAMP: Ramp = Ramp { min: 0.5, target: 1.5, max: 3.0 };
const NET_MARGIN_RAMP: Ramp = Ramp { min: -5.0, target: 8.0, max: 20.0 };
const ROE_RAMP: Ramp = Ramp { min: 0.0, target: 12.0, max: 25.0 };
const ASSET_TURNOVER_RAMP: Ramp = Ramp { min: 0.2, target: 0.8, max: 2.0 };
const DEBT_TO_EQUITY_RAMP: Ramp = Ramp { min: 0.0, target: 1.0, max: 3.0 };

const CURRENT_RATIO_WEIGHT: f64 = 0.15;
const NET_MARGIN_WEIGHT: f64 = 0.25;
const ROE_WEIGHT: f64 = 0.20;
const ASSET_TURNOVER_WEIGHT: f64 = 0.15;
const DEBT_TO_EQUITY_WEIGHT: f64 = 0.15;
const BENCHMARK_WEIGHT: f64 = 0.10;

const BASE_SCORE: f64 = 50.0;

pub struct FinancialAnalysisEngine;

impl FinancialAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, data: &FinancialData, benchmarks: Option<&Benchmarks>) -> FinancialAnalysis {
        let ratios = calculate_ratios(data);
        // zero-denominator ratios are reported but never judged
        let usable = usable_ratios(data);
        let benchmark_comparisons = benchmarks.map(|b| compare_to_benchmarks(&usable, b));

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        let mut recommendations = Vec::new();

        for rule in THRESHOLD_RULES {
            let Some(value) = usable.get(rule.metric) else {
                continue;
            };
            let shown = rule.unit.format(value);
            if rule.strength.holds(value) {
                strengths.push(format!("{} of {}: {}", rule.label, shown, rule.strength_note));
            } else if rule.weakness.holds(value) {
                weaknesses.push(format!("{} of {}: {}", rule.label, shown, rule.weakness_note));
                if let Some(rec) = rule.recommendation {
                    recommendations.push(rec.to_string());
                }
            }
        }

        if let Some(comparisons) = &benchmark_comparisons {
            for cmp in comparisons {
                match cmp.performance {
                    PerformanceTier::Excellent => strengths.push(format!(
                        "{} ranks in the top decile of the industry (P{})",
                        cmp.metric, cmp.percentile_rank
                    )),
                    PerformanceTier::Poor => {
                        weaknesses.push(format!(
                            "{} ranks in the bottom decile of the industry (P{})",
                            cmp.metric, cmp.percentile_rank
                        ));
                        recommendations.push(format!(
                            "Close the gap on {} toward the industry median of {:.2}",
                            cmp.metric, cmp.industry_median
                        ));
                    }
                    _ => {}
                }
            }
        }

        let overall_score = Self::overall_score(&usable, benchmark_comparisons.as_deref());
        let risk_level = Self::risk_level(&usable);

        tracing::debug!(
            "Financial analysis: score {:.1}, risk {:?}, {} strengths, {} weaknesses",
            overall_score,
            risk_level,
            strengths.len(),
            weaknesses.len()
        );

        FinancialAnalysis {
            ratios,
            benchmark_comparisons,
            strengths,
            weaknesses,
            recommendations,
            overall_score,
            risk_level,
        }
    }

    /// 50 plus weighted ramp adjustments, clamped to [0, 100].
    pub fn overall_score(ratios: &FinancialRatioResult, comparisons: Option<&[BenchmarkComparison]>) -> f64 {
        let mut score = BASE_SCORE;

        let mut adjust = |sub_score: f64, weight: f64| {
            score += (sub_score - 50.0) * weight;
        };

        if let Some(cr) = ratios.current_ratio {
            adjust(CURRENT_RATIO_RAMP.score(cr), CURRENT_RATIO_WEIGHT);
        }
        if let Some(margin) = ratios.net_margin {
            adjust(NET_MARGIN_RAMP.score(margin), NET_MARGIN_WEIGHT);
        }
        if let Some(roe) = ratios.return_on_equity {
            adjust(ROE_RAMP.score(roe), ROE_WEIGHT);
        }
        if let Some(turnover) = ratios.asset_turnover {
            adjust(ASSET_TURNOVER_RAMP.score(turnover), ASSET_TURNOVER_WEIGHT);
        }
        if let Some(d2e) = ratios.debt_to_equity {
            adjust(100.0 - DEBT_TO_EQUITY_RAMP.score(d2e), DEBT_TO_EQUITY_WEIGHT);
        }
        if let Some(comparisons) = comparisons.filter(|c| !c.is_empty()) {
            let avg = comparisons.iter().map(|c| c.percentile_rank as f64).sum::<f64>() / comparisons.len() as f64;
            adjust(avg, BENCHMARK_WEIGHT);
        }

        round_to(score.clamp(0.0, 100.0), 1)
    }

    /// Additive risk points over liquidity, leverage, profitability and coverage.
    pub fn risk_level(ratios: &FinancialRatioResult) -> RiskLevel {
        let mut points = 0;

        if let Some(cr) = ratios.current_ratio {
            points += if cr < 1.0 { 2 } else if cr < 1.5 { 1 } else { 0 };
        }
        if let Some(d2e) = ratios.debt_to_equity {
            points += if d2e > 2.0 { 2 } else if d2e > 1.0 { 1 } else { 0 };
        }
        if let Some(margin) = ratios.net_margin {
            points += if margin < 0.0 { 2 } else if margin < 5.0 { 1 } else { 0 };
        }
        if let Some(coverage) = ratios.interest_coverage {
            points += if coverage < 2.0 { 2 } else if coverage < 5.0 { 1 } else { 0 };
        }

        RiskLevel::from_points(points)
    }
}

impl Default for FinancialAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp() {
        let ramp = Ramp { min: 0.0, target: 10.0, max: 20.0 };
        assert_eq!(ramp.score(-1.0), 0.0);
        assert_eq!(ramp.score(5.0), 25.0);
        assert_eq!(ramp.score(10.0), 50.0);
        assert_eq!(ramp.score(15.0), 75.0);
        assert_eq!(ramp.score(25.0), 100.0);
    }

    #[test]
    fn test_empty_ratios_score_neutral() {
        let ratios = FinancialRatioResult::default();
        assert_eq!(FinancialAnalysisEngine::overall_score(&ratios, None), 50.0);
        assert_eq!(FinancialAnalysisEngine::risk_level(&ratios), RiskLevel::Low);
    }

    #[test]
    fn test_score_is_clamped_and_bounded() {
        let excellent = FinancialRatioResult {
            current_ratio: Some(10.0),
            net_margin: Some(80.0),
            return_on_equity: Some(90.0),
            asset_turnover: Some(5.0),
            debt_to_equity: Some(0.0),
            ..Default::default()
        };
        let score = FinancialAnalysisEngine::overall_score(&excellent, None);
        assert_eq!(score, 95.0);

        let distressed = FinancialRatioResult {
            current_ratio: Some(0.1),
            net_margin: Some(-40.0),
            return_on_equity: Some(-30.0),
            asset_turnover: Some(0.05),
            debt_to_equity: Some(9.0),
            ..Default::default()
        };
        let score = FinancialAnalysisEngine::overall_score(&distressed, None);
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_risk_levels() {
        let risky = FinancialRatioResult {
            current_ratio: Some(0.8),
            debt_to_equity: Some(2.5),
            ..Default::default()
        };
        assert_eq!(FinancialAnalysisEngine::risk_level(&risky), RiskLevel::High);

        let moderate = FinancialRatioResult {
            current_ratio: Some(1.2),
            net_margin: Some(3.0),
            interest_coverage: Some(8.0),
            ..Default::default()
        };
        assert_eq!(FinancialAnalysisEngine::risk_level(&moderate), RiskLevel::Medium);
    }

    #[test]
    fn test_thin_margin_yields_weakness_and_cost_recommendation() {
        let data = FinancialData {
            revenue: Some(1000.0),
            net_income: Some(30.0),
            ..Default::default()
        };
        let analysis = FinancialAnalysisEngine::new().analyze(&data, None);
        assert_eq!(analysis.weaknesses.len(), 1);
        assert!(analysis.weaknesses[0].starts_with("Net margin of 3.0%"));
        assert!(analysis.recommendations[0].contains("cost optimization"));
        assert!(analysis.benchmark_comparisons.is_none());
    }

    #[test]
    fn test_strong_liquidity_is_strength() {
        let data = FinancialData {
            current_assets: Some(250.0),
            current_liabilities: Some(100.0),
            ..Default::default()
        };
        let analysis = FinancialAnalysisEngine::new().analyze(&data, None);
        assert_eq!(analysis.strengths.len(), 1);
        assert!(analysis.strengths[0].contains("2.50x"));
        assert!(analysis.weaknesses.is_empty());
    }

    #[test]
    fn test_zero_denominators_are_not_judged() {
        // no current liabilities and no interest cost
        let data = FinancialData {
            current_assets: Some(500.0),
            current_liabilities: Some(0.0),
            operating_income: Some(200.0),
            interest_expense: Some(0.0),
            ..Default::default()
        };
        let analysis = FinancialAnalysisEngine::new().analyze(&data, None);

        assert_eq!(analysis.ratios.current_ratio, Some(0.0));
        assert_eq!(analysis.ratios.interest_coverage, Some(0.0));
        assert!(analysis.weaknesses.is_empty(), "{:?}", analysis.weaknesses);
        assert!(analysis.strengths.is_empty());
        assert!(analysis.recommendations.is_empty());
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.overall_score, 50.0);
    }
}
