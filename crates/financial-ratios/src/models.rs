//! Financial figures, ratio results and benchmark records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strategy_core::StrategyError;

/// Company figures for one reporting period. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialData {
    // Income statement
    pub revenue: Option<f64>,
    pub cost_of_goods_sold: Option<f64>,
    pub gross_profit: Option<f64>,
    pub operating_income: Option<f64>,
    pub ebit: Option<f64>,
    pub ebitda: Option<f64>,
    pub interest_expense: Option<f64>,
    pub net_income: Option<f64>,

    // Balance sheet
    pub total_assets: Option<f64>,
    pub current_assets: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub cash_and_equivalents: Option<f64>,
    pub inventory: Option<f64>,
    pub accounts_receivable: Option<f64>,
    pub accounts_payable: Option<f64>,
    pub total_debt: Option<f64>,
    pub shareholders_equity: Option<f64>,

    // Cash flow
    pub operating_cash_flow: Option<f64>,
    /// Principal plus interest due in the period
    pub debt_service: Option<f64>,

    // Market
    pub share_price: Option<f64>,
    pub shares_outstanding: Option<f64>,
    pub eps: Option<f64>,
    pub market_cap: Option<f64>,
    pub dividends_per_share: Option<f64>,

    // Prior period, for growth rates
    pub previous_revenue: Option<f64>,
    pub previous_net_income: Option<f64>,
    pub previous_dividends_per_share: Option<f64>,
}

impl FinancialData {
    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Computed ratios. A field is present iff all of its inputs were present.
/// Margins, returns, yields and growth rates are percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialRatioResult {
    // Liquidity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_cash_flow_ratio: Option<f64>,

    // Profitability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_assets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_invested_capital: Option<f64>,

    // Efficiency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_turnover: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_turnover: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivables_turnover: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payables_turnover: Option<f64>,

    // Leverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_assets: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_capital: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_coverage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_service_coverage: Option<f64>,

    // Market
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_earnings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_book: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to_sales: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ev_to_ebitda: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,

    // Growth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earnings_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_growth: Option<f64>,
}

impl FinancialRatioResult {
    /// Every ratio by its metric name, in declaration order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 28] {
        [
            ("current_ratio", self.current_ratio),
            ("quick_ratio", self.quick_ratio),
            ("cash_ratio", self.cash_ratio),
            ("operating_cash_flow_ratio", self.operating_cash_flow_ratio),
            ("gross_margin", self.gross_margin),
            ("operating_margin", self.operating_margin),
            ("net_margin", self.net_margin),
            ("ebitda_margin", self.ebitda_margin),
            ("return_on_equity", self.return_on_equity),
            ("return_on_assets", self.return_on_assets),
            ("return_on_invested_capital", self.return_on_invested_capital),
            ("asset_turnover", self.asset_turnover),
            ("inventory_turnover", self.inventory_turnover),
            ("receivables_turnover", self.receivables_turnover),
            ("payables_turnover", self.payables_turnover),
            ("debt_to_equity", self.debt_to_equity),
            ("debt_to_assets", self.debt_to_assets),
            ("debt_to_capital", self.debt_to_capital),
            ("interest_coverage", self.interest_coverage),
            ("debt_service_coverage", self.debt_service_coverage),
            ("price_to_earnings", self.price_to_earnings),
            ("price_to_book", self.price_to_book),
            ("price_to_sales", self.price_to_sales),
            ("ev_to_ebitda", self.ev_to_ebitda),
            ("dividend_yield", self.dividend_yield),
            ("revenue_growth", self.revenue_growth),
            ("earnings_growth", self.earnings_growth),
            ("dividend_growth", self.dividend_growth),
        ]
    }

    /// Look up a ratio by metric name.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == metric)
            .and_then(|(_, value)| value)
    }

    /// Number of ratios that could be computed.
    pub fn present_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| v.is_some()).count()
    }
}

/// Industry reference values for one metric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryBenchmark {
    pub p10: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
    pub average: Option<f64>,
}

/// Benchmarks keyed by metric name (same names as `FinancialRatioResult` fields)
pub type Benchmarks = BTreeMap<String, IndustryBenchmark>;

/// Performance tier relative to industry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceTier {
    Excellent,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}

impl PerformanceTier {
    pub fn from_percentile(percentile: u32) -> Self {
        match percentile {
            p if p >= 90 => PerformanceTier::Excellent,
            p if p >= 75 => PerformanceTier::AboveAverage,
            p if p >= 50 => PerformanceTier::Average,
            p if p >= 25 => PerformanceTier::BelowAverage,
            _ => PerformanceTier::Poor,
        }
    }

    pub fn to_label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::AboveAverage => "Above Average",
            PerformanceTier::Average => "Average",
            PerformanceTier::BelowAverage => "Below Average",
            PerformanceTier::Poor => "Poor",
        }
    }
}

/// Company value for one metric against its industry bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub metric: String,
    pub company_value: f64,
    pub industry_median: f64,
    pub industry_average: Option<f64>,
    pub percentile_rank: u32,
    pub performance: PerformanceTier,
}

/// Overall financial risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= 4 => RiskLevel::High,
            p if p >= 2 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// Result of a financial health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    pub ratios: FinancialRatioResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_comparisons: Option<Vec<BenchmarkComparison>>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    /// 0 to 100
    pub overall_score: f64,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_financial_data_from_partial_json() {
        let data = FinancialData::from_json(r#"{"current_assets": 200, "current_liabilities": 100}"#).unwrap();
        assert_eq!(data.current_assets, Some(200.0));
        assert_eq!(data.revenue, None);

        assert!(FinancialData::from_json("not json").is_err());
    }

    #[test]
    fn test_absent_ratios_are_not_serialized() {
        let ratios = FinancialRatioResult {
            current_ratio: Some(2.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&ratios).unwrap();
        assert_eq!(json, r#"{"current_ratio":2.0}"#);
        assert_eq!(ratios.get("current_ratio"), Some(2.0));
        assert_eq!(ratios.get("return_on_equity"), None);
        assert_eq!(ratios.present_count(), 1);
    }

    #[test]
    fn test_tier_and_risk_mapping() {
        assert_eq!(PerformanceTier::from_percentile(95), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_percentile(75), PerformanceTier::AboveAverage);
        assert_eq!(PerformanceTier::from_percentile(50), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_percentile(25), PerformanceTier::BelowAverage);
        assert_eq!(PerformanceTier::from_percentile(10), PerformanceTier::Poor);

        assert_eq!(RiskLevel::from_points(5), RiskLevel::High);
        assert_eq!(RiskLevel::from_points(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_points(1), RiskLevel::Low);
    }
}
