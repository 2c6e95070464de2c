use serde::{Deserialize, Serialize};

/// Horizon over which a recommendation should be executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "30 days")]
    ThirtyDays,
    #[serde(rename = "90 days")]
    NinetyDays,
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "12+ months")]
    TwelveMonthsPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// A fully populated, templated strategic recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionableRecommendation {
    pub title: String,
    pub description: String,
    /// 3-4 concrete steps in execution order
    pub specific_actions: Vec<String>,
    pub timeframe: Timeframe,
    pub resource_requirement: Level,
    pub expected_impact: Level,
    pub kpi_measures: Vec<String>,
    pub risk_factors: Vec<String>,
    /// One sentence citing the mined business context
    pub business_justification: String,
}
