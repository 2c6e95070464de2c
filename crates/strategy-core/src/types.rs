use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time horizon of a PESTEL factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl TimeHorizon {
    /// Index-mapped in fixed order; indices wrap modulo 3.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => TimeHorizon::Short,
            1 => TimeHorizon::Medium,
            _ => TimeHorizon::Long,
        }
    }
}

/// PESTEL macro-environment factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicFactor {
    pub name: String,
    pub description: String,
    /// 1 to 13
    pub weight: u32,
    /// 0.0 to 1.0, two decimals
    pub probability: f64,
    /// -5 to +5
    pub impact: i32,
    pub time_horizon: TimeHorizon,
}

/// The five fixed Porter forces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ForceKind {
    #[serde(rename = "Competitive Rivalry")]
    CompetitiveRivalry,
    #[serde(rename = "Supplier Power")]
    SupplierPower,
    #[serde(rename = "Buyer Power")]
    BuyerPower,
    #[serde(rename = "Threat of New Entrants")]
    ThreatOfNewEntrants,
    #[serde(rename = "Threat of Substitutes")]
    ThreatOfSubstitutes,
}

impl ForceKind {
    pub const ALL: [ForceKind; 5] = [
        ForceKind::CompetitiveRivalry,
        ForceKind::SupplierPower,
        ForceKind::BuyerPower,
        ForceKind::ThreatOfNewEntrants,
        ForceKind::ThreatOfSubstitutes,
    ];

    pub fn to_label(&self) -> &'static str {
        match self {
            ForceKind::CompetitiveRivalry => "Competitive Rivalry",
            ForceKind::SupplierPower => "Supplier Power",
            ForceKind::BuyerPower => "Buyer Power",
            ForceKind::ThreatOfNewEntrants => "Threat of New Entrants",
            ForceKind::ThreatOfSubstitutes => "Threat of Substitutes",
        }
    }
}

/// Direction a competitive force is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl ForceTrend {
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => ForceTrend::Increasing,
            1 => ForceTrend::Stable,
            _ => ForceTrend::Decreasing,
        }
    }
}

/// Porter force record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveForce {
    pub name: ForceKind,
    /// 1 to 10
    pub strength: u32,
    pub trend: ForceTrend,
    pub description: String,
    /// Cross-force weights keyed by force label. Empty on extraction; filled in
    /// by the integration model when it weights forces against each other.
    #[serde(default)]
    pub influence: BTreeMap<String, f64>,
}

/// SWOT quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwotCategory {
    Strength,
    Weakness,
    Opportunity,
    Threat,
}

impl SwotCategory {
    /// Strengths and weaknesses are internal; opportunities and threats external.
    pub fn is_internal(&self) -> bool {
        matches!(self, SwotCategory::Strength | SwotCategory::Weakness)
    }

    /// +1 for favourable quadrants, -1 for unfavourable ones.
    pub fn sign(&self) -> f64 {
        match self {
            SwotCategory::Strength | SwotCategory::Opportunity => 1.0,
            SwotCategory::Weakness | SwotCategory::Threat => -1.0,
        }
    }
}

/// SWOT timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwotTimeframe {
    Immediate,
    Short,
    Medium,
    Long,
}

impl SwotTimeframe {
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => SwotTimeframe::Immediate,
            1 => SwotTimeframe::Short,
            2 => SwotTimeframe::Medium,
            _ => SwotTimeframe::Long,
        }
    }
}

/// SWOT record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwotElement {
    pub name: String,
    pub description: String,
    pub impact: i32,
    /// 0.0 to 1.0, two decimals
    pub confidence: f64,
    pub timeframe: SwotTimeframe,
    pub category: SwotCategory,
}

/// Overall confidence in an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
    Insufficient,
}

impl DataQuality {
    pub fn to_label(&self) -> &'static str {
        match self {
            DataQuality::High => "high",
            DataQuality::Medium => "medium",
            DataQuality::Low => "low",
            DataQuality::Insufficient => "insufficient",
        }
    }
}

/// Everything extracted from one narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub pestel_factors: Vec<StrategicFactor>,
    pub competitive_forces: Vec<CompetitiveForce>,
    pub swot_elements: Vec<SwotElement>,
    pub data_quality: DataQuality,
    /// Sum of all extracted items
    pub evidence_count: usize,
}

impl ExtractionResult {
    /// Result for text too short or empty to extract anything from.
    pub fn empty() -> Self {
        Self {
            pestel_factors: Vec::new(),
            competitive_forces: Vec::new(),
            swot_elements: Vec::new(),
            data_quality: DataQuality::Insufficient,
            evidence_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.evidence_count == 0
    }
}
