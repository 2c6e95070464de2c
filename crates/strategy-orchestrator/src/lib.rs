//! Strategic Analysis Orchestrator
//!
//! Runs the full pipeline over one request: factor extraction, framework
//! scoring, optional ratio analysis, calibration of the externally supplied
//! strategic score, and recommendation generation.

pub mod config;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;

pub use business_calibration::{apply_business_calibration, CalibratedResult};
pub use factor_extraction::extract_factors;
pub use financial_ratios::{analyze_financial_health, calculate_ratios};
pub use recommendation_engine::{generate_actionable_recommendations, ActionableRecommendation};

use business_calibration::BusinessCalibrator;
use factor_extraction::FactorExtractionEngine;
use financial_ratios::{Benchmarks, FinancialAnalysis, FinancialAnalysisEngine, FinancialData};
use framework_scoring::{score_frameworks, FrameworkScores};
use recommendation_engine::{RecommendationEngine, RecommendationSignals};
use serde::{Deserialize, Serialize};
use strategy_core::{ExtractionResult, StrategyError};

/// One assessment input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub text: String,
    #[serde(default)]
    pub financial_data: Option<FinancialData>,
    #[serde(default)]
    pub benchmarks: Option<Benchmarks>,
    /// Score from the external integration model, nominally 0-100
    pub raw_strategic_score: f64,
}

impl AssessmentRequest {
    pub fn new(text: impl Into<String>, raw_strategic_score: f64) -> Self {
        Self {
            text: text.into(),
            financial_data: None,
            benchmarks: None,
            raw_strategic_score,
        }
    }

    pub fn with_financial_data(mut self, data: FinancialData) -> Self {
        self.financial_data = Some(data);
        self
    }

    pub fn with_benchmarks(mut self, benchmarks: Benchmarks) -> Self {
        self.benchmarks = Some(benchmarks);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Benchmarks only make sense alongside financial figures.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.benchmarks.is_some() && self.financial_data.is_none() {
            return Err(StrategyError::InvalidData(
                "benchmarks supplied without financial_data".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full strategic assessment of one narrative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicAssessment {
    pub extraction: ExtractionResult,
    pub framework_scores: FrameworkScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_analysis: Option<FinancialAnalysis>,
    pub calibration: CalibratedResult,
    pub recommendations: Vec<ActionableRecommendation>,
}

pub struct StrategicAnalysisEngine {
    extractor: FactorExtractionEngine,
    financial: FinancialAnalysisEngine,
    calibrator: BusinessCalibrator,
    recommender: RecommendationEngine,
}

impl Default for StrategicAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategicAnalysisEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            extractor: FactorExtractionEngine::with_min_section_chars(config.min_section_chars),
            financial: FinancialAnalysisEngine::new(),
            calibrator: BusinessCalibrator::with_config(config.calibration),
            recommender: RecommendationEngine::with_limit(config.max_recommendations),
        }
    }

    pub fn analyze(&self, request: &AssessmentRequest) -> StrategicAssessment {
        let extraction = self.extractor.extract(&request.text);
        let framework_scores = score_frameworks(&extraction);

        let financial_analysis = request
            .financial_data
            .as_ref()
            .map(|data| self.financial.analyze(data, request.benchmarks.as_ref()));

        let calibration = self
            .calibrator
            .calibrate_text(request.raw_strategic_score, &request.text);

        let signals = RecommendationSignals::new(
            &request.text,
            calibration.business_context.clone(),
            calibration.calibrated_strategic_score,
            framework_scores.pestel,
            framework_scores.forces,
            framework_scores.swot,
        );
        let recommendations = self.recommender.generate(&signals);

        tracing::info!(
            "Strategic assessment: {} evidence items ({}), score {:.1} -> {:.1}, {} recommendations",
            extraction.evidence_count,
            extraction.data_quality.to_label(),
            calibration.original_strategic_score,
            calibration.calibrated_strategic_score,
            recommendations.len()
        );

        StrategicAssessment {
            extraction,
            framework_scores,
            financial_analysis,
            calibration,
            recommendations,
        }
    }
}
