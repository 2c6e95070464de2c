//! Recommendation Engine
//!
//! Gates a fixed, ordered set of recommendation templates on the calibrated
//! strategic score, the framework scores and the business context mined from
//! the narrative.

pub mod models;
pub mod templates;

pub use models::{ActionableRecommendation, Level, Timeframe};
pub use templates::{RecommendationSignals, RecommendationTemplate, TEMPLATES};

use business_calibration::mine_business_context;

/// Most recommendations returned per call
pub const MAX_RECOMMENDATIONS: usize = 4;

pub struct RecommendationEngine {
    max_recommendations: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::with_limit(MAX_RECOMMENDATIONS)
    }

    pub fn with_limit(max_recommendations: usize) -> Self {
        Self { max_recommendations }
    }

    /// Qualifying templates in declaration order, truncated to the limit.
    pub fn generate(&self, signals: &RecommendationSignals) -> Vec<ActionableRecommendation> {
        let qualifying: Vec<&RecommendationTemplate> =
            TEMPLATES.iter().filter(|t| (t.applies)(signals)).collect();

        tracing::debug!(
            "{} of {} recommendation templates qualify: {:?}",
            qualifying.len(),
            TEMPLATES.len(),
            qualifying.iter().map(|t| t.key).collect::<Vec<_>>()
        );

        qualifying
            .into_iter()
            .take(self.max_recommendations)
            .map(|t| (t.build)(signals))
            .collect()
    }

    pub fn generate_from_text(
        &self,
        text: &str,
        strategic_score: f64,
        pestel_score: f64,
        forces_score: f64,
        swot_score: f64,
    ) -> Vec<ActionableRecommendation> {
        let context = mine_business_context(text);
        let signals = RecommendationSignals::new(
            text,
            context,
            strategic_score,
            pestel_score,
            forces_score,
            swot_score,
        );
        self.generate(&signals)
    }
}

pub fn generate_actionable_recommendations(
    text: &str,
    strategic_score: f64,
    pestel_score: f64,
    forces_score: f64,
    swot_score: f64,
) -> Vec<ActionableRecommendation> {
    RecommendationEngine::new().generate_from_text(
        text,
        strategic_score,
        pestel_score,
        forces_score,
        swot_score,
    )
}
