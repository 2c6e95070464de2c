use business_calibration::CalibrationConfig;
use factor_extraction::MIN_SECTION_CHARS;
use recommendation_engine::MAX_RECOMMENDATIONS;
use serde::{Deserialize, Serialize};
use std::env;
use strategy_core::StrategyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub min_section_chars: usize,   // 20
    pub max_recommendations: usize, // 4
    pub calibration: CalibrationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_section_chars: MIN_SECTION_CHARS,
            max_recommendations: MAX_RECOMMENDATIONS,
            calibration: CalibrationConfig::default(),
        }
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize, StrategyError> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse()
        .map_err(|e| StrategyError::Config(format!("{}: {}", key, e)))
}

impl EngineConfig {
    /// Load from `ENGINE_*` and `CALIBRATION_*` environment variables.
    pub fn from_env() -> Result<Self, StrategyError> {
        let config = Self {
            min_section_chars: env_usize("ENGINE_MIN_SECTION_CHARS", MIN_SECTION_CHARS)?,
            max_recommendations: env_usize("ENGINE_MAX_RECOMMENDATIONS", MAX_RECOMMENDATIONS)?,
            calibration: CalibrationConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.max_recommendations == 0 {
            return Err(StrategyError::Config(
                "max_recommendations must be at least 1".to_string(),
            ));
        }
        self.calibration.validate()
    }
}
