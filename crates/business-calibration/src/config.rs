use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use strategy_core::StrategyError;

/// Thresholds for the business-calibration rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    // Rule 1: negative raw score against healthy fundamentals
    pub negative_override_health: f64, // 0.6
    pub negative_override_base: f64,   // 45
    pub negative_override_scale: f64,  // 40

    // Rule 2: weak raw score against strong fundamentals
    pub strong_floor_health: f64,    // 0.8
    pub strong_floor_threshold: f64, // 60
    pub strong_floor_base: f64,      // 60
    pub strong_floor_scale: f64,     // 30

    // Rule 3: large divergence from health
    pub divergence_health: f64, // 0.5
    pub divergence_gap: f64,    // 40 points
    pub blend_factor: f64,      // 0.6 toward health

    // Rule 4: scores above 100
    pub ceiling_base: f64,  // 85
    pub ceiling_scale: f64, // 15
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            negative_override_health: 0.6,
            negative_override_base: 45.0,
            negative_override_scale: 40.0,
            strong_floor_health: 0.8,
            strong_floor_threshold: 60.0,
            strong_floor_base: 60.0,
            strong_floor_scale: 30.0,
            divergence_health: 0.5,
            divergence_gap: 40.0,
            blend_factor: 0.6,
            ceiling_base: 85.0,
            ceiling_scale: 15.0,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, StrategyError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| StrategyError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}

impl CalibrationConfig {
    /// Load overrides from `CALIBRATION_*` environment variables.
    pub fn from_env() -> Result<Self, StrategyError> {
        let d = Self::default();
        let config = Self {
            negative_override_health: env_or("CALIBRATION_NEGATIVE_OVERRIDE_HEALTH", d.negative_override_health)?,
            negative_override_base: env_or("CALIBRATION_NEGATIVE_OVERRIDE_BASE", d.negative_override_base)?,
            negative_override_scale: env_or("CALIBRATION_NEGATIVE_OVERRIDE_SCALE", d.negative_override_scale)?,
            strong_floor_health: env_or("CALIBRATION_STRONG_FLOOR_HEALTH", d.strong_floor_health)?,
            strong_floor_threshold: env_or("CALIBRATION_STRONG_FLOOR_THRESHOLD", d.strong_floor_threshold)?,
            strong_floor_base: env_or("CALIBRATION_STRONG_FLOOR_BASE", d.strong_floor_base)?,
            strong_floor_scale: env_or("CALIBRATION_STRONG_FLOOR_SCALE", d.strong_floor_scale)?,
            divergence_health: env_or("CALIBRATION_DIVERGENCE_HEALTH", d.divergence_health)?,
            divergence_gap: env_or("CALIBRATION_DIVERGENCE_GAP", d.divergence_gap)?,
            blend_factor: env_or("CALIBRATION_BLEND_FACTOR", d.blend_factor)?,
            ceiling_base: env_or("CALIBRATION_CEILING_BASE", d.ceiling_base)?,
            ceiling_scale: env_or("CALIBRATION_CEILING_SCALE", d.ceiling_scale)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StrategyError> {
        let unit_fields = [
            ("negative_override_health", self.negative_override_health),
            ("strong_floor_health", self.strong_floor_health),
            ("divergence_health", self.divergence_health),
            ("blend_factor", self.blend_factor),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(StrategyError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.divergence_gap < 0.0 {
            return Err(StrategyError::Config(format!(
                "divergence_gap must be non-negative, got {}",
                self.divergence_gap
            )));
        }
        Ok(())
    }
}
