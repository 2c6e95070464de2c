//! Business Calibration
//!
//! Reconciles an externally produced strategic score with the business health
//! mined from the same narrative. Rules 1-3 are exclusive (first match wins);
//! the ceiling rule and the final clamp always run afterwards.

use crate::config::CalibrationConfig;
use crate::context::{mine_business_context, BusinessContext};
use serde::{Deserialize, Serialize};

pub const NO_CALIBRATION_REASON: &str = "No calibration required.";

/// A strategic score after business calibration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibratedResult {
    /// Score as supplied by the caller
    pub original_strategic_score: f64,
    /// Score after calibration, always within [0, 100]
    pub calibrated_strategic_score: f64,
    /// calibrated - original
    pub business_health_adjustment: f64,
    pub calibration_reason: String,
    pub recommended_interpretation: String,
    pub business_context: BusinessContext,
}

pub struct BusinessCalibrator {
    config: CalibrationConfig,
}

impl Default for BusinessCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessCalibrator {
    pub fn new() -> Self {
        Self::with_config(CalibrationConfig::default())
    }

    pub fn with_config(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Mine `text` and calibrate `raw_score` against it.
    pub fn calibrate_text(&self, raw_score: f64, text: &str) -> CalibratedResult {
        let context = mine_business_context(text);
        self.calibrate(raw_score, &context)
    }

    pub fn calibrate(&self, raw_score: f64, context: &BusinessContext) -> CalibratedResult {
        let cfg = &self.config;
        let health = context.business_health;
        let mut reasons: Vec<String> = Vec::new();

        let original = if raw_score.is_finite() {
            raw_score
        } else {
            reasons.push(format!("Raw score {} is not a finite number; treated as 0%.", raw_score));
            0.0
        };

        let mut score = original;

        if health > cfg.negative_override_health && original < 0.0 {
            let floor = cfg.negative_override_base + health * cfg.negative_override_scale;
            score = original.max(floor);
            reasons.push(format!(
                "Business fundamentals (health {:.2}) are overriding negative assessment of {:.1}%; score floored at {:.1}%.",
                health, original, floor
            ));
        } else if health > cfg.strong_floor_health && original < cfg.strong_floor_threshold {
            let floor = cfg.strong_floor_base + health * cfg.strong_floor_scale;
            score = original.max(floor);
            reasons.push(format!(
                "Strong business fundamentals (health {:.2}) lift a {:.1}% score to a floor of {:.1}%.",
                health, original, floor
            ));
        } else if health > cfg.divergence_health
            && (original - health * 100.0).abs() > cfg.divergence_gap
        {
            let target = health * 100.0;
            score = original + cfg.blend_factor * (target - original);
            reasons.push(format!(
                "Score of {:.1}% diverges from business health ({:.0}%) by more than {:.0} points; blended {:.0}% toward health.",
                original,
                target,
                cfg.divergence_gap,
                cfg.blend_factor * 100.0
            ));
        }

        if score > 100.0 {
            let ceiling = (cfg.ceiling_base + health * cfg.ceiling_scale).min(100.0);
            reasons.push(format!(
                "Score of {:.1}% exceeds 100%; capped at {:.1}%.",
                score, ceiling
            ));
            score = ceiling;
        }

        if score < 0.0 {
            reasons.push(format!("Score of {:.1}% is below 0%; clamped to 0%.", score));
        }
        let calibrated = score.clamp(0.0, 100.0);

        let calibration_reason = if reasons.is_empty() {
            NO_CALIBRATION_REASON.to_string()
        } else {
            reasons.join(" ")
        };

        let adjustment = calibrated - original;
        if adjustment != 0.0 {
            tracing::debug!(
                "Calibrated strategic score {:.1} -> {:.1} (health {:.2})",
                original,
                calibrated,
                health
            );
        }

        CalibratedResult {
            original_strategic_score: original,
            calibrated_strategic_score: calibrated,
            business_health_adjustment: adjustment,
            calibration_reason,
            recommended_interpretation: recommended_interpretation(calibrated, adjustment, context),
            business_context: context.clone(),
        }
    }
}

fn recommended_interpretation(calibrated: f64, adjustment: f64, context: &BusinessContext) -> String {
    let band = match calibrated {
        s if s >= 75.0 => "Strong strategic position",
        s if s >= 60.0 => "Solid strategic position",
        s if s >= 45.0 => "Moderate strategic position",
        _ => "Weak strategic position",
    };

    let guidance = if adjustment.abs() < 0.05 {
        "The strategic score is consistent with the business fundamentals.".to_string()
    } else {
        format!(
            "The strategic score was adjusted by {:+.1} points to reflect business fundamentals; review the raw model output alongside the narrative.",
            adjustment
        )
    };

    format!(
        "{} ({:.1}%). Business context: {}. {}",
        band,
        calibrated,
        context.summary(),
        guidance
    )
}

/// Calibrate `raw_score` against `text` with the default thresholds.
pub fn apply_business_calibration(raw_score: f64, text: &str) -> CalibratedResult {
    BusinessCalibrator::new().calibrate_text(raw_score, text)
}
