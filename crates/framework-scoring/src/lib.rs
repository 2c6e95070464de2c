//! Framework Scoring
//!
//! Collapses the records of each framework into a single operator value:
//! PESTEL expected impact, Five-Forces industry attractiveness and SWOT
//! effectiveness.

use serde::{Deserialize, Serialize};
use strategy_core::{CompetitiveForce, ExtractionResult, StrategicFactor, SwotElement};

/// Attractiveness reported when no force was extracted
pub const NEUTRAL_ATTRACTIVENESS: f64 = 0.5;

/// Largest |impact| a SWOT element can carry
const SWOT_IMPACT_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameworkScores {
    /// Σ weight × probability × impact
    pub pestel: f64,
    /// 1.0 is a fully attractive industry, 0.0 a hostile one
    pub forces: f64,
    /// -1.0 to 1.0
    pub swot: f64,
}

/// Expected macro-environment impact. Zero when no factor was extracted.
pub fn pestel_expected_impact(factors: &[StrategicFactor]) -> f64 {
    factors
        .iter()
        .map(|f| f.weight as f64 * f.probability * f.impact as f64)
        .sum()
}

/// Industry attractiveness: `1 - Σ_i f_i Σ_{j≠i} W_ij / n` with `f_i = strength / 10`.
///
/// `W_ij` is read from force `i`'s influence map keyed by force `j`'s label and
/// falls back to the uniform `1 / (n - 1)`. A lone force carries its full
/// pressure, so the result reduces to `1 - f` there.
pub fn five_forces_attractiveness(forces: &[CompetitiveForce]) -> f64 {
    let n = forces.len();
    if n == 0 {
        return NEUTRAL_ATTRACTIVENESS;
    }
    if n == 1 {
        return 1.0 - pressure(&forces[0]);
    }

    let uniform = 1.0 / (n - 1) as f64;
    let total: f64 = forces
        .iter()
        .enumerate()
        .map(|(i, force)| {
            let cross: f64 = forces
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| {
                    force
                        .influence
                        .get(other.name.to_label())
                        .copied()
                        .unwrap_or(uniform)
                })
                .sum();
            pressure(force) * cross
        })
        .sum();

    1.0 - total / n as f64
}

fn pressure(force: &CompetitiveForce) -> f64 {
    force.strength as f64 / 10.0
}

fn swot_value(element: &SwotElement) -> f64 {
    element.category.sign() * (element.impact.unsigned_abs() as f64) * element.confidence / SWOT_IMPACT_SCALE
}

/// Mean interaction over every internal × external pair, where a pair scores
/// the average of its two signed values. Zero when either side is empty.
pub fn swot_effectiveness(elements: &[SwotElement]) -> f64 {
    let (internal, external): (Vec<&SwotElement>, Vec<&SwotElement>) =
        elements.iter().partition(|e| e.category.is_internal());
    if internal.is_empty() || external.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for int in &internal {
        for ext in &external {
            sum += (swot_value(int) + swot_value(ext)) / 2.0;
        }
    }
    sum / (internal.len() * external.len()) as f64
}

pub fn score_frameworks(extraction: &ExtractionResult) -> FrameworkScores {
    let scores = FrameworkScores {
        pestel: pestel_expected_impact(&extraction.pestel_factors),
        forces: five_forces_attractiveness(&extraction.competitive_forces),
        swot: swot_effectiveness(&extraction.swot_elements),
    };
    tracing::debug!(
        "Framework scores: pestel={:.3} forces={:.3} swot={:.3}",
        scores.pestel,
        scores.forces,
        scores.swot
    );
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use strategy_core::{ForceKind, ForceTrend, SwotCategory, SwotTimeframe, TimeHorizon};

    fn factor(weight: u32, probability: f64, impact: i32) -> StrategicFactor {
        StrategicFactor {
            name: "Economic".to_string(),
            description: String::new(),
            weight,
            probability,
            impact,
            time_horizon: TimeHorizon::Medium,
        }
    }

    fn force(name: ForceKind, strength: u32) -> CompetitiveForce {
        CompetitiveForce {
            name,
            strength,
            trend: ForceTrend::Stable,
            description: String::new(),
            influence: BTreeMap::new(),
        }
    }

    fn element(category: SwotCategory, impact: i32, confidence: f64) -> SwotElement {
        SwotElement {
            name: "item".to_string(),
            description: String::new(),
            impact,
            confidence,
            timeframe: SwotTimeframe::Immediate,
            category,
        }
    }

    #[test]
    fn test_pestel_expected_impact() {
        let factors = vec![factor(3, 0.5, 4), factor(2, 0.25, -2)];
        // 3*0.5*4 + 2*0.25*(-2) = 6 - 1
        assert!((pestel_expected_impact(&factors) - 5.0).abs() < 1e-9);
        assert_eq!(pestel_expected_impact(&[]), 0.0);
    }

    #[test]
    fn test_attractiveness_uniform_weights() {
        let forces = vec![force(ForceKind::CompetitiveRivalry, 8), force(ForceKind::BuyerPower, 4)];
        // uniform weights sum to 1 per force: 1 - (0.8 + 0.4) / 2
        assert!((five_forces_attractiveness(&forces) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_attractiveness_uses_influence_map() {
        let mut rivalry = force(ForceKind::CompetitiveRivalry, 10);
        rivalry
            .influence
            .insert(ForceKind::BuyerPower.to_label().to_string(), 0.5);
        let forces = vec![rivalry, force(ForceKind::BuyerPower, 2)];
        // (1.0 * 0.5 + 0.2 * 1.0) / 2 = 0.35
        assert!((five_forces_attractiveness(&forces) - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_attractiveness_edges() {
        assert_eq!(five_forces_attractiveness(&[]), NEUTRAL_ATTRACTIVENESS);
        let single = vec![force(ForceKind::ThreatOfSubstitutes, 3)];
        assert!((five_forces_attractiveness(&single) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_swot_effectiveness() {
        let elements = vec![
            element(SwotCategory::Strength, 5, 1.0),
            element(SwotCategory::Weakness, 2, 0.5),
            element(SwotCategory::Opportunity, 3, 1.0),
        ];
        // values: S=1.0, W=-0.2, O=0.6; pairs (S,O)=0.8 (W,O)=0.2 -> mean 0.5
        assert!((swot_effectiveness(&elements) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_swot_needs_both_sides() {
        let internal_only = vec![element(SwotCategory::Strength, 5, 1.0)];
        assert_eq!(swot_effectiveness(&internal_only), 0.0);
        assert_eq!(swot_effectiveness(&[]), 0.0);
    }

    #[test]
    fn test_empty_extraction_scores_neutral() {
        let scores = score_frameworks(&ExtractionResult::empty());
        assert_eq!(
            scores,
            FrameworkScores {
                pestel: 0.0,
                forces: NEUTRAL_ATTRACTIVENESS,
                swot: 0.0
            }
        );
    }
}
