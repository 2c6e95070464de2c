use strategy_core::text::excerpt;
use strategy_core::{FrameworkExtractor, SwotCategory, SwotElement};

use crate::metrics::{SectionStats, MIN_SECTION_CHARS};
use crate::section::combined_section;

const SWOT_SECTIONS: &[(&str, SwotCategory, &[&str])] = &[
    (
        "Strengths",
        SwotCategory::Strength,
        &["### STRENGTHS AND ADVANTAGES", "### COMPETITIVE ADVANTAGES"],
    ),
    ("Weaknesses", SwotCategory::Weakness, &["### CHALLENGES AND WEAKNESSES"]),
    ("Opportunities", SwotCategory::Opportunity, &["### OPPORTUNITIES"]),
    ("Threats", SwotCategory::Threat, &["### THREATS AND RISKS"]),
];

pub struct SwotExtractor {
    min_section_chars: usize,
}

impl SwotExtractor {
    pub fn new() -> Self {
        Self {
            min_section_chars: MIN_SECTION_CHARS,
        }
    }

    pub fn with_min_section_chars(min_section_chars: usize) -> Self {
        Self { min_section_chars }
    }
}

impl Default for SwotExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkExtractor for SwotExtractor {
    type Output = SwotElement;

    fn framework(&self) -> &'static str {
        "swot"
    }

    fn extract(&self, text: &str) -> Vec<SwotElement> {
        SWOT_SECTIONS
            .iter()
            .filter_map(|(name, category, headers)| {
                let content = combined_section(text, headers)?;
                let stats = SectionStats::of(&content);
                if stats.chars <= self.min_section_chars {
                    return None;
                }
                Some(SwotElement {
                    name: (*name).to_string(),
                    description: excerpt(&content),
                    impact: stats.impact(),
                    confidence: stats.confidence(),
                    timeframe: stats.swot_timeframe(),
                    category: *category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy_core::SwotTimeframe;

    #[test]
    fn test_single_strength_section() {
        let text = "### STRENGTHS AND ADVANTAGES\nDominant brand with loyal customers";
        let elements = SwotExtractor::new().extract(text);
        assert_eq!(elements.len(), 1);

        let strength = &elements[0];
        assert_eq!(strength.category, SwotCategory::Strength);
        assert_eq!(strength.name, "Strengths");
        // 35 chars, 5 tokens
        assert_eq!(strength.confidence, 0.25);
        assert_eq!(strength.impact, 0);
        assert_eq!(strength.timeframe, SwotTimeframe::Long);
    }

    #[test]
    fn test_all_quadrants() {
        let text = "### STRENGTHS AND ADVANTAGES\nDominant brand with loyal customers\n\
                    ### CHALLENGES AND WEAKNESSES\nAging on-premise product line to migrate\n\
                    ### OPPORTUNITIES\nExpansion into Southeast Asian markets\n\
                    ### THREATS AND RISKS\nNew regulation on cross-border data flows";
        let categories: Vec<SwotCategory> = SwotExtractor::new()
            .extract(text)
            .iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                SwotCategory::Strength,
                SwotCategory::Weakness,
                SwotCategory::Opportunity,
                SwotCategory::Threat
            ]
        );
    }
}
