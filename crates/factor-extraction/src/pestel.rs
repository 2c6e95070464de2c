use strategy_core::text::excerpt;
use strategy_core::{FrameworkExtractor, StrategicFactor};

use crate::metrics::{SectionStats, MIN_SECTION_CHARS};
use crate::section::combined_section;

/// PESTEL factor name -> section headers read for it
const PESTEL_SECTIONS: &[(&str, &[&str])] = &[
    ("Political", &["### POLITICAL AND REGULATORY", "### GOVERNMENT AND POLICY"]),
    ("Economic", &["### FINANCIAL DATA", "### ECONOMIC CONDITIONS"]),
    ("Social", &["### SOCIAL AND COMMUNITY"]),
    ("Technological", &["### TECHNOLOGY AND INNOVATION"]),
    ("Environmental", &["### ENVIRONMENTAL AND SUSTAINABILITY"]),
    ("Legal", &["### REGULATORY AND LEGAL INFORMATION"]),
];

pub struct PestelExtractor {
    min_section_chars: usize,
}

impl PestelExtractor {
    pub fn new() -> Self {
        Self {
            min_section_chars: MIN_SECTION_CHARS,
        }
    }

    pub fn with_min_section_chars(min_section_chars: usize) -> Self {
        Self { min_section_chars }
    }
}

impl Default for PestelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkExtractor for PestelExtractor {
    type Output = StrategicFactor;

    fn framework(&self) -> &'static str {
        "pestel"
    }

    fn extract(&self, text: &str) -> Vec<StrategicFactor> {
        PESTEL_SECTIONS
            .iter()
            .filter_map(|(name, headers)| {
                let content = combined_section(text, headers)?;
                let stats = SectionStats::of(&content);
                if stats.chars <= self.min_section_chars {
                    tracing::debug!("PESTEL {} section too short ({} chars)", name, stats.chars);
                    return None;
                }
                Some(StrategicFactor {
                    name: (*name).to_string(),
                    description: excerpt(&content),
                    weight: stats.weight(),
                    probability: stats.probability(),
                    impact: stats.impact(),
                    time_horizon: stats.time_horizon(),
                })
            })
            .collect()
    }
}
