use std::collections::BTreeMap;

use strategy_core::text::excerpt;
use strategy_core::{CompetitiveForce, ForceKind, FrameworkExtractor};

use crate::metrics::{SectionStats, MIN_SECTION_CHARS};
use crate::section::combined_section;

/// Each force reads its own sections; supplier and buyer power never share one.
const FORCE_SECTIONS: &[(ForceKind, &[&str])] = &[
    (ForceKind::CompetitiveRivalry, &["### COMPETITIVE LANDSCAPE"]),
    (ForceKind::SupplierPower, &["### SUPPLIERS AND PARTNERS", "### SUPPLY CHAIN"]),
    (ForceKind::BuyerPower, &["### MARKET INFORMATION", "### CUSTOMERS"]),
    (ForceKind::ThreatOfNewEntrants, &["### BARRIERS TO ENTRY", "### INDUSTRY STRUCTURE"]),
    (ForceKind::ThreatOfSubstitutes, &["### SUBSTITUTES", "### ALTERNATIVE PRODUCTS"]),
];

pub struct FiveForcesExtractor {
    min_section_chars: usize,
}

impl FiveForcesExtractor {
    pub fn new() -> Self {
        Self {
            min_section_chars: MIN_SECTION_CHARS,
        }
    }

    pub fn with_min_section_chars(min_section_chars: usize) -> Self {
        Self { min_section_chars }
    }
}

impl Default for FiveForcesExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkExtractor for FiveForcesExtractor {
    type Output = CompetitiveForce;

    fn framework(&self) -> &'static str {
        "five_forces"
    }

    fn extract(&self, text: &str) -> Vec<CompetitiveForce> {
        FORCE_SECTIONS
            .iter()
            .filter_map(|(kind, headers)| {
                let content = combined_section(text, headers)?;
                let stats = SectionStats::of(&content);
                if stats.chars <= self.min_section_chars {
                    tracing::debug!(
                        "{} section too short ({} chars)",
                        kind.to_label(),
                        stats.chars
                    );
                    return None;
                }
                Some(CompetitiveForce {
                    name: *kind,
                    strength: stats.strength(),
                    trend: stats.trend(),
                    description: excerpt(&content),
                    influence: BTreeMap::new(),
                })
            })
            .collect()
    }
}
