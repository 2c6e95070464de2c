//! Factor Extraction
//!
//! Turns a sectioned company narrative into PESTEL factors, Porter forces and
//! SWOT elements using fixed header tables and closed-form text statistics.

pub mod forces;
pub mod metrics;
pub mod pestel;
pub mod quality;
pub mod section;
pub mod swot;

pub use forces::FiveForcesExtractor;
pub use metrics::{SectionStats, MIN_SECTION_CHARS};
pub use pestel::PestelExtractor;
pub use quality::assess_quality;
pub use section::{combined_section, locate_section, SECTION_MARKER};
pub use swot::SwotExtractor;

use strategy_core::text::char_count;
use strategy_core::{ExtractionResult, FrameworkExtractor};

/// Runs all three framework extractors over one narrative.
pub struct FactorExtractionEngine {
    pestel: PestelExtractor,
    forces: FiveForcesExtractor,
    swot: SwotExtractor,
}

impl FactorExtractionEngine {
    pub fn new() -> Self {
        Self::with_min_section_chars(MIN_SECTION_CHARS)
    }

    pub fn with_min_section_chars(min_section_chars: usize) -> Self {
        Self {
            pestel: PestelExtractor::with_min_section_chars(min_section_chars),
            forces: FiveForcesExtractor::with_min_section_chars(min_section_chars),
            swot: SwotExtractor::with_min_section_chars(min_section_chars),
        }
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        if text.trim().is_empty() {
            tracing::debug!("Empty narrative, nothing to extract");
            return ExtractionResult::empty();
        }

        let pestel_factors = self.pestel.extract(text);
        let competitive_forces = self.forces.extract(text);
        let swot_elements = self.swot.extract(text);

        let evidence_count = pestel_factors.len() + competitive_forces.len() + swot_elements.len();
        let data_quality = assess_quality(evidence_count, char_count(text));

        tracing::debug!(
            "Extracted {} {}, {} {}, {} {} items (quality: {})",
            pestel_factors.len(),
            self.pestel.framework(),
            competitive_forces.len(),
            self.forces.framework(),
            swot_elements.len(),
            self.swot.framework(),
            data_quality.to_label()
        );

        ExtractionResult {
            pestel_factors,
            competitive_forces,
            swot_elements,
            data_quality,
            evidence_count,
        }
    }
}

impl Default for FactorExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract PESTEL, Five Forces and SWOT records from `text`.
pub fn extract_factors(text: &str) -> ExtractionResult {
    FactorExtractionEngine::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategy_core::{DataQuality, ForceKind, SwotCategory};

    const NARRATIVE: &str = "### COMPANY INFORMATION
Northwind Logistics operates freight networks across three continents.

### FINANCIAL DATA
Revenue of $5.68 billion with EBITDA margin of 19% and revenue growth of 3.5%.

### REGULATORY AND LEGAL INFORMATION
Customs rules and emissions reporting obligations apply in every region served.

### TECHNOLOGY AND INNOVATION
Route optimization software and telematics across the whole truck fleet.

### ENVIRONMENTAL AND SUSTAINABILITY
Electrifying last-mile vans and buying renewable power for every depot.

### COMPETITIVE LANDSCAPE
Competes with global integrators and many regional carriers on price.

### MARKET INFORMATION
Large retail shippers hold significant negotiating leverage on contract rates.

### STRENGTHS AND ADVANTAGES
The largest cold-chain network in the region and a trusted brand.

### CHALLENGES AND WEAKNESSES
Legacy warehouse systems and high driver turnover in peak seasons.

### OPPORTUNITIES
Cross-border e-commerce growth and pharmaceutical logistics contracts.

### THREATS AND RISKS
Fuel price volatility and tightening labour regulation in key markets.
";

    #[test]
    fn test_full_narrative_extraction() {
        let result = extract_factors(NARRATIVE);

        assert_eq!(result.pestel_factors.len(), 4);
        assert_eq!(result.competitive_forces.len(), 2);
        assert_eq!(result.swot_elements.len(), 4);
        assert_eq!(result.evidence_count, 10);
        assert_eq!(result.data_quality, DataQuality::High);

        assert_eq!(result.competitive_forces[0].name, ForceKind::CompetitiveRivalry);
        assert_eq!(result.competitive_forces[1].name, ForceKind::BuyerPower);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_factors(NARRATIVE);
        let second = extract_factors(NARRATIVE);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_text_is_insufficient() {
        let result = extract_factors("   ");
        assert!(result.pestel_factors.is_empty());
        assert!(result.competitive_forces.is_empty());
        assert!(result.swot_elements.is_empty());
        assert_eq!(result.data_quality, DataQuality::Insufficient);
    }

    #[test]
    fn test_single_strength_section_is_insufficient() {
        let text = "### STRENGTHS AND ADVANTAGES\nPatented process with decade-long lead";
        let result = extract_factors(text);
        assert_eq!(result.swot_elements.len(), 1);
        assert_eq!(result.swot_elements[0].category, SwotCategory::Strength);
        assert_eq!(result.evidence_count, 1);
        assert_eq!(result.data_quality, DataQuality::Insufficient);
    }

    #[test]
    fn test_unrecognized_headers_are_ignored() {
        let text = "### MANAGEMENT TEAM\nSeasoned executives from the airline industry.";
        assert!(extract_factors(text).is_empty());
    }
}
