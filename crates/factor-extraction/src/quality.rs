use strategy_core::DataQuality;

pub const MIN_TEXT_CHARS: usize = 100;
pub const HIGH_EVIDENCE: usize = 6;
pub const HIGH_TEXT_CHARS: usize = 1000;
pub const MEDIUM_EVIDENCE: usize = 3;
pub const MEDIUM_TEXT_CHARS: usize = 500;

/// Classify extraction confidence from evidence volume and input length.
pub fn assess_quality(evidence_count: usize, text_chars: usize) -> DataQuality {
    if evidence_count == 0 || text_chars < MIN_TEXT_CHARS {
        DataQuality::Insufficient
    } else if evidence_count >= HIGH_EVIDENCE && text_chars >= HIGH_TEXT_CHARS {
        DataQuality::High
    } else if evidence_count >= MEDIUM_EVIDENCE && text_chars >= MEDIUM_TEXT_CHARS {
        DataQuality::Medium
    } else {
        DataQuality::Low
    }
}
