//! Closed-form numeric attributes derived from section text.
//!
//! These are bounded, reproducible inputs for the integration model. They do
//! not measure real-world probability or impact; they only depend on the
//! section's character and token counts.

use strategy_core::text::{char_count, round_to, token_count};
use strategy_core::{ForceTrend, SwotTimeframe, TimeHorizon};

/// Sections must be longer than this (in characters) to produce a record.
pub const MIN_SECTION_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStats {
    pub chars: usize,
    pub tokens: usize,
}

impl SectionStats {
    pub fn of(content: &str) -> Self {
        Self {
            chars: char_count(content),
            tokens: token_count(content),
        }
    }

    /// clamp(chars/50, 1, 10) + min(3, tokens/20), rounded. Range 1..=13.
    pub fn weight(&self) -> u32 {
        let base = (self.chars as f64 / 50.0).clamp(1.0, 10.0);
        let bonus = (self.tokens as f64 / 20.0).min(3.0);
        (base + bonus).round() as u32
    }

    /// 0.3 + (chars mod 100)/100 * 0.7, two decimals.
    pub fn probability(&self) -> f64 {
        round_to(0.3 + (self.chars % 100) as f64 / 100.0 * 0.7, 2)
    }

    /// (tokens mod 11) - 5, range -5..=5.
    pub fn impact(&self) -> i32 {
        (self.tokens % 11) as i32 - 5
    }

    /// 1 + (chars mod 10), capped at 10.
    pub fn strength(&self) -> u32 {
        (1 + self.chars % 10).min(10) as u32
    }

    pub fn trend(&self) -> ForceTrend {
        ForceTrend::from_index(self.chars % 3)
    }

    /// 0.2 + (tokens mod 80)/100, two decimals.
    pub fn confidence(&self) -> f64 {
        round_to(0.2 + (self.tokens % 80) as f64 / 100.0, 2)
    }

    pub fn time_horizon(&self) -> TimeHorizon {
        TimeHorizon::from_index(self.chars % 3)
    }

    pub fn swot_timeframe(&self) -> SwotTimeframe {
        SwotTimeframe::from_index(self.chars % 4)
    }
}
