//! Surface text statistics shared by every extractor.
//!
//! All derived numbers in the engine are functions of these counts, so they are
//! kept in one place and computed the same way everywhere.

/// Maximum characters kept in a record's description excerpt.
pub const EXCERPT_CHARS: usize = 200;

/// Number of Unicode scalar values in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-separated tokens in `text`.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Round to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// First `EXCERPT_CHARS` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if char_count(trimmed) <= EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Case-insensitive keyword presence check over ASCII keywords.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_ascii_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}
