//! Section Locator
//!
//! Narratives mark sections with a literal `###` token followed by a header
//! phrase (`### FINANCIAL DATA`). A section runs from the end of its header to
//! the next `###` marker or the end of the text.

/// Marker token that opens every section header.
pub const SECTION_MARKER: &str = "###";

/// Return the trimmed content following `header`, up to the next section
/// marker. Matching is ASCII case-insensitive so byte offsets in the lowered
/// copy line up with the original text. Only the first occurrence counts.
pub fn locate_section<'a>(text: &'a str, header: &str) -> Option<&'a str> {
    if header.trim().is_empty() {
        return None;
    }

    let haystack = text.to_ascii_lowercase();
    let needle = header.to_ascii_lowercase();

    let start = haystack.find(&needle)? + needle.len();
    let end = haystack[start..]
        .find(SECTION_MARKER)
        .map(|offset| start + offset)
        .unwrap_or(text.len());

    Some(text[start..end].trim())
}

/// Locate every header in `headers` and join the non-empty contents with a
/// newline. Returns `None` when no header yields any content.
pub fn combined_section(text: &str, headers: &[&str]) -> Option<String> {
    let parts: Vec<&str> = headers
        .iter()
        .filter_map(|header| locate_section(text, header))
        .filter(|content| !content.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_isolation() {
        let text = "### A\nalpha content here\n### B\nbeta content";
        assert_eq!(locate_section(text, "### A"), Some("alpha content here"));
        assert_eq!(locate_section(text, "### B"), Some("beta content"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(locate_section("### A\nbody", "### C"), None);
        assert_eq!(locate_section("### A\nbody", "   "), None);
    }

    #[test]
    fn test_case_insensitive_match() {
        let text = "intro\n### Financial Data\nRevenue of $2B\n### next";
        assert_eq!(
            locate_section(text, "### FINANCIAL DATA"),
            Some("Revenue of $2B")
        );
    }

    #[test]
    fn test_non_ascii_content_keeps_offsets() {
        let text = "### SOCIAL AND COMMUNITY\nÉquipe française très engagée\n### END";
        assert_eq!(
            locate_section(text, "### social and community"),
            Some("Équipe française très engagée")
        );
    }

    #[test]
    fn test_runs_to_end_of_text() {
        let text = "### THREATS AND RISKS\n  currency exposure  ";
        assert_eq!(
            locate_section(text, "### THREATS AND RISKS"),
            Some("currency exposure")
        );
    }

    #[test]
    fn test_combined_section_joins_found_parts() {
        let text = "### SUPPLY CHAIN\nfew chip vendors\n### CUSTOMERS\nenterprise buyers";
        let combined = combined_section(text, &["### SUPPLIERS AND PARTNERS", "### SUPPLY CHAIN"]);
        assert_eq!(combined.as_deref(), Some("few chip vendors"));

        let both = combined_section(text, &["### SUPPLY CHAIN", "### CUSTOMERS"]);
        assert_eq!(both.as_deref(), Some("few chip vendors\nenterprise buyers"));

        assert_eq!(combined_section(text, &["### SUBSTITUTES"]), None);
    }
}
