//! Practitioner name extraction.

use super::patterns::{NAME_HONORIFIC, NAME_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Name field extractor.
///
/// Tries the labeled pattern, then the honorific pattern, then optionally
/// falls back to the first line of the document that looks like a bare name.
pub struct NameExtractor {
    line_fallback: bool,
    min_line_length: usize,
}

impl NameExtractor {
    /// Create a new name extractor with default settings.
    pub fn new() -> Self {
        Self {
            line_fallback: true,
            min_line_length: 5,
        }
    }

    /// Set whether the line-scan fallback is used.
    pub fn with_line_fallback(mut self, fallback: bool) -> Self {
        self.line_fallback = fallback;
        self
    }

    /// Set the minimum trimmed length a fallback line must have.
    pub fn with_min_line_length(mut self, min: usize) -> Self {
        self.min_line_length = min;
        self
    }

    /// First line consisting entirely of letters, periods, and whitespace.
    ///
    /// Known ambiguity: this picks the first plausible-looking line and can
    /// misfire on letterhead text preceding the actual name.
    fn fallback_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.lines()
            .map(str::trim)
            .find(|line| self.is_plausible_name(line))
    }

    fn is_plausible_name(&self, line: &str) -> bool {
        line.chars().count() >= self.min_line_length
            && line
                .chars()
                .all(|c| c.is_alphabetic() || c == '.' || c.is_whitespace())
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labeled pattern first (higher confidence)
        for caps in NAME_LABELED.captures_iter(text) {
            let name = caps[1].trim().to_string();
            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(name, 0.95, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        // Honorific pattern (lower confidence)
        for caps in NAME_HONORIFIC.captures_iter(text) {
            let name = caps[1].trim().to_string();

            // Skip if already found with the labeled pattern
            if results.iter().any(|r| r.value == name) {
                continue;
            }

            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(name, 0.85, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        // Line-scan fallback, only when no pattern matched anywhere
        if results.is_empty() && self.line_fallback {
            if let Some(line) = self.fallback_line(text) {
                results.push(ExtractionMatch::new(line.to_string(), 0.5, line));
            }
        }

        results
    }
}

/// Extract the practitioner name from text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}
