//! Medical specialization extraction.

use super::patterns::{SPECIALTY_FIELD, SPECIALTY_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Specialization field extractor.
pub struct SpecialtyExtractor;

impl SpecialtyExtractor {
    /// Create a new specialization extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpecialtyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SpecialtyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // "specialization:"/"speciality:" takes precedence over "field:"
        for (pattern, confidence) in [(&*SPECIALTY_LABELED, 0.95), (&*SPECIALTY_FIELD, 0.85)] {
            for caps in pattern.captures_iter(text) {
                let specialty = caps[1].trim().to_string();

                if results.iter().any(|r: &ExtractionMatch<String>| r.value == specialty) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(specialty, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the medical specialization from text.
pub fn extract_specialization(text: &str) -> Option<String> {
    SpecialtyExtractor::new().extract(text).map(|m| m.value)
}
