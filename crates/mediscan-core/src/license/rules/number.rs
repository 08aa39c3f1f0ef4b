//! License number extraction.

use super::patterns::{LICENSE_GENERIC, LICENSE_LABELED, LICENSE_MEDICAL};
use super::{ExtractionMatch, FieldExtractor};

/// License number field extractor.
pub struct LicenseNumberExtractor;

impl LicenseNumberExtractor {
    /// Create a new license number extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LicenseNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LicenseNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Patterns in precedence order: "lic"/"license" with optional "#",
        // then "medical license", then the bare "license" label.
        for (pattern, confidence) in [
            (&*LICENSE_LABELED, 0.95),
            (&*LICENSE_MEDICAL, 0.9),
            (&*LICENSE_GENERIC, 0.85),
        ] {
            for caps in pattern.captures_iter(text) {
                let number = caps[1].trim().to_string();

                if results.iter().any(|r: &ExtractionMatch<String>| r.value == number) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(number, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the license number from text.
pub fn extract_license_number(text: &str) -> Option<String> {
    LicenseNumberExtractor::new().extract(text).map(|m| m.value)
}
