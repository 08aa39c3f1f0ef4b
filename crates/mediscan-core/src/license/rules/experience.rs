//! Years-of-experience extraction.

use super::patterns::{EXPERIENCE_LABELED, EXPERIENCE_SUFFIX};
use super::{ExtractionMatch, FieldExtractor};

/// Experience field extractor.
///
/// The value is kept as the extracted digit string; there is no plausibility
/// check against the rest of the document.
pub struct ExperienceExtractor;

impl ExperienceExtractor {
    /// Create a new experience extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ExperienceExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // "experience: N years" takes precedence over "N years experience"
        for (pattern, confidence) in [(&*EXPERIENCE_LABELED, 0.95), (&*EXPERIENCE_SUFFIX, 0.85)] {
            for caps in pattern.captures_iter(text) {
                let years = caps[1].trim().to_string();

                if results.iter().any(|r: &ExtractionMatch<String>| r.value == years) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(years, confidence, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the years of experience from text.
pub fn extract_experience_years(text: &str) -> Option<String> {
    ExperienceExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_labeled() {
        assert_eq!(
            extract_experience_years("Experience: 8 years"),
            Some("8".to_string())
        );
    }

    #[test]
    fn test_extract_suffix() {
        assert_eq!(
            extract_experience_years("12 years experience"),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_extract_suffix_with_of() {
        assert_eq!(
            extract_experience_years("5 years of experience"),
            Some("5".to_string())
        );
    }

    #[test]
    fn test_singular_year() {
        assert_eq!(
            extract_experience_years("Experience: 1 year"),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_labeled_wins_over_suffix() {
        let text = "3 years experience\nExperience: 7 years";
        assert_eq!(extract_experience_years(text), Some("7".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_experience_years("Experience: senior"), None);
        assert_eq!(extract_experience_years(""), None);
    }
}
