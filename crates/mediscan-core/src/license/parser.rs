//! Rule-based license parser combining the per-field extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::profile::{ExtractionMetadata, FieldKind, LicenseProfile};

use super::rules::{
    FieldExtractor, NameExtractor, experience::extract_experience_years,
    number::extract_license_number, specialty::extract_specialization,
};

/// Result of license field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted credential profile.
    pub profile: LicenseProfile,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction metadata.
    pub metadata: ExtractionMetadata,
}

/// Trait for license parsing.
///
/// Parsing never fails: any subset of the recognized fields, including the
/// empty set, is a valid result. Missing fields are reported through the
/// metadata, not as errors.
pub trait LicenseParser {
    /// Parse license fields from text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based license parser.
///
/// Each field is extracted independently through an ordered pattern list; a
/// miss on one field never affects another.
pub struct RuleBasedLicenseParser {
    /// Whether the name line fallback is enabled.
    name_line_fallback: bool,
    /// Minimum trimmed length for a fallback name line.
    min_name_length: usize,
}

impl RuleBasedLicenseParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            name_line_fallback: true,
            min_name_length: 5,
        }
    }

    /// Set whether the name line fallback is used.
    pub fn with_name_fallback(mut self, fallback: bool) -> Self {
        self.name_line_fallback = fallback;
        self
    }

    /// Set the minimum trimmed length for a fallback name line.
    pub fn with_min_name_length(mut self, min: usize) -> Self {
        self.min_name_length = min;
        self
    }

    fn extract_name(&self, text: &str) -> Option<String> {
        NameExtractor::new()
            .with_line_fallback(self.name_line_fallback)
            .with_min_line_length(self.min_name_length)
            .extract(text)
            .map(|m| m.value)
    }
}

impl Default for RuleBasedLicenseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseParser for RuleBasedLicenseParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing license fields from {} characters of text", text.len());

        let profile = LicenseProfile {
            name: self.extract_name(text),
            license_number: extract_license_number(text),
            specialization: extract_specialization(text),
            experience_years: extract_experience_years(text),
        };

        let missing_fields = profile.missing_fields();
        let warnings: Vec<String> = missing_fields
            .iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        let mut confidence = 1.0f32;
        for field in &missing_fields {
            confidence -= match field {
                FieldKind::Name | FieldKind::LicenseNumber => 0.3,
                FieldKind::Specialization | FieldKind::ExperienceYears => 0.2,
            };
        }

        debug!(
            "Extracted {} of {} fields with confidence {:.2}",
            FieldKind::ALL.len() - missing_fields.len(),
            FieldKind::ALL.len(),
            confidence.max(0.0)
        );

        ExtractionResult {
            profile,
            raw_text: text.to_string(),
            metadata: ExtractionMetadata {
                confidence: confidence.max(0.0),
                processing_time_ms: Some(start.elapsed().as_millis() as u64),
                warnings,
                missing_fields,
            },
        }
    }
}

/// Extract license fields from text with default settings.
///
/// Convenience wrapper returning only the profile.
pub fn extract_fields(text: &str) -> LicenseProfile {
    RuleBasedLicenseParser::new().parse(text).profile
}
