//! Credential profile models produced by license extraction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The fixed set of fields the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Practitioner name.
    Name,
    /// Medical license number.
    LicenseNumber,
    /// Medical specialization.
    Specialization,
    /// Years of professional experience.
    ExperienceYears,
}

impl FieldKind {
    /// All recognized fields, in extraction order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::LicenseNumber,
        FieldKind::Specialization,
        FieldKind::ExperienceYears,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::LicenseNumber => "licenseNumber",
            FieldKind::Specialization => "specialization",
            FieldKind::ExperienceYears => "experienceYears",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields extracted from a scanned license or ID document.
///
/// Every field is optional: partial extraction is the normal case, and an
/// entirely empty profile is a valid result for unrecognizable input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseProfile {
    /// Practitioner name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// License number as printed on the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,

    /// Medical specialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,

    /// Years of experience, kept as the extracted digit string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<String>,
}

impl LicenseProfile {
    /// Value of a single field, if it was extracted.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Name => self.name.as_deref(),
            FieldKind::LicenseNumber => self.license_number.as_deref(),
            FieldKind::Specialization => self.specialization.as_deref(),
            FieldKind::ExperienceYears => self.experience_years.as_deref(),
        }
    }

    /// The profile as a field-name-to-value map, present keys only.
    pub fn fields(&self) -> HashMap<FieldKind, String> {
        FieldKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|v| (kind, v.to_string())))
            .collect()
    }

    /// Fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<FieldKind> {
        FieldKind::ALL
            .iter()
            .copied()
            .filter(|&kind| self.get(kind).is_none())
            .collect()
    }

    /// Check whether no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        FieldKind::ALL.iter().all(|&kind| self.get(kind).is_none())
    }
}

/// Metadata about the extraction process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Overall extraction confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Warnings or issues encountered during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Fields that could not be extracted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<FieldKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_map_contains_only_present_keys() {
        let profile = LicenseProfile {
            name: Some("Jane Smith".to_string()),
            license_number: None,
            specialization: Some("Cardiology".to_string()),
            experience_years: None,
        };

        let map = profile.fields();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&FieldKind::Name).map(String::as_str), Some("Jane Smith"));
        assert_eq!(
            map.get(&FieldKind::Specialization).map(String::as_str),
            Some("Cardiology")
        );
        assert!(!map.contains_key(&FieldKind::LicenseNumber));
        assert!(!map.contains_key(&FieldKind::ExperienceYears));
    }

    #[test]
    fn test_missing_fields() {
        let profile = LicenseProfile {
            name: Some("Jane Smith".to_string()),
            ..Default::default()
        };

        assert_eq!(
            profile.missing_fields(),
            vec![
                FieldKind::LicenseNumber,
                FieldKind::Specialization,
                FieldKind::ExperienceYears
            ]
        );
    }

    #[test]
    fn test_empty_profile() {
        let profile = LicenseProfile::default();
        assert!(profile.is_empty());
        assert!(profile.fields().is_empty());
    }

    #[test]
    fn test_field_kind_wire_names() {
        assert_eq!(FieldKind::Name.as_str(), "name");
        assert_eq!(FieldKind::LicenseNumber.as_str(), "licenseNumber");
        assert_eq!(FieldKind::Specialization.as_str(), "specialization");
        assert_eq!(FieldKind::ExperienceYears.as_str(), "experienceYears");
    }

    #[test]
    fn test_profile_serialization_skips_missing() {
        let profile = LicenseProfile {
            name: Some("John Carter".to_string()),
            license_number: Some("99-XYZ".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"licenseNumber\":\"99-XYZ\""));
        assert!(!json.contains("specialization"));
        assert!(!json.contains("experienceYears"));
    }
}
