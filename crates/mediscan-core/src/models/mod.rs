//! Data models for credential profiles and configuration.

pub mod config;
pub mod profile;

pub use config::{ExtractionConfig, MediscanConfig, ReminderConfig};
pub use profile::{ExtractionMetadata, FieldKind, LicenseProfile};
