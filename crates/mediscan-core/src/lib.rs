//! Core library for medical credential scanning.
//!
//! This crate provides:
//! - License field extraction from OCR transcripts (name, license number,
//!   specialization, experience years)
//! - Data models for extracted credential profiles
//! - Medication reminder status derivation and filtering

pub mod error;
pub mod license;
pub mod models;
pub mod reminders;

pub use error::{MediscanError, Result};
pub use license::{ExtractionResult, LicenseParser, RuleBasedLicenseParser, extract_fields};
pub use models::config::{ExtractionConfig, MediscanConfig, ReminderConfig};
pub use models::profile::{ExtractionMetadata, FieldKind, LicenseProfile};
pub use reminders::{Reminder, ReminderStatus};
