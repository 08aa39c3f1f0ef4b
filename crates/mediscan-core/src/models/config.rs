//! Configuration structures for the mediscan pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{MediscanError, Result};

/// Main configuration for the mediscan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediscanConfig {
    /// License extraction configuration.
    pub extraction: ExtractionConfig,

    /// Reminder status configuration.
    pub reminders: ReminderConfig,
}

impl Default for MediscanConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            reminders: ReminderConfig::default(),
        }
    }
}

/// License extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Enable the line-scan fallback for the name field when no labeled or
    /// honorific pattern matches.
    pub name_line_fallback: bool,

    /// Minimum length of a trimmed line accepted by the name fallback.
    pub min_name_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_line_fallback: true,
            min_name_length: 5,
        }
    }
}

/// Reminder status configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Minutes after the scheduled time during which an unconfirmed reminder
    /// is due; past the window it counts as missed.
    pub due_window_minutes: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            due_window_minutes: 120,
        }
    }
}

impl MediscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.min_name_length == 0 {
            return Err(MediscanError::Config(
                "extraction.min_name_length must be at least 1".to_string(),
            ));
        }
        if self.reminders.due_window_minutes <= 0 {
            return Err(MediscanError::Config(
                "reminders.due_window_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MediscanConfig::default();
        assert!(config.extraction.name_line_fallback);
        assert_eq!(config.extraction.min_name_length, 5);
        assert_eq!(config.reminders.due_window_minutes, 120);
    }

    #[test]
    fn test_validate_rejects_zero_name_length() {
        let mut config = MediscanConfig::default();
        config.extraction.min_name_length = 0;
        assert!(config.validate().is_err());

        config.extraction.min_name_length = 5;
        config.reminders.due_window_minutes = -10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: MediscanConfig =
            serde_json::from_str(r#"{"extraction": {"min_name_length": 3}}"#).unwrap();
        assert_eq!(config.extraction.min_name_length, 3);
        assert!(config.extraction.name_line_fallback);
        assert_eq!(config.reminders.due_window_minutes, 120);
    }
}
