//! Reminder status derivation and filtering.
//!
//! Status is derived from the scheduled time and an optional confirmation,
//! never stored: a reminder moves from upcoming to due once its scheduled
//! time passes, and to missed once the configured window elapses without
//! confirmation. Scheduling infrastructure (notifications, timers) lives
//! outside this crate.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::config::ReminderConfig;

/// Display status of a medication reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    /// Scheduled time has not arrived yet.
    Upcoming,
    /// Scheduled time has passed and the dose is awaiting confirmation.
    Due,
    /// Dose was confirmed as taken.
    Taken,
    /// Dose was not confirmed within the allowed window.
    Missed,
}

impl ReminderStatus {
    /// Parse a status from its wire name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Some(ReminderStatus::Upcoming),
            "due" => Some(ReminderStatus::Due),
            "taken" => Some(ReminderStatus::Taken),
            "missed" => Some(ReminderStatus::Missed),
            _ => None,
        }
    }

    /// Whether the reminder still needs user action.
    pub fn is_actionable(&self) -> bool {
        matches!(self, ReminderStatus::Upcoming | ReminderStatus::Due)
    }
}

impl std::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReminderStatus::Upcoming => "upcoming",
            ReminderStatus::Due => "due",
            ReminderStatus::Taken => "taken",
            ReminderStatus::Missed => "missed",
        };
        f.write_str(s)
    }
}

/// A single medication reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// Reminder identifier.
    pub id: String,

    /// Medication label shown to the patient.
    pub medication: String,

    /// Scheduled dose time.
    pub scheduled: NaiveDateTime,

    /// Confirmation time, if the dose was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<NaiveDateTime>,
}

impl Reminder {
    /// Create a new unconfirmed reminder.
    pub fn new(id: impl Into<String>, medication: impl Into<String>, scheduled: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            medication: medication.into(),
            scheduled,
            taken_at: None,
        }
    }

    /// Mark the dose as taken.
    pub fn mark_taken(&mut self, at: NaiveDateTime) {
        self.taken_at = Some(at);
    }

    /// Derive the display status at a point in time.
    pub fn status_at(&self, now: NaiveDateTime, config: &ReminderConfig) -> ReminderStatus {
        if self.taken_at.is_some() {
            return ReminderStatus::Taken;
        }

        if now < self.scheduled {
            return ReminderStatus::Upcoming;
        }

        let missed_cutoff = self.scheduled + Duration::minutes(config.due_window_minutes);
        if now < missed_cutoff {
            ReminderStatus::Due
        } else {
            ReminderStatus::Missed
        }
    }
}

/// Reminders with the given derived status at a point in time.
pub fn filter_by_status<'a>(
    reminders: &'a [Reminder],
    status: ReminderStatus,
    now: NaiveDateTime,
    config: &ReminderConfig,
) -> Vec<&'a Reminder> {
    reminders
        .iter()
        .filter(|r| r.status_at(now, config) == status)
        .collect()
}

/// Count of reminders per derived status, for UI badges.
pub fn count_by_status(
    reminders: &[Reminder],
    now: NaiveDateTime,
    config: &ReminderConfig,
) -> HashMap<ReminderStatus, usize> {
    let mut counts = HashMap::new();
    for reminder in reminders {
        *counts.entry(reminder.status_at(now, config)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_status_upcoming_before_scheduled() {
        let reminder = Reminder::new("r1", "Metformin 500mg", at(9, 0));
        let config = ReminderConfig::default();

        assert_eq!(reminder.status_at(at(8, 0), &config), ReminderStatus::Upcoming);
    }

    #[test]
    fn test_status_due_within_window() {
        let reminder = Reminder::new("r1", "Metformin 500mg", at(9, 0));
        let config = ReminderConfig::default();

        assert_eq!(reminder.status_at(at(9, 0), &config), ReminderStatus::Due);
        assert_eq!(reminder.status_at(at(10, 30), &config), ReminderStatus::Due);
    }

    #[test]
    fn test_status_missed_after_window() {
        let reminder = Reminder::new("r1", "Metformin 500mg", at(9, 0));
        let config = ReminderConfig::default();

        assert_eq!(reminder.status_at(at(11, 0), &config), ReminderStatus::Missed);
    }

    #[test]
    fn test_status_taken_overrides_time() {
        let mut reminder = Reminder::new("r1", "Metformin 500mg", at(9, 0));
        reminder.mark_taken(at(9, 10));
        let config = ReminderConfig::default();

        assert_eq!(reminder.status_at(at(23, 0), &config), ReminderStatus::Taken);
    }

    #[test]
    fn test_filter_by_status() {
        let mut taken = Reminder::new("r1", "Metformin 500mg", at(8, 0));
        taken.mark_taken(at(8, 5));

        let reminders = vec![
            taken,
            Reminder::new("r2", "Lisinopril 10mg", at(9, 30)),
            Reminder::new("r3", "Aspirin 81mg", at(14, 0)),
            Reminder::new("r4", "Atorvastatin 20mg", at(6, 0)),
        ];
        let config = ReminderConfig::default();
        let now = at(10, 0);

        let due = filter_by_status(&reminders, ReminderStatus::Due, now, &config);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "r2");

        let upcoming = filter_by_status(&reminders, ReminderStatus::Upcoming, now, &config);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "r3");

        let missed = filter_by_status(&reminders, ReminderStatus::Missed, now, &config);
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].id, "r4");
    }

    #[test]
    fn test_count_by_status() {
        let reminders = vec![
            Reminder::new("r1", "Metformin 500mg", at(9, 30)),
            Reminder::new("r2", "Lisinopril 10mg", at(9, 45)),
            Reminder::new("r3", "Aspirin 81mg", at(14, 0)),
        ];
        let config = ReminderConfig::default();
        let counts = count_by_status(&reminders, at(10, 0), &config);

        assert_eq!(counts.get(&ReminderStatus::Due), Some(&2));
        assert_eq!(counts.get(&ReminderStatus::Upcoming), Some(&1));
        assert_eq!(counts.get(&ReminderStatus::Missed), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReminderStatus::Upcoming,
            ReminderStatus::Due,
            ReminderStatus::Taken,
            ReminderStatus::Missed,
        ] {
            assert_eq!(ReminderStatus::from_str(&status.to_string()), Some(status));
        }
        assert_eq!(ReminderStatus::from_str("unknown"), None);
    }

    #[test]
    fn test_is_actionable() {
        assert!(ReminderStatus::Upcoming.is_actionable());
        assert!(ReminderStatus::Due.is_actionable());
        assert!(!ReminderStatus::Taken.is_actionable());
        assert!(!ReminderStatus::Missed.is_actionable());
    }
}
