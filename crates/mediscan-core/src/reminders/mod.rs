//! Medication reminder status module.

mod status;

pub use status::{Reminder, ReminderStatus, count_by_status, filter_by_status};
