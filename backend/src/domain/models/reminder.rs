//! Domain model for a self-care reminder.
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainReminder {
    pub id: String,
    pub profile_id: String,
    pub title: String,
    /// Time of day in 24h HH:MM format
    pub time_of_day: String,
    /// 0 = Sunday .. 6 = Saturday; None means every day
    pub day_of_week: Option<u8>,
    pub is_active: bool,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

impl DomainReminder {
    /// Generate a reminder ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("reminder::{}", epoch_millis)
    }

    /// Get the day name for the configured day of week
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            None => "Every day",
            Some(0) => "Sunday",
            Some(1) => "Monday",
            Some(2) => "Tuesday",
            Some(3) => "Wednesday",
            Some(4) => "Thursday",
            Some(5) => "Friday",
            Some(6) => "Saturday",
            Some(_) => "Invalid",
        }
    }

    /// Validate day of week value
    pub fn is_valid_day_of_week(day: u8) -> bool {
        day <= 6
    }

    /// Validate an HH:MM time string
    pub fn is_valid_time(time: &str) -> bool {
        let Some((hours, minutes)) = time.split_once(':') else {
            return false;
        };
        if hours.len() != 2 || minutes.len() != 2 {
            return false;
        }
        match (hours.parse::<u8>(), minutes.parse::<u8>()) {
            (Ok(h), Ok(m)) => h <= 23 && m <= 59,
            _ => false,
        }
    }

    /// Next moment this reminder fires, at or after `now`.
    ///
    /// Daily reminders fire today if the time is still ahead, otherwise
    /// tomorrow. Weekly reminders fire on the configured weekday. Returns
    /// None when the stored time string is unreadable.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let time = NaiveTime::parse_from_str(&self.time_of_day, "%H:%M").ok()?;

        let mut candidate = now.date().and_time(time);
        if candidate < now {
            candidate = candidate + Duration::days(1);
        }

        if let Some(target) = self.day_of_week {
            while candidate.weekday().num_days_from_sunday() != target as u32 {
                candidate = candidate + Duration::days(1);
            }
        }

        Some(candidate)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReminderValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title is too long (max 200 characters)")]
    TitleTooLong,
    #[error("Time must be in 24h HH:MM format")]
    InvalidTime,
    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidDayOfWeek,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_validation() {
        assert!(DomainReminder::is_valid_time("08:30"));
        assert!(DomainReminder::is_valid_time("00:00"));
        assert!(DomainReminder::is_valid_time("23:59"));
        assert!(!DomainReminder::is_valid_time("24:00"));
        assert!(!DomainReminder::is_valid_time("12:60"));
        assert!(!DomainReminder::is_valid_time("9:30"));
        assert!(!DomainReminder::is_valid_time("morning"));
        assert!(!DomainReminder::is_valid_time(""));
    }

    #[test]
    fn test_day_names() {
        let mut reminder = sample_reminder("09:00", None);
        assert_eq!(reminder.day_name(), "Every day");
        reminder.day_of_week = Some(0);
        assert_eq!(reminder.day_name(), "Sunday");
        reminder.day_of_week = Some(6);
        assert_eq!(reminder.day_name(), "Saturday");
    }

    fn sample_reminder(time: &str, day_of_week: Option<u8>) -> DomainReminder {
        DomainReminder {
            id: "reminder::1".to_string(),
            profile_id: "profile::1".to_string(),
            title: "Drink water".to_string(),
            time_of_day: time.to_string(),
            day_of_week,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test datetime")
    }

    #[test]
    fn test_daily_reminder_fires_today_before_its_time() {
        let reminder = sample_reminder("09:00", None);

        // 2025-12-15 is a Monday
        let next = reminder.next_occurrence(datetime("2025-12-15 08:00")).unwrap();

        assert_eq!(next, datetime("2025-12-15 09:00"));
    }

    #[test]
    fn test_daily_reminder_rolls_to_tomorrow_after_its_time() {
        let reminder = sample_reminder("09:00", None);

        let next = reminder.next_occurrence(datetime("2025-12-15 09:30")).unwrap();

        assert_eq!(next, datetime("2025-12-16 09:00"));
    }

    #[test]
    fn test_weekly_reminder_lands_on_configured_weekday() {
        // 3 = Wednesday; asked on a Monday
        let reminder = sample_reminder("09:00", Some(3));

        let next = reminder.next_occurrence(datetime("2025-12-15 10:00")).unwrap();

        assert_eq!(next, datetime("2025-12-17 09:00"));
    }

    #[test]
    fn test_weekly_reminder_same_day_after_time_waits_a_week() {
        // 1 = Monday; asked on a Monday after the reminder time
        let reminder = sample_reminder("09:00", Some(1));

        let next = reminder.next_occurrence(datetime("2025-12-15 09:30")).unwrap();

        assert_eq!(next, datetime("2025-12-22 09:00"));
    }

    #[test]
    fn test_next_occurrence_with_unreadable_time_is_none() {
        let reminder = sample_reminder("later", None);

        assert!(reminder.next_occurrence(datetime("2025-12-15 08:00")).is_none());
    }
}
