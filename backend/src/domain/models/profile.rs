//! Domain model for a tracked mother profile.
use serde::{Deserialize, Serialize};
use shared::ProfileStage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProfile {
    pub id: String,
    pub name: String,
    pub stage: ProfileStage,
    /// Expected delivery date, YYYY-MM-DD. Pregnancy stage only.
    pub due_date: Option<String>,
    /// Manually entered gestational week, used when no due date is known
    pub current_week: Option<u32>,
    /// Date the week above was entered, YYYY-MM-DD
    pub week_recorded_at: Option<String>,
    /// Baby's date of birth, YYYY-MM-DD. Postpartum stage only.
    pub baby_birthdate: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

impl DomainProfile {
    /// Generate a profile ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("profile::{}", epoch_millis)
    }

    /// Whether this profile can produce a pregnancy progress snapshot
    pub fn has_pregnancy_data(&self) -> bool {
        self.stage == ProfileStage::Pregnancy
            && (self.due_date.is_some() || self.current_week.is_some())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name is too long (max 100 characters)")]
    NameTooLong,
    #[error("Due date must be a valid date in YYYY-MM-DD format")]
    InvalidDueDate,
    #[error("Pregnancy week must be between 1 and 42")]
    WeekOutOfRange,
    #[error("Baby birthdate must be a valid date in YYYY-MM-DD format")]
    InvalidBirthdate,
    #[error("Pregnancy profiles need a due date or a current week")]
    MissingPregnancyData,
    #[error("Postpartum profiles need the baby's birthdate")]
    MissingBirthdate,
}
