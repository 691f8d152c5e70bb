use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::domain::commands::reminders::{
    CreateReminderCommand, DeleteReminderCommand, ReminderListResult, ReminderResult,
    UpdateReminderCommand,
};
use crate::domain::models::reminder::{DomainReminder, ReminderValidationError};
use crate::domain::profile_service::ProfileService;
use crate::storage::{ReminderRepository, ReminderStorage};

/// Service for managing wellness reminders
#[derive(Clone)]
pub struct ReminderService {
    repository: ReminderRepository,
    profile_service: ProfileService,
}

impl ReminderService {
    /// Create a new ReminderService
    pub fn new(repository: ReminderRepository, profile_service: ProfileService) -> Self {
        Self {
            repository,
            profile_service,
        }
    }

    /// Create a new reminder
    pub async fn create_reminder(&self, command: CreateReminderCommand) -> Result<ReminderResult> {
        info!(
            "Creating reminder: title={}, time={}",
            command.title, command.time_of_day
        );

        let profile = self
            .profile_service
            .resolve_profile(command.profile_id.as_deref())
            .await?;

        Self::validate_title(&command.title)?;
        Self::validate_time(&command.time_of_day)?;
        if let Some(day) = command.day_of_week {
            Self::validate_day(day)?;
        }

        let now = Utc::now();
        let reminder = DomainReminder {
            id: DomainReminder::generate_id(now.timestamp_millis() as u64),
            profile_id: profile.id,
            title: command.title.trim().to_string(),
            time_of_day: command.time_of_day,
            day_of_week: command.day_of_week,
            is_active: true,
            created_at: now.to_rfc3339(),
            updated_at: now.to_rfc3339(),
        };

        self.repository.store_reminder(&reminder).await?;

        info!("Created reminder: {} with ID: {}", reminder.title, reminder.id);

        Ok(ReminderResult {
            reminder,
            success_message: "Reminder created successfully".to_string(),
        })
    }

    /// List a profile's reminders, earliest time of day first
    pub async fn list_reminders(&self, profile_id: Option<&str>) -> Result<ReminderListResult> {
        let profile = self.profile_service.resolve_profile(profile_id).await?;
        info!("Listing reminders for profile {}", profile.id);

        let reminders = self.repository.list_reminders(&profile.id).await?;

        Ok(ReminderListResult { reminders })
    }

    /// Update an existing reminder
    pub async fn update_reminder(&self, command: UpdateReminderCommand) -> Result<ReminderResult> {
        info!("Updating reminder: {}", command.reminder_id);

        let mut reminder = self
            .repository
            .get_reminder(&command.reminder_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Reminder not found: {}", command.reminder_id))?;

        if let Some(title) = command.title {
            Self::validate_title(&title)?;
            reminder.title = title.trim().to_string();
        }
        if let Some(time_of_day) = command.time_of_day {
            Self::validate_time(&time_of_day)?;
            reminder.time_of_day = time_of_day;
        }
        if let Some(day_of_week) = command.day_of_week {
            if let Some(day) = day_of_week {
                Self::validate_day(day)?;
            }
            reminder.day_of_week = day_of_week;
        }
        if let Some(is_active) = command.is_active {
            reminder.is_active = is_active;
        }

        reminder.updated_at = Utc::now().to_rfc3339();

        self.repository.update_reminder(&reminder).await?;

        Ok(ReminderResult {
            reminder,
            success_message: "Reminder updated successfully".to_string(),
        })
    }

    /// Delete a reminder
    pub async fn delete_reminder(&self, command: DeleteReminderCommand) -> Result<()> {
        info!("Deleting reminder: {}", command.reminder_id);

        let deleted = self.repository.delete_reminder(&command.reminder_id).await?;
        if !deleted {
            return Err(anyhow::anyhow!("Reminder not found: {}", command.reminder_id));
        }

        Ok(())
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ReminderValidationError::EmptyTitle.into());
        }
        if title.len() > 200 {
            return Err(ReminderValidationError::TitleTooLong.into());
        }
        Ok(())
    }

    fn validate_time(time_of_day: &str) -> Result<()> {
        if !DomainReminder::is_valid_time(time_of_day) {
            return Err(ReminderValidationError::InvalidTime.into());
        }
        Ok(())
    }

    fn validate_day(day: u8) -> Result<()> {
        if !DomainReminder::is_valid_day_of_week(day) {
            return Err(ReminderValidationError::InvalidDayOfWeek.into());
        }
        Ok(())
    }
}
