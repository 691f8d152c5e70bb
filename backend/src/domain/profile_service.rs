use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

use crate::domain::commands::profiles::{
    CreateProfileCommand, ProfileListResult, ProfileResult, UpdateProfileCommand,
};
use crate::domain::models::pregnancy::MAX_TRACKED_WEEK;
use crate::domain::models::profile::{DomainProfile, ProfileValidationError};
use crate::storage::{ProfileRepository, ProfileStorage};
use shared::ProfileStage;

/// Service for managing mother profiles
#[derive(Clone)]
pub struct ProfileService {
    repository: ProfileRepository,
}

impl ProfileService {
    /// Create a new ProfileService
    pub fn new(repository: ProfileRepository) -> Self {
        Self { repository }
    }

    /// Create a new profile
    pub async fn create_profile(&self, command: CreateProfileCommand) -> Result<ProfileResult> {
        info!("Creating profile: name={}, stage={:?}", command.name, command.stage);

        // Validate the command
        Self::validate_name(&command.name)?;
        Self::validate_stage_data(
            command.stage,
            command.due_date.as_deref(),
            command.current_week,
            command.baby_birthdate.as_deref(),
        )?;

        // Generate timestamps
        let now = Utc::now();
        let timestamp_millis = now.timestamp_millis() as u64;
        let timestamp_rfc3339 = now.to_rfc3339();

        // A manually entered week is only meaningful together with the
        // date it was entered on
        let week_recorded_at = command
            .current_week
            .map(|_| Local::now().date_naive().format("%Y-%m-%d").to_string());

        let profile = DomainProfile {
            id: DomainProfile::generate_id(timestamp_millis),
            name: command.name.trim().to_string(),
            stage: command.stage,
            due_date: command.due_date,
            current_week: command.current_week,
            week_recorded_at,
            baby_birthdate: command.baby_birthdate,
            created_at: timestamp_rfc3339.clone(),
            updated_at: timestamp_rfc3339,
        };

        self.repository.store_profile(&profile).await?;

        // The first profile becomes active so single-profile flows work
        // without an explicit activation step
        if self.repository.get_active_profile().await?.is_none() {
            self.repository.set_active_profile(&profile.id).await?;
        }

        info!("Created profile: {} with ID: {}", profile.name, profile.id);

        Ok(ProfileResult {
            profile,
            success_message: "Profile created successfully".to_string(),
        })
    }

    /// Get a profile by ID
    pub async fn get_profile(&self, profile_id: &str) -> Result<Option<DomainProfile>> {
        info!("Getting profile: {}", profile_id);

        let profile = self.repository.get_profile(profile_id).await?;

        if profile.is_none() {
            warn!("Profile not found: {}", profile_id);
        }

        Ok(profile)
    }

    /// List all profiles
    pub async fn list_profiles(&self) -> Result<ProfileListResult> {
        info!("Listing all profiles");

        let profiles = self.repository.list_profiles().await?;

        info!("Found {} profiles", profiles.len());

        Ok(ProfileListResult { profiles })
    }

    /// Update an existing profile
    pub async fn update_profile(&self, command: UpdateProfileCommand) -> Result<ProfileResult> {
        let mut profile = self.resolve_profile(command.profile_id.as_deref()).await?;
        info!("Updating profile: {}", profile.id);

        if let Some(ref name) = command.name {
            Self::validate_name(name)?;
            profile.name = name.trim().to_string();
        }
        if let Some(stage) = command.stage {
            profile.stage = stage;
        }
        if let Some(due_date) = command.due_date {
            if let Some(ref date) = due_date {
                Self::parse_date(date, ProfileValidationError::InvalidDueDate)?;
            }
            profile.due_date = due_date;
        }
        if let Some(current_week) = command.current_week {
            if let Some(week) = current_week {
                Self::validate_week(week)?;
            }
            // Re-anchor the week to today whenever it changes
            profile.week_recorded_at = current_week
                .map(|_| Local::now().date_naive().format("%Y-%m-%d").to_string());
            profile.current_week = current_week;
        }
        if let Some(baby_birthdate) = command.baby_birthdate {
            if let Some(ref date) = baby_birthdate {
                Self::parse_date(date, ProfileValidationError::InvalidBirthdate)?;
            }
            profile.baby_birthdate = baby_birthdate;
        }

        // The updated profile must still carry the data its stage needs
        Self::validate_stage_data(
            profile.stage,
            profile.due_date.as_deref(),
            profile.current_week,
            profile.baby_birthdate.as_deref(),
        )?;

        profile.updated_at = Utc::now().to_rfc3339();

        self.repository.update_profile(&profile).await?;

        info!("Updated profile: {} with ID: {}", profile.name, profile.id);

        Ok(ProfileResult {
            profile,
            success_message: "Profile updated successfully".to_string(),
        })
    }

    /// Delete a profile
    pub async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        info!("Deleting profile: {}", profile_id);

        let profile = self
            .repository
            .get_profile(profile_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", profile_id))?;

        self.repository.delete_profile(profile_id).await?;

        info!("Deleted profile: {} with ID: {}", profile.name, profile.id);

        Ok(())
    }

    /// Get the currently active profile, if one is set
    pub async fn get_active_profile(&self) -> Result<Option<DomainProfile>> {
        let active_id = match self.repository.get_active_profile().await? {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.repository.get_profile(&active_id).await? {
            Some(profile) => Ok(Some(profile)),
            None => {
                warn!("Active profile {} no longer exists", active_id);
                Ok(None)
            }
        }
    }

    /// Set the currently active profile
    pub async fn set_active_profile(&self, profile_id: &str) -> Result<ProfileResult> {
        info!("Setting active profile: {}", profile_id);

        self.repository.set_active_profile(profile_id).await?;

        let profile = self
            .repository
            .get_profile(profile_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", profile_id))?;

        Ok(ProfileResult {
            profile,
            success_message: "Active profile updated".to_string(),
        })
    }

    /// Resolve an optional profile id to a stored profile.
    ///
    /// A given id must exist; no id falls back to the active profile.
    pub async fn resolve_profile(&self, profile_id: Option<&str>) -> Result<DomainProfile> {
        match profile_id {
            Some(id) => self
                .repository
                .get_profile(id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("Profile not found: {}", id)),
            None => self
                .get_active_profile()
                .await?
                .ok_or_else(|| anyhow::anyhow!("No active profile set")),
        }
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName.into());
        }
        if name.len() > 100 {
            return Err(ProfileValidationError::NameTooLong.into());
        }
        Ok(())
    }

    fn validate_week(week: u32) -> Result<()> {
        if week < 1 || week > MAX_TRACKED_WEEK {
            return Err(ProfileValidationError::WeekOutOfRange.into());
        }
        Ok(())
    }

    fn parse_date(value: &str, error: ProfileValidationError) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| error.into())
    }

    /// Check that a stage carries the data it needs to report progress
    fn validate_stage_data(
        stage: ProfileStage,
        due_date: Option<&str>,
        current_week: Option<u32>,
        baby_birthdate: Option<&str>,
    ) -> Result<()> {
        if let Some(date) = due_date {
            Self::parse_date(date, ProfileValidationError::InvalidDueDate)?;
        }
        if let Some(week) = current_week {
            Self::validate_week(week)?;
        }
        if let Some(date) = baby_birthdate {
            Self::parse_date(date, ProfileValidationError::InvalidBirthdate)?;
        }

        match stage {
            ProfileStage::Pregnancy => {
                if due_date.is_none() && current_week.is_none() {
                    return Err(ProfileValidationError::MissingPregnancyData.into());
                }
            }
            ProfileStage::Postpartum => {
                if baby_birthdate.is_none() {
                    return Err(ProfileValidationError::MissingBirthdate.into());
                }
            }
        }

        Ok(())
    }
}
