//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::assessment::DomainAssessment;
use crate::domain::models::checkin::DomainCheckIn;
use crate::domain::models::profile::DomainProfile;
use crate::domain::models::reminder::DomainReminder;

/// Trait defining the interface for profile storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// without modification.
#[async_trait]
pub trait ProfileStorage: Send + Sync {
    /// Store a new profile
    async fn store_profile(&self, profile: &DomainProfile) -> Result<()>;

    /// Retrieve a specific profile by ID
    async fn get_profile(&self, profile_id: &str) -> Result<Option<DomainProfile>>;

    /// List all profiles ordered by name
    async fn list_profiles(&self) -> Result<Vec<DomainProfile>>;

    /// Update an existing profile
    async fn update_profile(&self, profile: &DomainProfile) -> Result<()>;

    /// Delete a profile by ID
    async fn delete_profile(&self, profile_id: &str) -> Result<()>;

    /// Get the currently active profile ID
    async fn get_active_profile(&self) -> Result<Option<String>>;

    /// Set the currently active profile
    async fn set_active_profile(&self, profile_id: &str) -> Result<()>;
}

/// Trait defining the interface for assessment record storage operations
#[async_trait]
pub trait AssessmentStorage: Send + Sync {
    /// Store a new assessment record
    async fn store_assessment(&self, assessment: &DomainAssessment) -> Result<()>;

    /// Retrieve a specific assessment by ID
    async fn get_assessment(&self, assessment_id: &str) -> Result<Option<DomainAssessment>>;

    /// List assessments for a profile, most recent first
    async fn list_assessments(
        &self,
        profile_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DomainAssessment>>;

    /// Delete an assessment by ID
    /// Returns true if the assessment was found and deleted, false otherwise
    async fn delete_assessment(&self, assessment_id: &str) -> Result<bool>;
}

/// Trait defining the interface for check-in record storage operations
#[async_trait]
pub trait CheckInStorage: Send + Sync {
    /// Store a new check-in record
    async fn store_checkin(&self, checkin: &DomainCheckIn) -> Result<()>;

    /// Retrieve a specific check-in by ID
    async fn get_checkin(&self, checkin_id: &str) -> Result<Option<DomainCheckIn>>;

    /// List check-ins for a profile, most recent first
    async fn list_checkins(
        &self,
        profile_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DomainCheckIn>>;

    /// Delete a check-in by ID
    /// Returns true if the check-in was found and deleted, false otherwise
    async fn delete_checkin(&self, checkin_id: &str) -> Result<bool>;
}

/// Trait defining the interface for reminder storage operations
#[async_trait]
pub trait ReminderStorage: Send + Sync {
    /// Store a new reminder
    async fn store_reminder(&self, reminder: &DomainReminder) -> Result<()>;

    /// Retrieve a specific reminder by ID
    async fn get_reminder(&self, reminder_id: &str) -> Result<Option<DomainReminder>>;

    /// List reminders for a profile ordered by time of day
    async fn list_reminders(&self, profile_id: &str) -> Result<Vec<DomainReminder>>;

    /// Update an existing reminder
    async fn update_reminder(&self, reminder: &DomainReminder) -> Result<()>;

    /// Delete a reminder by ID
    /// Returns true if the reminder was found and deleted, false otherwise
    async fn delete_reminder(&self, reminder_id: &str) -> Result<bool>;
}
