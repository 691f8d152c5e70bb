// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod profiles {
    use crate::domain::models::profile::DomainProfile;

    /// Input for creating a new profile.
    #[derive(Debug, Clone)]
    pub struct CreateProfileCommand {
        pub name: String,
        pub stage: shared::ProfileStage,
        pub due_date: Option<String>,
        pub current_week: Option<u32>,
        pub baby_birthdate: Option<String>,
    }

    /// Input for updating a profile.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateProfileCommand {
        pub profile_id: Option<String>,
        pub name: Option<String>,
        pub stage: Option<shared::ProfileStage>,
        pub due_date: Option<Option<String>>,
        pub current_week: Option<Option<u32>>,
        pub baby_birthdate: Option<Option<String>>,
    }

    /// Result of creating or updating a profile.
    #[derive(Debug, Clone)]
    pub struct ProfileResult {
        pub profile: DomainProfile,
        pub success_message: String,
    }

    /// Result of listing profiles.
    #[derive(Debug, Clone)]
    pub struct ProfileListResult {
        pub profiles: Vec<DomainProfile>,
    }
}

pub mod pregnancy {
    use crate::domain::models::pregnancy::PregnancyInfo;

    /// Input for computing pregnancy progress.
    ///
    /// With no overrides the active profile's stored data is used.
    #[derive(Debug, Clone, Default)]
    pub struct GetProgressCommand {
        pub profile_id: Option<String>,
        /// Compute for this due date instead of the stored one, YYYY-MM-DD
        pub due_date: Option<String>,
        /// Compute for this week instead of the stored data
        pub week: Option<u32>,
    }

    /// Result of computing pregnancy progress.
    #[derive(Debug, Clone)]
    pub struct GetProgressResult {
        /// Profile the progress belongs to; None for ad-hoc calculations
        pub profile_id: Option<String>,
        pub info: PregnancyInfo,
    }

    /// Input for formatting a baby's age.
    #[derive(Debug, Clone, Default)]
    pub struct GetBabyAgeCommand {
        pub profile_id: Option<String>,
        /// Format for this birthdate instead of the stored one, YYYY-MM-DD
        pub birthdate: Option<String>,
    }

    /// Result of formatting a baby's age.
    #[derive(Debug, Clone)]
    pub struct GetBabyAgeResult {
        /// Profile the age belongs to; None for ad-hoc calculations
        pub profile_id: Option<String>,
        pub age: String,
    }
}

pub mod assessments {
    use crate::domain::models::assessment::DomainAssessment;
    use std::collections::HashMap;

    /// Input for submitting a mood assessment.
    #[derive(Debug, Clone)]
    pub struct SubmitAssessmentCommand {
        pub profile_id: Option<String>,
        /// Answers keyed by question id, each 0..=3
        pub answers: HashMap<String, u8>,
        /// Record a locally summed result if the scoring service is down
        pub allow_unscored_fallback: bool,
    }

    /// Result of submitting a mood assessment.
    #[derive(Debug, Clone)]
    pub struct SubmitAssessmentResult {
        pub assessment: DomainAssessment,
        pub success_message: String,
    }

    /// Query parameters for listing past assessments.
    #[derive(Debug, Clone, Default)]
    pub struct AssessmentHistoryQuery {
        pub profile_id: Option<String>,
        pub limit: Option<u32>,
    }

    /// Result of listing past assessments.
    #[derive(Debug, Clone)]
    pub struct AssessmentHistoryResult {
        pub assessments: Vec<DomainAssessment>,
    }

    /// Input for deleting an assessment.
    #[derive(Debug, Clone)]
    pub struct DeleteAssessmentCommand {
        pub assessment_id: String,
    }
}

pub mod checkins {
    use crate::domain::models::checkin::{DomainCheckIn, VitalReadings};

    /// Input for submitting a physical check-in.
    #[derive(Debug, Clone)]
    pub struct SubmitCheckInCommand {
        pub profile_id: Option<String>,
        pub readings: VitalReadings,
    }

    /// Result of submitting a physical check-in.
    #[derive(Debug, Clone)]
    pub struct SubmitCheckInResult {
        pub checkin: DomainCheckIn,
        pub success_message: String,
    }

    /// Query parameters for listing past check-ins.
    #[derive(Debug, Clone, Default)]
    pub struct CheckInHistoryQuery {
        pub profile_id: Option<String>,
        pub limit: Option<u32>,
    }

    /// Result of listing past check-ins.
    #[derive(Debug, Clone)]
    pub struct CheckInHistoryResult {
        pub checkins: Vec<DomainCheckIn>,
    }

    /// Input for deleting a check-in.
    #[derive(Debug, Clone)]
    pub struct DeleteCheckInCommand {
        pub checkin_id: String,
    }
}

pub mod reminders {
    use crate::domain::models::reminder::DomainReminder;

    /// Input for creating a reminder.
    #[derive(Debug, Clone)]
    pub struct CreateReminderCommand {
        pub profile_id: Option<String>,
        pub title: String,
        pub time_of_day: String,
        pub day_of_week: Option<u8>,
    }

    /// Input for updating a reminder.
    #[derive(Debug, Clone)]
    pub struct UpdateReminderCommand {
        pub reminder_id: String,
        pub title: Option<String>,
        pub time_of_day: Option<String>,
        pub day_of_week: Option<Option<u8>>,
        pub is_active: Option<bool>,
    }

    /// Result of creating or updating a reminder.
    #[derive(Debug, Clone)]
    pub struct ReminderResult {
        pub reminder: DomainReminder,
        pub success_message: String,
    }

    /// Result of listing reminders.
    #[derive(Debug, Clone)]
    pub struct ReminderListResult {
        pub reminders: Vec<DomainReminder>,
    }

    /// Input for deleting a reminder.
    #[derive(Debug, Clone)]
    pub struct DeleteReminderCommand {
        pub reminder_id: String,
    }
}
