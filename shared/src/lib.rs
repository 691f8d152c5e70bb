use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile ID in format: "profile::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Display name for the profile
    pub name: String,
    /// Whether this profile is tracking a pregnancy or a newborn
    pub stage: ProfileStage,
    /// Estimated due date (ISO 8601: YYYY-MM-DD), if known
    pub due_date: Option<String>,
    /// Manually entered pregnancy week (1-42), used when no due date is known
    pub current_week: Option<u32>,
    /// Date the manual week was entered (YYYY-MM-DD), so progress can advance
    pub week_recorded_at: Option<String>,
    /// Baby's birth date (YYYY-MM-DD) for postpartum profiles
    pub baby_birthdate: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// Tracking stage of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStage {
    /// Expecting: progress is derived from a due date or manual week
    Pregnancy,
    /// Baby has arrived: progress is the baby's age
    Postpartum,
}

impl ProfileStage {
    /// Stable storage/wire spelling of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStage::Pregnancy => "pregnancy",
            ProfileStage::Postpartum => "postpartum",
        }
    }

    /// Parse the storage/wire spelling back into a stage
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pregnancy" => Some(ProfileStage::Pregnancy),
            "postpartum" => Some(ProfileStage::Postpartum),
            _ => None,
        }
    }
}

/// Request for creating a new profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProfileRequest {
    pub name: String,
    pub stage: ProfileStage,
    /// Estimated due date (YYYY-MM-DD)
    pub due_date: Option<String>,
    /// Manually entered pregnancy week (1-42)
    pub current_week: Option<u32>,
    /// Baby's birth date (YYYY-MM-DD)
    pub baby_birthdate: Option<String>,
}

/// Request for updating an existing profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileRequest {
    /// Profile to update; uses the active profile if not provided
    pub profile_id: Option<String>,
    pub name: Option<String>,
    pub stage: Option<ProfileStage>,
    pub due_date: Option<String>,
    pub current_week: Option<u32>,
    pub baby_birthdate: Option<String>,
}

/// Response after creating or updating a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub success_message: String,
}

/// Response containing a list of profiles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
}

/// Request for setting the active profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetActiveProfileRequest {
    pub profile_id: String,
}

/// Response after setting the active profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetActiveProfileResponse {
    pub success_message: String,
    pub active_profile: Profile,
}

/// Response containing the active profile information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveProfileResponse {
    pub active_profile: Option<Profile>,
}

/// A point-in-time snapshot of pregnancy progress.
///
/// Always computed fresh from the profile's stored anchor (due date or
/// manual week); never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyProgress {
    /// Gestational week, 1-42
    pub current_week: u32,
    /// Day offset within the current week, 0-6
    pub current_day: u32,
    /// Trimester number: 1, 2 or 3
    pub trimester: u8,
    /// Human-readable trimester label, e.g. "2nd Trimester"
    pub trimester_label: String,
    /// Whole days until a 280-day gestation completes (never negative)
    pub days_remaining: u32,
    /// Percent of a 40-week gestation completed, capped at 100
    pub progress_percentage: f64,
    /// Fruit/vegetable size comparison for the current week
    pub baby_size: BabySize,
}

/// Size comparison entry for a gestational week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BabySize {
    pub week: u32,
    pub name: String,
    pub emoji: String,
    /// Approximate length, e.g. "34 cm"
    pub size: String,
}

/// Query parameters for the pregnancy progress endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyProgressRequest {
    /// Profile to compute progress for; uses the active profile if not provided
    pub profile_id: Option<String>,
}

/// Response containing the computed pregnancy progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PregnancyProgressResponse {
    /// Profile the progress was computed for; absent for ad-hoc
    /// calculations from an explicit due date or week
    pub profile_id: Option<String>,
    pub progress: PregnancyProgress,
}

/// Query parameters for the baby age endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BabyAgeRequest {
    pub profile_id: Option<String>,
}

/// Response containing the formatted baby age
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BabyAgeResponse {
    /// Profile the age was computed for; absent for ad-hoc calculations
    pub profile_id: Option<String>,
    /// Formatted age, e.g. "3 days", "1 week", "2 months"
    pub baby_age: String,
}

/// A single question in the mood questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodQuestion {
    /// Stable question id, e.g. "laughing"
    pub id: String,
    /// Question text shown to the user
    pub prompt: String,
}

/// Response listing the fixed questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionnaireResponse {
    pub questions: Vec<MoodQuestion>,
}

/// Assessment ID in format: "assessment::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAssessment {
    pub id: String,
    /// ID of the profile this assessment belongs to
    pub profile_id: String,
    /// Raw answers in fixed question order, each 0-3
    pub responses: Vec<u8>,
    /// Total score for the ten answers
    pub epds_score: i64,
    /// Risk label; "unscored" when the score is a local fallback sum
    pub risk_level: String,
    /// Longer severity description, when the scoring service provides one
    pub assessment: Option<String>,
    /// Whether the anxiety subscale was flagged
    pub anxiety_flag: Option<bool>,
    /// Recommended actions from the scoring service
    pub actions: Vec<String>,
    /// Additional recommended actions (anxiety follow-ups)
    pub additional_actions: Vec<String>,
    /// Which authority produced the score: "remote" or "local_sum"
    pub score_source: String,
    /// RFC 3339 timestamp
    pub submitted_at: String,
}

/// Request for submitting a completed questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAssessmentRequest {
    /// Profile the assessment belongs to; uses the active profile if not provided
    pub profile_id: Option<String>,
    /// Answers keyed by question id, each value 0-3
    pub answers: std::collections::HashMap<String, u8>,
    /// When true, a network failure falls back to a locally summed,
    /// explicitly "unscored" result instead of failing the submission
    #[serde(default)]
    pub allow_unscored_fallback: bool,
}

/// Response after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAssessmentResponse {
    pub assessment: MoodAssessment,
    pub success_message: String,
}

/// Response containing assessment history, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentListResponse {
    pub assessments: Vec<MoodAssessment>,
}

/// Check-in ID in format: "checkin::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    /// ID of the profile this check-in belongs to
    pub profile_id: String,
    /// Age in years
    pub age: u32,
    /// Systolic blood pressure in mmHg
    pub systolic: u32,
    /// Diastolic blood pressure in mmHg
    pub diastolic: u32,
    /// Heart rate in beats per minute
    pub heart_rate: u32,
    /// Blood sugar in mmol/L
    pub blood_sugar: f64,
    /// Body temperature in degrees Fahrenheit
    pub body_temp: f64,
    /// Risk label returned by the prediction service
    pub risk_level: String,
    /// RFC 3339 timestamp
    pub submitted_at: String,
}

/// Request for submitting a physical health check-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitCheckInRequest {
    /// Profile the check-in belongs to; uses the active profile if not provided
    pub profile_id: Option<String>,
    pub age: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub heart_rate: u32,
    /// Blood sugar in mmol/L
    pub blood_sugar: f64,
    /// Body temperature in degrees Fahrenheit
    pub body_temp: f64,
}

/// Response after a successful check-in submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitCheckInResponse {
    pub check_in: CheckIn,
    pub success_message: String,
}

/// Response containing check-in history, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInListResponse {
    pub check_ins: Vec<CheckIn>,
}

/// Reminder ID in format: "reminder::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    /// ID of the profile this reminder belongs to
    pub profile_id: String,
    /// Short description, e.g. "Prenatal vitamins"
    pub title: String,
    /// Time of day in 24h "HH:MM" format
    pub time_of_day: String,
    /// 0 = Sunday, 1 = Monday, ..., 6 = Saturday; None means every day
    pub day_of_week: Option<u8>,
    pub is_active: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// Request for creating a reminder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateReminderRequest {
    /// Profile the reminder belongs to; uses the active profile if not provided
    pub profile_id: Option<String>,
    pub title: String,
    /// Time of day in 24h "HH:MM" format
    pub time_of_day: String,
    /// 0 = Sunday, ..., 6 = Saturday; None means every day
    pub day_of_week: Option<u8>,
}

/// Request for updating a reminder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateReminderRequest {
    pub title: Option<String>,
    pub time_of_day: Option<String>,
    pub is_active: Option<bool>,
}

/// Response after creating or updating a reminder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReminderResponse {
    pub reminder: Reminder,
    pub success_message: String,
}

/// Response containing a profile's reminders, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReminderListResponse {
    pub reminders: Vec<Reminder>,
}

impl Profile {
    /// Generate a profile ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("profile::{}", epoch_millis)
    }

    /// Parse a profile ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_record_id(id, "profile")
    }

    /// Extract timestamp from profile ID
    pub fn extract_timestamp(&self) -> Result<u64, RecordIdError> {
        Self::parse_id(&self.id)
    }
}

impl MoodAssessment {
    /// Generate an assessment ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("assessment::{}", epoch_millis)
    }

    /// Parse an assessment ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_record_id(id, "assessment")
    }
}

impl CheckIn {
    /// Generate a check-in ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("checkin::{}", epoch_millis)
    }

    /// Parse a check-in ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_record_id(id, "checkin")
    }
}

impl Reminder {
    /// Generate a reminder ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("reminder::{}", epoch_millis)
    }

    /// Parse a reminder ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, RecordIdError> {
        parse_record_id(id, "reminder")
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
}

/// Parse a "kind::epoch_millis" record ID, checking the kind prefix
fn parse_record_id(id: &str, kind: &str) -> Result<u64, RecordIdError> {
    let parts: Vec<&str> = id.split("::").collect();
    if parts.len() != 2 || parts[0] != kind {
        return Err(RecordIdError::InvalidFormat);
    }

    parts[1]
        .parse::<u64>()
        .map_err(|_| RecordIdError::InvalidTimestamp)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for RecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIdError::InvalidFormat => write!(f, "Invalid record ID format"),
            RecordIdError::InvalidTimestamp => write!(f, "Invalid timestamp in record ID"),
        }
    }
}

impl std::error::Error for RecordIdError {}
